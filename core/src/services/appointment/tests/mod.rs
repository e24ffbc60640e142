//! Tests for appointment service
