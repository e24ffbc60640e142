//! Tests for password reset service

#[cfg(test)]
mod service_tests;
