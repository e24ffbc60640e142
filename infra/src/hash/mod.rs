//! Password Hashing Module
//!
//! bcrypt-backed implementation of the core `HashProvider`. Hashing runs on
//! the blocking thread pool so a high work factor does not stall the runtime.

pub mod bcrypt;

pub use self::bcrypt::BcryptHashProvider;
