//! Shared utilities: password hashing and validating extractors.

pub mod password;
pub mod validate;
