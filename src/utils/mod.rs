//! Helper functions used across the application.
//!
//! - [`password`] - Argon2id password hashing and verification

pub mod password;
