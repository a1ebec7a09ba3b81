//! Argon2id password hashing.
//!
//! Hashes are stored as PHC strings (`$argon2id$v=19$m=19456,t=2,p=1$...`) in
//! the `password_hash` column of the `users` table.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use serde_json::json;
use std::sync::LazyLock;

use crate::error::AppError;

/// Hash verified against when the account does not exist, so unknown and
/// known emails cost the same.
static DUMMY_HASH: LazyLock<String> =
    LazyLock::new(|| hash_password("hbnb-dummy-password").unwrap_or_default());

/// Hashes a plaintext password with a random salt.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to hash password");
            AppError::internal("Failed to hash password", json!({}))
        })
}

/// Checks a plaintext password against a stored PHC hash.
///
/// A malformed stored hash is logged and treated as a mismatch.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let parsed = match PasswordHash::new(hash) {
        Ok(parsed) => parsed,
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash is malformed");
            return false;
        }
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok()
}

/// Hashes on the blocking pool so Argon2 does not stall the async runtime.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if hashing fails or the task is cancelled.
pub async fn spawn_hash_password(password: String) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password hashing task failed");
            AppError::internal("Failed to hash password", json!({}))
        })?
}

/// Verifies on the blocking pool. With no stored hash the password is checked
/// against a dummy hash and the result is always `false`.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the task is cancelled.
pub async fn spawn_verify_password(
    password: String,
    stored_hash: Option<String>,
) -> Result<bool, AppError> {
    tokio::task::spawn_blocking(move || match stored_hash {
        Some(hash) => verify_password(&password, &hash),
        None => {
            verify_password(&password, &DUMMY_HASH);
            false
        }
    })
    .await
    .map_err(|e| {
        tracing::error!(error = %e, "Password verification task failed");
        AppError::internal("Failed to verify password", json!({}))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = hash_password("adminpassword").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("adminpassword", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("same").unwrap();
        let second = hash_password("same").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_malformed_hash() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }

    #[test]
    fn test_dummy_hash_is_a_real_argon2_hash() {
        assert!(DUMMY_HASH.starts_with("$argon2id$"));
        assert!(verify_password("hbnb-dummy-password", &DUMMY_HASH));
    }

    #[tokio::test]
    async fn test_spawn_hash_then_verify() {
        let hash = spawn_hash_password("s3cret-pass".to_string()).await.unwrap();

        assert!(
            spawn_verify_password("s3cret-pass".to_string(), Some(hash.clone()))
                .await
                .unwrap()
        );
        assert!(
            !spawn_verify_password("wrong".to_string(), Some(hash))
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_spawn_verify_without_account_is_false() {
        // Even the dummy's own password must not match a missing account.
        assert!(
            !spawn_verify_password("hbnb-dummy-password".to_string(), None)
                .await
                .unwrap()
        );
    }
}
