//! Authentication service: credential checks and JWT access tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::identity::Identity;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::spawn_verify_password;

/// Access token claims.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: Uuid,
    pub is_admin: bool,
    /// Issued-at as Unix timestamp
    pub iat: i64,
    /// Expiry time as Unix timestamp
    pub exp: i64,
}

/// Issues and validates HS256-signed access tokens.
///
/// Tokens carry the user id and admin flag, so protected requests are
/// authorized without a database lookup.
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    /// `None` when the configured lifetime is out of chrono's range.
    token_ttl: Option<Duration>,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `users` - user repository for credential lookup
    /// - `secret` - HMAC key used to sign and verify tokens
    /// - `token_ttl_seconds` - lifetime of issued tokens
    pub fn new(users: Arc<dyn UserRepository>, secret: &str, token_ttl_seconds: i64) -> Self {
        Self {
            users,
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            token_ttl: Duration::try_seconds(token_ttl_seconds),
        }
    }

    /// Verifies email and password and returns a signed access token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the email is unknown or the password
    /// does not match. Both cases produce the same error and both run a full
    /// Argon2 verification.
    /// Returns [`AppError::Internal`] on database or signing errors.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user = self.users.find_by_email(email).await?;

        let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
        let matches = spawn_verify_password(password.to_string(), stored_hash).await?;

        let Some(user) = user.filter(|_| matches) else {
            tracing::warn!(email = %email, "Failed login attempt");
            return Err(AppError::unauthorized(
                "Invalid credentials",
                json!({}),
            ));
        };

        tracing::info!(user_id = %user.id, "User logged in");
        self.issue_token(&user)
    }

    /// Signs an access token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = self
            .token_ttl
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| {
                tracing::error!("Token lifetime overflows the clock range");
                AppError::internal("Failed to issue token", json!({}))
            })?;

        let claims = Claims {
            sub: user.id,
            is_admin: user.is_admin,
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "Failed to sign access token");
            AppError::internal("Failed to issue token", json!({}))
        })
    }

    /// Validates an access token and returns the caller identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, badly
    /// signed or expired.
    pub fn authenticate(&self, token: &str) -> Result<Identity, AppError> {
        let data = decode::<Claims>(token, &self.decoding_key, &Validation::default()).map_err(
            |e| {
                tracing::debug!(error = %e, "Rejected access token");
                AppError::unauthorized("Unauthorized", json!({"reason": "Invalid or expired token"}))
            },
        )?;

        Ok(Identity::new(data.claims.sub, data.claims.is_admin))
    }
}
