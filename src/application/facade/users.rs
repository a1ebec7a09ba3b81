//! User operations.

use serde_json::json;
use uuid::Uuid;

use super::Facade;
use crate::domain::entities::{NewUser, User, UserPatch, UserRegistration, UserUpdate};
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::utils::password::spawn_hash_password;

impl Facade {
    /// Registers a user, hashing the plaintext password.
    ///
    /// No caller check is made here; the HTTP layer restricts this to
    /// administrators and the admin CLI uses it to bootstrap the first one.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is already registered.
    pub async fn register_user(&self, registration: UserRegistration) -> Result<User, AppError> {
        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(AppError::bad_request(
                "Email already registered",
                json!({"email": registration.email}),
            ));
        }

        let password_hash = spawn_hash_password(registration.password).await?;

        let user = self
            .users
            .create(NewUser {
                first_name: registration.first_name,
                last_name: registration.last_name,
                email: registration.email,
                password_hash,
                is_admin: registration.is_admin,
            })
            .await?;
        tracing::info!(user_id = %user.id, is_admin = user.is_admin, "User registered");

        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    pub async fn get_user(&self, id: Uuid) -> Result<User, AppError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", json!({"id": id})))
    }

    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.users.find_by_email(email).await
    }

    pub async fn get_all_users(&self) -> Result<Vec<User>, AppError> {
        self.users.list().await
    }

    /// Updates a user profile.
    ///
    /// # Rules
    ///
    /// - Non-admins may only update themselves, may not touch email or
    ///   password and may not change `is_admin`
    /// - A new email must not belong to another user
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Forbidden`] or [`AppError::Validation`] when a rule is broken.
    pub async fn update_user(
        &self,
        identity: &Identity,
        id: Uuid,
        update: UserUpdate,
    ) -> Result<User, AppError> {
        if !identity.can_manage(id) {
            return Err(AppError::forbidden(
                "Unauthorized action",
                json!({"user_id": id}),
            ));
        }

        if !identity.is_admin {
            if update.touches_credentials() {
                return Err(AppError::bad_request(
                    "You cannot modify email or password.",
                    json!({}),
                ));
            }
            if update.is_admin.is_some() {
                return Err(AppError::forbidden(
                    "Admin privileges required",
                    json!({"field": "is_admin"}),
                ));
            }
        }

        let current = self.get_user(id).await?;

        if let Some(email) = &update.email
            && !email.eq_ignore_ascii_case(&current.email)
            && self.users.find_by_email(email).await?.is_some()
        {
            return Err(AppError::bad_request(
                "Email already in use",
                json!({"email": email}),
            ));
        }

        let password_hash = match update.password {
            Some(password) => Some(spawn_hash_password(password).await?),
            None => None,
        };

        let patch = UserPatch {
            first_name: update.first_name,
            last_name: update.last_name,
            email: update.email,
            password_hash,
            is_admin: update.is_admin,
        };

        self.users.update(id, patch).await
    }
}
