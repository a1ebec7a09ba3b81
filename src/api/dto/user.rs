//! DTOs for user endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{User, UserRegistration, UserUpdate};

#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"), length(max = 120))]
    pub email: String,

    #[validate(length(min = 6, max = 128))]
    pub password: String,

    pub is_admin: Option<bool>,
}

impl From<CreateUserRequest> for UserRegistration {
    fn from(req: CreateUserRequest) -> Self {
        UserRegistration {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin.unwrap_or(false),
        }
    }
}

/// Partial profile update. Absent fields are left unchanged.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"), length(max = 120))]
    pub email: Option<String>,

    #[validate(length(min = 6, max = 128))]
    pub password: Option<String>,

    pub is_admin: Option<bool>,
}

impl From<UpdateUserRequest> for UserUpdate {
    fn from(req: UpdateUserRequest) -> Self {
        UserUpdate {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            is_admin: req.is_admin,
        }
    }
}

/// Public user representation. Never includes the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        UserResponse {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            is_admin: u.is_admin,
            created_at: u.created_at,
            updated_at: u.updated_at,
        }
    }
}
