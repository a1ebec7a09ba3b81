//! DTOs for the login endpoint.

use serde::{Deserialize, Serialize};

/// Login credentials.
///
/// Both fields are optional at the JSON level so a missing one is reported
/// as "Missing email" / "Missing password" rather than a generic body error.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}
