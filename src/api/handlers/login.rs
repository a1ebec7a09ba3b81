//! Handler for the login endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Authenticates a user and returns a JWT access token.
///
/// # Endpoint
///
/// `POST /api/v1/auth/login` (also `POST /api/v1/auth`)
///
/// # Request Body
///
/// ```json
/// { "email": "john.doe@example.com", "password": "secret" }
/// ```
///
/// # Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIs..." }
/// ```
///
/// # Errors
///
/// Returns 400 if `email` or `password` is missing.
/// Returns 401 if the credentials are invalid.
pub async fn login_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, AppError> {
    let Json(credentials) = payload?;

    let email = credentials
        .email
        .ok_or_else(|| AppError::bad_request("Missing email", json!({"field": "email"})))?;
    let password = credentials
        .password
        .ok_or_else(|| AppError::bad_request("Missing password", json!({"field": "password"})))?;

    let access_token = state.auth_service.login(&email, &password).await?;

    Ok(Json(LoginResponse { access_token }))
}
