//! Handlers for user endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/v1/users` (authenticated, admin only)
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "John",
///   "last_name": "Doe",
///   "email": "john.doe@example.com",
///   "password": "s3cret-pass",
///   "is_admin": false
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on invalid input or an already registered email.
/// Returns 403 if the caller is not an administrator.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    identity.require_admin()?;

    let Json(payload) = payload?;
    payload.validate()?;

    let user = state.facade.register_user(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// `GET /api/v1/users`
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.facade.get_all_users().await?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

/// `GET /api/v1/users/{id}`
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let user = state.facade.get_user(id).await?;
    Ok(Json(user.into()))
}

/// Updates a user profile.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}` (authenticated)
///
/// Users may edit their own names. Administrators may edit any user,
/// including email, password and admin flag.
pub async fn update_user_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user = state
        .facade
        .update_user(&identity, id, payload.into())
        .await?;

    Ok(Json(user.into()))
}
