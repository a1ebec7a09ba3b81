//! Handlers for amenity endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::amenity::{AmenityRequest, AmenityResponse};
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an amenity.
///
/// `POST /api/v1/amenities` (authenticated, admin only)
pub async fn create_amenity_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<AmenityRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AmenityResponse>), AppError> {
    identity.require_admin()?;

    let Json(payload) = payload?;
    payload.validate()?;

    let amenity = state.facade.create_amenity(&payload.name).await?;

    Ok((StatusCode::CREATED, Json(amenity.into())))
}

/// `GET /api/v1/amenities`
pub async fn list_amenities_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<AmenityResponse>>, AppError> {
    let amenities = state.facade.get_all_amenities().await?;
    Ok(Json(amenities.into_iter().map(Into::into).collect()))
}

/// `GET /api/v1/amenities/{id}`
pub async fn get_amenity_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AmenityResponse>, AppError> {
    let amenity = state.facade.get_amenity(id).await?;
    Ok(Json(amenity.into()))
}

/// Renames an amenity.
///
/// `PUT /api/v1/amenities/{id}` (authenticated, admin only)
pub async fn update_amenity_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    payload: Result<Json<AmenityRequest>, JsonRejection>,
) -> Result<Json<AmenityResponse>, AppError> {
    identity.require_admin()?;

    let Json(payload) = payload?;
    payload.validate()?;

    let amenity = state.facade.update_amenity(id, &payload.name).await?;

    Ok(Json(amenity.into()))
}
