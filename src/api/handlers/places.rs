//! Handlers for place endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::place::{CreatePlaceRequest, PlaceDetails, PlaceSummary, UpdatePlaceRequest};
use crate::api::dto::review::MessageResponse;
use crate::domain::entities::Place;
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a place owned by the caller.
///
/// # Endpoint
///
/// `POST /api/v1/places` (authenticated)
///
/// # Request Body
///
/// ```json
/// {
///   "title": "Cozy Apartment",
///   "description": "A nice place to stay",
///   "price": 100.0,
///   "latitude": 37.7749,
///   "longitude": -122.4194,
///   "amenities": ["3fa85f64-5717-4562-b3fc-2c963f66afa6"]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 on out-of-range values or an unknown amenity.
pub async fn create_place_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreatePlaceRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PlaceDetails>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let place = state.facade.create_place(&identity, payload.into()).await?;
    let details = place_details(&state, place).await?;

    Ok((StatusCode::CREATED, Json(details)))
}

/// `GET /api/v1/places`
pub async fn list_places_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<PlaceSummary>>, AppError> {
    let places = state.facade.get_all_places().await?;
    Ok(Json(places.into_iter().map(Into::into).collect()))
}

/// Returns a place with its owner and amenities.
///
/// `GET /api/v1/places/{id}`
pub async fn get_place_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PlaceDetails>, AppError> {
    let place = state.facade.get_place(id).await?;
    Ok(Json(place_details(&state, place).await?))
}

/// Partially updates a place.
///
/// # Endpoint
///
/// `PUT /api/v1/places/{id}` (authenticated, owner or admin)
///
/// When `amenities` is present it replaces the linked set.
pub async fn update_place_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdatePlaceRequest>, JsonRejection>,
) -> Result<Json<PlaceDetails>, AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let place = state
        .facade
        .update_place(&identity, id, payload.into())
        .await?;

    Ok(Json(place_details(&state, place).await?))
}

/// Deletes a place together with its reviews.
///
/// `DELETE /api/v1/places/{id}` (authenticated, owner or admin)
pub async fn delete_place_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.facade.delete_place(&identity, id).await?;

    Ok(Json(MessageResponse {
        message: format!("Place {} deleted successfully", id),
    }))
}

async fn place_details(state: &AppState, place: Place) -> Result<PlaceDetails, AppError> {
    let owner = state.facade.get_user(place.owner_id).await?;
    let amenities = state.facade.get_place_amenities(place.id).await?;

    Ok(PlaceDetails::new(
        place,
        owner,
        amenities.into_iter().map(Into::into).collect(),
    ))
}
