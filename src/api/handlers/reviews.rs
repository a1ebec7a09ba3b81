//! Handlers for review endpoints.

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use uuid::Uuid;

use crate::api::dto::review::{
    CreateReviewRequest, MessageResponse, PlaceReviewItem, ReviewResponse, UpdateReviewRequest,
};
use crate::domain::identity::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a review for a place.
///
/// # Endpoint
///
/// `POST /api/v1/reviews` (authenticated)
///
/// # Request Body
///
/// ```json
/// {
///   "text": "Great place to stay!",
///   "rating": 5,
///   "user_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
///   "place_id": "1fa85f64-5717-4562-b3fc-2c963f66afa6"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for an unknown place or user, empty text or a rating outside 1-5.
/// Returns 403 if `user_id` is not the caller, the caller owns the place or
/// already reviewed it.
pub async fn create_review_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReviewResponse>), AppError> {
    let Json(payload) = payload?;

    let review = state
        .facade
        .create_review(&identity, payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(review.into())))
}

/// Lists all reviews.
///
/// `GET /api/v1/reviews`
pub async fn list_reviews_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let reviews = state.facade.get_all_reviews().await?;
    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// Returns a single review.
///
/// `GET /api/v1/reviews/{id}`
pub async fn get_review_handler(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ReviewResponse>, AppError> {
    let review = state.facade.get_review(id).await?;
    Ok(Json(review.into()))
}

/// Updates text and/or rating of a review.
///
/// # Endpoint
///
/// `PUT /api/v1/reviews/{id}` (authenticated)
///
/// Non-admin callers must be the author and include their own `user_id`
/// in the body.
pub async fn update_review_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
    payload: Result<Json<UpdateReviewRequest>, JsonRejection>,
) -> Result<Json<ReviewResponse>, AppError> {
    let Json(payload) = payload?;

    let review = state
        .facade
        .update_review(&identity, id, payload.user_id, payload.patch())
        .await?;

    Ok(Json(review.into()))
}

/// Deletes a review.
///
/// `DELETE /api/v1/reviews/{id}` (authenticated, author or admin)
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    state.facade.delete_review(&identity, id).await?;

    Ok(Json(MessageResponse {
        message: format!("Review {} deleted successfully", id),
    }))
}

/// Lists the reviews of a place, each tagged with the place title.
///
/// # Endpoint
///
/// `GET /api/v1/reviews/places/{place_id}/reviews`
///
/// # Errors
///
/// Returns 404 if the place does not exist.
pub async fn place_reviews_handler(
    State(state): State<AppState>,
    Path(place_id): Path<Uuid>,
) -> Result<Json<Vec<PlaceReviewItem>>, AppError> {
    let (place, reviews) = state.facade.get_reviews_by_place(place_id).await?;

    let items = reviews
        .into_iter()
        .map(|review| PlaceReviewItem {
            review: review.into(),
            place_name: place.title.clone(),
        })
        .collect();

    Ok(Json(items))
}
