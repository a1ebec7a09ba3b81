//! DTOs for review endpoints.
//!
//! Content rules (non-empty text, rating 1-5) are checked by the facade after
//! the ownership checks, so these request types carry no validator rules.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{NewReview, Review, ReviewPatch};

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
}

impl From<CreateReviewRequest> for NewReview {
    fn from(req: CreateReviewRequest) -> Self {
        NewReview {
            text: req.text,
            rating: req.rating,
            user_id: req.user_id,
            place_id: req.place_id,
        }
    }
}

/// Review update. `user_id` must match the caller for non-admins. A review
/// never moves between places, so a `place_id` in the body is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateReviewRequest {
    pub text: Option<String>,
    pub rating: Option<i32>,
    pub user_id: Option<Uuid>,
}

impl UpdateReviewRequest {
    pub fn patch(&self) -> ReviewPatch {
        ReviewPatch {
            text: self.text.clone(),
            rating: self.rating,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
}

impl From<Review> for ReviewResponse {
    fn from(r: Review) -> Self {
        ReviewResponse {
            id: r.id,
            text: r.text,
            rating: r.rating,
            user_id: r.user_id,
            place_id: r.place_id,
        }
    }
}

/// Review listed under a place, tagged with the place title.
#[derive(Debug, Serialize)]
pub struct PlaceReviewItem {
    #[serde(flatten)]
    pub review: ReviewResponse,
    pub place_name: String,
}

/// Plain confirmation message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
