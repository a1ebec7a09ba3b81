//! Review entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Lowest accepted rating.
pub const MIN_RATING: i32 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i32 = 5;

/// A user's rated review of a place.
///
/// A user reviews a given place at most once and never reviews a place they own.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new review.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub text: String,
    pub rating: i32,
    pub user_id: Uuid,
    pub place_id: Uuid,
}

/// Partial update of a review. Author and place are immutable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewPatch {
    pub text: Option<String>,
    pub rating: Option<i32>,
}

pub fn is_valid_rating(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}
