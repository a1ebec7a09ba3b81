//! Repository trait for reviews.

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for reviews.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgReviewRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Creates a new review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user already reviewed the place.
    /// Returns [`AppError::Validation`] if the user or place does not exist.
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, AppError>;

    /// Finds the review a user wrote for a place, if any.
    async fn find_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, AppError>;

    /// Lists all reviews ordered by creation time.
    async fn list(&self) -> Result<Vec<Review>, AppError>;

    /// Lists the reviews of one place.
    async fn list_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, AppError>;

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    async fn update(&self, id: Uuid, patch: ReviewPatch) -> Result<Review, AppError>;

    /// Deletes a review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
