//! Review operations.

use serde_json::json;
use uuid::Uuid;

use super::Facade;
use crate::domain::entities::review::{MAX_RATING, MIN_RATING, is_valid_rating};
use crate::domain::entities::{NewReview, Place, Review, ReviewPatch};
use crate::domain::identity::Identity;
use crate::error::AppError;

fn ensure_review_content(text: Option<&str>, rating: Option<i32>) -> Result<(), AppError> {
    if let Some(text) = text
        && text.trim().is_empty()
    {
        return Err(AppError::bad_request(
            "Review text must not be empty",
            json!({"field": "text"}),
        ));
    }

    if let Some(rating) = rating
        && !is_valid_rating(rating)
    {
        return Err(AppError::bad_request(
            format!("Rating must be between {MIN_RATING} and {MAX_RATING}"),
            json!({"field": "rating", "min": MIN_RATING, "max": MAX_RATING}),
        ));
    }

    Ok(())
}

impl Facade {
    /// Creates a review on behalf of `identity`.
    ///
    /// # Checks (in order)
    ///
    /// 1. The place exists
    /// 2. `new_review.user_id` is the caller
    /// 3. The caller does not own the place
    /// 4. The caller has not reviewed the place yet
    /// 5. Text is non-empty and rating is 1-5
    /// 6. The user exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a missing place or user and invalid content.
    /// Returns [`AppError::Forbidden`] when checks 2-4 fail.
    pub async fn create_review(
        &self,
        identity: &Identity,
        new_review: NewReview,
    ) -> Result<Review, AppError> {
        let place = self
            .places
            .find_by_id(new_review.place_id)
            .await?
            .ok_or_else(|| {
                AppError::bad_request(
                    "Place not found",
                    json!({"place_id": new_review.place_id}),
                )
            })?;

        if new_review.user_id != identity.user_id {
            return Err(AppError::forbidden(
                "Unauthorized action",
                json!({"user_id": new_review.user_id}),
            ));
        }

        if place.owner_id == identity.user_id {
            return Err(AppError::forbidden(
                "Unauthorized action: You cannot review your own place.",
                json!({"place_id": place.id}),
            ));
        }

        if self
            .reviews
            .find_by_user_and_place(identity.user_id, place.id)
            .await?
            .is_some()
        {
            return Err(AppError::forbidden(
                "Unauthorized action: You already reviewed this place.",
                json!({"place_id": place.id}),
            ));
        }

        ensure_review_content(Some(&new_review.text), Some(new_review.rating))?;

        if self.users.find_by_id(new_review.user_id).await?.is_none() {
            return Err(AppError::bad_request(
                "User not found",
                json!({"user_id": new_review.user_id}),
            ));
        }

        let review = self.reviews.create(new_review).await?;
        tracing::info!(review_id = %review.id, place_id = %review.place_id, "Review created");

        Ok(review)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    pub async fn get_review(&self, id: Uuid) -> Result<Review, AppError> {
        self.reviews
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Review not found", json!({"id": id})))
    }

    pub async fn get_all_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.reviews.list().await
    }

    /// Returns a place together with its reviews.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    pub async fn get_reviews_by_place(
        &self,
        place_id: Uuid,
    ) -> Result<(Place, Vec<Review>), AppError> {
        let place = self.get_place(place_id).await?;
        let reviews = self.reviews.list_by_place(place_id).await?;
        Ok((place, reviews))
    }

    /// Updates text and/or rating of a review.
    ///
    /// Non-admin callers must be the author and must echo their own id in
    /// `claimed_user_id`. Administrators may edit any review.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    /// Returns [`AppError::Forbidden`] if ownership checks fail.
    /// Returns [`AppError::Validation`] for empty text or out-of-range rating.
    pub async fn update_review(
        &self,
        identity: &Identity,
        id: Uuid,
        claimed_user_id: Option<Uuid>,
        patch: ReviewPatch,
    ) -> Result<Review, AppError> {
        let review = self.get_review(id).await?;

        if !identity.can_manage(review.user_id) {
            return Err(AppError::forbidden(
                "Unauthorized action, you can only update your own reviews",
                json!({"id": id}),
            ));
        }

        if !identity.is_admin && claimed_user_id != Some(identity.user_id) {
            return Err(AppError::forbidden(
                "Unauthorized action, a review must contain your id",
                json!({"user_id": claimed_user_id}),
            ));
        }

        ensure_review_content(patch.text.as_deref(), patch.rating)?;

        let updated = self.reviews.update(id, patch).await?;
        tracing::info!(review_id = %id, "Review updated");

        Ok(updated)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the review does not exist.
    /// Returns [`AppError::Forbidden`] if a non-admin caller is not the author.
    pub async fn delete_review(&self, identity: &Identity, id: Uuid) -> Result<(), AppError> {
        let review = self.get_review(id).await?;

        if !identity.can_manage(review.user_id) {
            return Err(AppError::forbidden(
                "Unauthorized action, you can only delete your own reviews",
                json!({"id": id}),
            ));
        }

        self.reviews.delete(id).await?;
        tracing::info!(review_id = %id, "Review deleted");

        Ok(())
    }
}
