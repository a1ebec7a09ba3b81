//! PostgreSQL implementation of review repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::{NewReview, Review, ReviewPatch};
use crate::domain::repositories::ReviewRepository;
use crate::error::AppError;

const REVIEW_COLUMNS: &str = "id, text, rating, user_id, place_id, created_at, updated_at";

#[derive(FromRow)]
struct ReviewRow {
    id: Uuid,
    text: String,
    rating: i32,
    user_id: Uuid,
    place_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(r: ReviewRow) -> Self {
        Review {
            id: r.id,
            text: r.text,
            rating: r.rating,
            user_id: r.user_id,
            place_id: r.place_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for reviews.
///
/// The `reviews_user_place_key` constraint backs the one-review-per-place rule.
pub struct PgReviewRepository {
    pool: Arc<PgPool>,
}

impl PgReviewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for PgReviewRepository {
    async fn create(&self, new_review: NewReview) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            INSERT INTO reviews (text, rating, user_id, place_id)
            VALUES ($1, $2, $3, $4)
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(new_review.text)
        .bind(new_review.rating)
        .bind(new_review.user_id)
        .bind(new_review.place_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Review::from))
    }

    async fn find_by_user_and_place(
        &self,
        user_id: Uuid,
        place_id: Uuid,
    ) -> Result<Option<Review>, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE user_id = $1 AND place_id = $2"
        ))
        .bind(user_id)
        .bind(place_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Review::from))
    }

    async fn list(&self) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews ORDER BY created_at"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn list_by_place(&self, place_id: Uuid) -> Result<Vec<Review>, AppError> {
        let rows = sqlx::query_as::<_, ReviewRow>(&format!(
            "SELECT {REVIEW_COLUMNS} FROM reviews WHERE place_id = $1 ORDER BY created_at"
        ))
        .bind(place_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Review::from).collect())
    }

    async fn update(&self, id: Uuid, patch: ReviewPatch) -> Result<Review, AppError> {
        let row = sqlx::query_as::<_, ReviewRow>(&format!(
            r#"
            UPDATE reviews SET
                text       = COALESCE($2, text),
                rating     = COALESCE($3, rating),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REVIEW_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.text)
        .bind(patch.rating)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Review::from)
            .ok_or_else(|| AppError::not_found("Review not found", json!({"id": id})))
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Review not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
