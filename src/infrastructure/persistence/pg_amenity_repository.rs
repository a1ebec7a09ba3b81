//! PostgreSQL implementation of amenity repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::Amenity;
use crate::domain::repositories::AmenityRepository;
use crate::error::AppError;

#[derive(FromRow)]
pub(crate) struct AmenityRow {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<AmenityRow> for Amenity {
    fn from(r: AmenityRow) -> Self {
        Amenity {
            id: r.id,
            name: r.name,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for the amenity catalogue.
pub struct PgAmenityRepository {
    pool: Arc<PgPool>,
}

impl PgAmenityRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AmenityRepository for PgAmenityRepository {
    async fn create(&self, name: &str) -> Result<Amenity, AppError> {
        let row = sqlx::query_as::<_, AmenityRow>(
            r#"
            INSERT INTO amenities (name)
            VALUES ($1)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(name)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, AppError> {
        let row = sqlx::query_as::<_, AmenityRow>(
            "SELECT id, name, created_at, updated_at FROM amenities WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Amenity::from))
    }

    async fn list(&self) -> Result<Vec<Amenity>, AppError> {
        let rows = sqlx::query_as::<_, AmenityRow>(
            "SELECT id, name, created_at, updated_at FROM amenities ORDER BY name",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<Amenity, AppError> {
        let row = sqlx::query_as::<_, AmenityRow>(
            r#"
            UPDATE amenities SET name = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Amenity::from)
            .ok_or_else(|| AppError::not_found("Amenity not found", json!({"id": id})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM amenities")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
