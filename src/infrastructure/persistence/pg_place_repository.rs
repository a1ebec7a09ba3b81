//! PostgreSQL implementation of place repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool, Postgres, Transaction};
use std::sync::Arc;
use uuid::Uuid;

use super::pg_amenity_repository::AmenityRow;
use crate::domain::entities::{Amenity, NewPlace, Place, PlacePatch};
use crate::domain::repositories::PlaceRepository;
use crate::error::AppError;

const PLACE_COLUMNS: &str =
    "id, title, description, price, latitude, longitude, owner_id, created_at, updated_at";

#[derive(FromRow)]
struct PlaceRow {
    id: Uuid,
    title: String,
    description: Option<String>,
    price: f64,
    latitude: f64,
    longitude: f64,
    owner_id: Uuid,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PlaceRow> for Place {
    fn from(r: PlaceRow) -> Self {
        Place {
            id: r.id,
            title: r.title,
            description: r.description,
            price: r.price,
            latitude: r.latitude,
            longitude: r.longitude,
            owner_id: r.owner_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// PostgreSQL repository for places.
///
/// Amenity links live in `place_amenity`; writes touching both tables run in a
/// single transaction.
pub struct PgPlaceRepository {
    pool: Arc<PgPool>,
}

impl PgPlaceRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn link_amenities(
        tx: &mut Transaction<'_, Postgres>,
        place_id: Uuid,
        amenity_ids: &[Uuid],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM place_amenity WHERE place_id = $1")
            .bind(place_id)
            .execute(&mut **tx)
            .await?;

        if amenity_ids.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO place_amenity (place_id, amenity_id)
            SELECT $1, UNNEST($2::uuid[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(place_id)
        .bind(amenity_ids)
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn create(&self, new_place: NewPlace) -> Result<Place, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            INSERT INTO places (title, description, price, latitude, longitude, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PLACE_COLUMNS}
            "#
        ))
        .bind(new_place.title)
        .bind(new_place.description)
        .bind(new_place.price)
        .bind(new_place.latitude)
        .bind(new_place.longitude)
        .bind(new_place.owner_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::link_amenities(&mut tx, row.id, &new_place.amenity_ids).await?;

        tx.commit().await?;
        Ok(row.into())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, AppError> {
        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Place::from))
    }

    async fn list(&self) -> Result<Vec<Place>, AppError> {
        let rows = sqlx::query_as::<_, PlaceRow>(&format!(
            "SELECT {PLACE_COLUMNS} FROM places ORDER BY created_at, title"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Place::from).collect())
    }

    async fn update(&self, id: Uuid, patch: PlacePatch) -> Result<Place, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, PlaceRow>(&format!(
            r#"
            UPDATE places SET
                title       = COALESCE($2, title),
                description = COALESCE($3, description),
                price       = COALESCE($4, price),
                latitude    = COALESCE($5, latitude),
                longitude   = COALESCE($6, longitude),
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {PLACE_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.price)
        .bind(patch.latitude)
        .bind(patch.longitude)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(row) = row else {
            tx.rollback().await?;
            return Err(AppError::not_found("Place not found", json!({"id": id})));
        };

        if let Some(amenity_ids) = patch.amenity_ids {
            Self::link_amenities(&mut tx, id, &amenity_ids).await?;
        }

        tx.commit().await?;
        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        // Reviews and amenity links go with it (ON DELETE CASCADE).
        let result = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Place not found", json!({"id": id})));
        }

        Ok(())
    }

    async fn replace_amenities(
        &self,
        place_id: Uuid,
        amenity_ids: Vec<Uuid>,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        Self::link_amenities(&mut tx, place_id, &amenity_ids).await?;
        tx.commit().await?;
        Ok(())
    }

    async fn amenities(&self, place_id: Uuid) -> Result<Vec<Amenity>, AppError> {
        let rows = sqlx::query_as::<_, AmenityRow>(
            r#"
            SELECT a.id, a.name, a.created_at, a.updated_at
            FROM amenities a
            JOIN place_amenity pa ON pa.amenity_id = a.id
            WHERE pa.place_id = $1
            ORDER BY a.name
            "#,
        )
        .bind(place_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Amenity::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM places")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
