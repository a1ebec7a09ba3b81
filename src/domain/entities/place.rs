//! Place entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A place listed by its owner.
///
/// Amenities are not embedded; they are loaded on demand through
/// [`crate::domain::repositories::PlaceRepository::amenities`].
#[derive(Debug, Clone)]
pub struct Place {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for creating a new place.
#[derive(Debug, Clone)]
pub struct NewPlace {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner_id: Uuid,
    pub amenity_ids: Vec<Uuid>,
}

/// Partial update of a place. `amenity_ids: Some(..)` replaces the whole set.
#[derive(Debug, Clone, Default)]
pub struct PlacePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub amenity_ids: Option<Vec<Uuid>>,
}
