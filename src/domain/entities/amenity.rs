//! Amenity entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A feature a place can offer (e.g. "Wi-Fi"). Linked to places through the
/// `place_amenity` join table.
#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
