//! DTOs for amenity endpoints.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::Amenity;

/// Body of both create and update requests.
#[derive(Debug, Deserialize, Validate)]
pub struct AmenityRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct AmenityResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Amenity> for AmenityResponse {
    fn from(a: Amenity) -> Self {
        AmenityResponse {
            id: a.id,
            name: a.name,
        }
    }
}
