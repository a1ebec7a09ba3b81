//! DTOs for place endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::amenity::AmenityResponse;
use crate::domain::entities::{NewPlace, Place, PlacePatch, User};

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePlaceRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: String,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: f64,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,

    /// Amenity ids to link to the place.
    #[serde(default)]
    pub amenities: Vec<Uuid>,
}

impl From<CreatePlaceRequest> for NewPlace {
    fn from(req: CreatePlaceRequest) -> Self {
        NewPlace {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            // Filled in by the facade from the caller identity.
            owner_id: Uuid::nil(),
            amenity_ids: req.amenities,
        }
    }
}

/// Partial place update. `amenities`, when present, replaces the whole set.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePlaceRequest {
    #[validate(length(min = 1, max = 100))]
    pub title: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: Option<f64>,

    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: Option<f64>,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: Option<f64>,

    pub amenities: Option<Vec<Uuid>>,
}

impl From<UpdatePlaceRequest> for PlacePatch {
    fn from(req: UpdatePlaceRequest) -> Self {
        PlacePatch {
            title: req.title,
            description: req.description,
            price: req.price,
            latitude: req.latitude,
            longitude: req.longitude,
            amenity_ids: req.amenities,
        }
    }
}

/// Place entry in list responses.
#[derive(Debug, Serialize)]
pub struct PlaceSummary {
    pub id: Uuid,
    pub title: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Place> for PlaceSummary {
    fn from(p: Place) -> Self {
        PlaceSummary {
            id: p.id,
            title: p.title,
            latitude: p.latitude,
            longitude: p.longitude,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OwnerInfo {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<User> for OwnerInfo {
    fn from(u: User) -> Self {
        OwnerInfo {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
        }
    }
}

/// Full place representation with owner and amenities.
#[derive(Debug, Serialize)]
pub struct PlaceDetails {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub owner: OwnerInfo,
    pub amenities: Vec<AmenityResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PlaceDetails {
    pub fn new(place: Place, owner: User, amenities: Vec<AmenityResponse>) -> Self {
        PlaceDetails {
            id: place.id,
            title: place.title,
            description: place.description,
            price: place.price,
            latitude: place.latitude,
            longitude: place.longitude,
            owner: owner.into(),
            amenities,
            created_at: place.created_at,
            updated_at: place.updated_at,
        }
    }
}
