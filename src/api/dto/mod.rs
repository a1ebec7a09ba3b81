//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization; request types
//! with shape rules derive `validator::Validate`.

pub mod amenity;
pub mod auth;
pub mod health;
pub mod place;
pub mod review;
pub mod user;
