//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`User`] - An account that can own places and write reviews
//! - [`Place`] - A rentable place owned by a user
//! - [`Amenity`] - A feature attached to places (many-to-many)
//! - [`Review`] - A rated review of a place by a user
//!
//! # Design Pattern
//!
//! Entities are plain data. Separate structs carry creation and update input:
//! - `NewUser`, `NewPlace`, `NewReview` - For creating new records
//! - `UserPatch`, `PlacePatch`, `ReviewPatch` - For partial updates

pub mod amenity;
pub mod place;
pub mod review;
pub mod user;

pub use amenity::Amenity;
pub use place::{NewPlace, Place, PlacePatch};
pub use review::{NewReview, Review, ReviewPatch};
pub use user::{NewUser, User, UserPatch, UserRegistration, UserUpdate};
