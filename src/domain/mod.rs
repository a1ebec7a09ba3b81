//! Domain layer containing business entities and repository contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures (users, places, amenities, reviews)
//! - [`repositories`] - Data access trait definitions
//! - [`identity`] - The authenticated caller as seen by the facade
//!
//! The domain layer has no dependencies on infrastructure or presentation layers.
//! Repository traits are implemented in `crate::infrastructure::persistence`, and
//! business rules live in [`crate::application::facade`].

pub mod entities;
pub mod identity;
pub mod repositories;
