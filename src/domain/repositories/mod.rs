//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts and credential lookup
//! - [`PlaceRepository`] - Places and their amenity links
//! - [`AmenityRepository`] - Amenity catalogue
//! - [`ReviewRepository`] - Reviews of places
//!
//! # Testing
//!
//! See integration tests in `tests/repository_*.rs` for usage examples.

pub mod amenity_repository;
pub mod place_repository;
pub mod review_repository;
pub mod user_repository;

pub use amenity_repository::AmenityRepository;
pub use place_repository::PlaceRepository;
pub use review_repository::ReviewRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use amenity_repository::MockAmenityRepository;
#[cfg(test)]
pub use place_repository::MockPlaceRepository;
#[cfg(test)]
pub use review_repository::MockReviewRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
