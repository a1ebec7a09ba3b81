//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries mapped through `FromRow` row structs.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgPlaceRepository`] - Places and place/amenity links
//! - [`PgAmenityRepository`] - Amenity catalogue
//! - [`PgReviewRepository`] - Reviews

pub mod pg_amenity_repository;
pub mod pg_place_repository;
pub mod pg_review_repository;
pub mod pg_user_repository;

pub use pg_amenity_repository::PgAmenityRepository;
pub use pg_place_repository::PgPlaceRepository;
pub use pg_review_repository::PgReviewRepository;
pub use pg_user_repository::PgUserRepository;
