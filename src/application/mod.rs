//! Application layer implementing business logic.
//!
//! Handlers talk to two entry points:
//!
//! - [`facade::Facade`] - Data access and business rules for users, places,
//!   amenities and reviews
//! - [`services::auth_service::AuthService`] - Credential checks and JWT issuing/validation

pub mod facade;
pub mod services;
