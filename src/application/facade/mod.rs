//! Facade over the repositories.
//!
//! [`Facade`] is the single object route handlers call for data access. It
//! owns the business rules (ownership, duplicate reviews, rating range, email
//! uniqueness) so handlers only translate HTTP to facade calls and back.
//!
//! Operations are grouped by entity:
//!
//! - [`users`] - registration, lookup, profile updates
//! - [`amenities`] - amenity catalogue
//! - [`places`] - places and their amenity sets
//! - [`reviews`] - review rules

pub mod amenities;
pub mod places;
pub mod reviews;
pub mod users;

use std::sync::Arc;

use crate::domain::repositories::{
    AmenityRepository, PlaceRepository, ReviewRepository, UserRepository,
};
use crate::error::AppError;

/// Entry point for all data-access and business-rule operations.
pub struct Facade {
    users: Arc<dyn UserRepository>,
    places: Arc<dyn PlaceRepository>,
    amenities: Arc<dyn AmenityRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl Facade {
    /// Creates a facade over the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        places: Arc<dyn PlaceRepository>,
        amenities: Arc<dyn AmenityRepository>,
        reviews: Arc<dyn ReviewRepository>,
    ) -> Self {
        Self {
            users,
            places,
            amenities,
            reviews,
        }
    }

    /// Round-trips the database and returns the number of registered users.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the database is unreachable.
    pub async fn health_check(&self) -> Result<i64, AppError> {
        self.users.count().await
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::domain::entities::{Amenity, Place, Review, User};
    use crate::domain::repositories::{
        MockAmenityRepository, MockPlaceRepository, MockReviewRepository, MockUserRepository,
    };
    use chrono::Utc;
    use uuid::Uuid;

    pub fn facade(
        users: MockUserRepository,
        places: MockPlaceRepository,
        amenities: MockAmenityRepository,
        reviews: MockReviewRepository,
    ) -> Facade {
        Facade::new(
            Arc::new(users),
            Arc::new(places),
            Arc::new(amenities),
            Arc::new(reviews),
        )
    }

    pub fn user(id: Uuid, email: &str, is_admin: bool) -> User {
        let now = Utc::now();
        User {
            id,
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: email.to_string(),
            password_hash: String::new(),
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn place(id: Uuid, owner_id: Uuid) -> Place {
        let now = Utc::now();
        Place {
            id,
            title: "Cozy Apartment".to_string(),
            description: Some("A nice place to stay".to_string()),
            price: 100.0,
            latitude: 37.7749,
            longitude: -122.4194,
            owner_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn amenity(id: Uuid, name: &str) -> Amenity {
        let now = Utc::now();
        Amenity {
            id,
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn review(id: Uuid, user_id: Uuid, place_id: Uuid) -> Review {
        let now = Utc::now();
        Review {
            id,
            text: "Great place to stay!".to_string(),
            rating: 5,
            user_id,
            place_id,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support;
    use crate::domain::repositories::{
        MockAmenityRepository, MockPlaceRepository, MockReviewRepository, MockUserRepository,
    };
    use crate::error::AppError;
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check_returns_user_count() {
        let mut users = MockUserRepository::new();
        users.expect_count().times(1).returning(|| Ok(3));

        let facade = test_support::facade(
            users,
            MockPlaceRepository::new(),
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        assert_eq!(facade.health_check().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_health_check_propagates_database_error() {
        let mut users = MockUserRepository::new();
        users
            .expect_count()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let facade = test_support::facade(
            users,
            MockPlaceRepository::new(),
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        assert!(matches!(
            facade.health_check().await,
            Err(AppError::Internal { .. })
        ));
    }
}
