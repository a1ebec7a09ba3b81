//! Amenity operations.

use serde_json::json;
use uuid::Uuid;

use super::Facade;
use crate::domain::entities::Amenity;
use crate::error::AppError;

fn normalize_name(name: &str) -> Result<&str, AppError> {
    let name = name.trim();
    if name.is_empty() || name.chars().count() > 50 {
        return Err(AppError::bad_request(
            "Invalid amenity name length",
            json!({"min": 1, "max": 50}),
        ));
    }
    Ok(name)
}

impl Facade {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the name is empty or longer than 50 characters.
    pub async fn create_amenity(&self, name: &str) -> Result<Amenity, AppError> {
        let amenity = self.amenities.create(normalize_name(name)?).await?;
        tracing::info!(amenity_id = %amenity.id, name = %amenity.name, "Amenity created");
        Ok(amenity)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    pub async fn get_amenity(&self, id: Uuid) -> Result<Amenity, AppError> {
        self.amenities
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Amenity not found", json!({"id": id})))
    }

    pub async fn get_all_amenities(&self) -> Result<Vec<Amenity>, AppError> {
        self.amenities.list().await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    /// Returns [`AppError::Validation`] if the name is invalid.
    pub async fn update_amenity(&self, id: Uuid, name: &str) -> Result<Amenity, AppError> {
        let name = normalize_name(name)?;
        self.amenities.update(id, name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::facade::test_support;
    use crate::domain::repositories::{
        MockAmenityRepository, MockPlaceRepository, MockReviewRepository, MockUserRepository,
    };

    fn facade(amenities: MockAmenityRepository) -> Facade {
        test_support::facade(
            MockUserRepository::new(),
            MockPlaceRepository::new(),
            amenities,
            MockReviewRepository::new(),
        )
    }

    #[tokio::test]
    async fn test_create_amenity_trims_name() {
        let mut amenities = MockAmenityRepository::new();
        amenities
            .expect_create()
            .withf(|name| name == "Wi-Fi")
            .times(1)
            .returning(|name| Ok(test_support::amenity(Uuid::new_v4(), name)));

        let amenity = facade(amenities).create_amenity("  Wi-Fi ").await.unwrap();

        assert_eq!(amenity.name, "Wi-Fi");
    }

    #[tokio::test]
    async fn test_create_amenity_empty_name() {
        let mut amenities = MockAmenityRepository::new();
        amenities.expect_create().never();

        let result = facade(amenities).create_amenity("   ").await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_get_amenity_not_found() {
        let mut amenities = MockAmenityRepository::new();
        amenities.expect_find_by_id().times(1).returning(|_| Ok(None));

        assert!(matches!(
            facade(amenities).get_amenity(Uuid::new_v4()).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_amenity() {
        let id = Uuid::new_v4();
        let mut amenities = MockAmenityRepository::new();
        amenities
            .expect_update()
            .withf(move |amenity_id, name| *amenity_id == id && name == "Pool")
            .times(1)
            .returning(|id, name| Ok(test_support::amenity(id, name)));

        let amenity = facade(amenities).update_amenity(id, "Pool").await.unwrap();

        assert_eq!(amenity.id, id);
        assert_eq!(amenity.name, "Pool");
    }
}
