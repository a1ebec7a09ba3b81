//! Place operations.

use serde_json::json;
use uuid::Uuid;

use super::Facade;
use crate::domain::entities::{Amenity, NewPlace, Place, PlacePatch};
use crate::domain::identity::Identity;
use crate::error::AppError;

impl Facade {
    /// Creates a place owned by the caller.
    ///
    /// `new_place.owner_id` is overwritten with the caller's id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if one of the amenities does not exist.
    pub async fn create_place(
        &self,
        identity: &Identity,
        mut new_place: NewPlace,
    ) -> Result<Place, AppError> {
        new_place.owner_id = identity.user_id;
        new_place.amenity_ids = self.resolve_amenities(new_place.amenity_ids).await?;

        let place = self.places.create(new_place).await?;
        tracing::info!(place_id = %place.id, owner_id = %place.owner_id, "Place created");

        Ok(place)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    pub async fn get_place(&self, id: Uuid) -> Result<Place, AppError> {
        self.places
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Place not found", json!({"id": id})))
    }

    pub async fn get_all_places(&self) -> Result<Vec<Place>, AppError> {
        self.places.list().await
    }

    pub async fn get_place_amenities(&self, place_id: Uuid) -> Result<Vec<Amenity>, AppError> {
        self.places.amenities(place_id).await
    }

    /// Updates a place. Only the owner or an administrator may do so.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    /// Returns [`AppError::Forbidden`] if the caller may not manage it.
    /// Returns [`AppError::Validation`] if one of the amenities does not exist.
    pub async fn update_place(
        &self,
        identity: &Identity,
        id: Uuid,
        mut patch: PlacePatch,
    ) -> Result<Place, AppError> {
        let place = self.get_place(id).await?;

        if !identity.can_manage(place.owner_id) {
            return Err(AppError::forbidden(
                "Unauthorized action",
                json!({"place_id": id}),
            ));
        }

        if let Some(amenity_ids) = patch.amenity_ids.take() {
            patch.amenity_ids = Some(self.resolve_amenities(amenity_ids).await?);
        }

        self.places.update(id, patch).await
    }

    /// Deletes a place and, through the schema, its reviews and amenity links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    /// Returns [`AppError::Forbidden`] if the caller may not manage it.
    pub async fn delete_place(&self, identity: &Identity, id: Uuid) -> Result<(), AppError> {
        let place = self.get_place(id).await?;

        if !identity.can_manage(place.owner_id) {
            return Err(AppError::forbidden(
                "Unauthorized action",
                json!({"place_id": id}),
            ));
        }

        self.places.delete(id).await?;
        tracing::info!(place_id = %id, "Place deleted");

        Ok(())
    }

    /// Deduplicates amenity ids and checks each one exists.
    async fn resolve_amenities(&self, mut amenity_ids: Vec<Uuid>) -> Result<Vec<Uuid>, AppError> {
        amenity_ids.sort_unstable();
        amenity_ids.dedup();

        for amenity_id in &amenity_ids {
            if self.amenities.find_by_id(*amenity_id).await?.is_none() {
                return Err(AppError::bad_request(
                    "Amenity not found",
                    json!({"amenity_id": amenity_id}),
                ));
            }
        }

        Ok(amenity_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::facade::test_support;
    use crate::domain::repositories::{
        MockAmenityRepository, MockPlaceRepository, MockReviewRepository, MockUserRepository,
    };

    fn new_place(amenity_ids: Vec<Uuid>) -> NewPlace {
        NewPlace {
            title: "Cozy Apartment".to_string(),
            description: None,
            price: 100.0,
            latitude: 37.7749,
            longitude: -122.4194,
            owner_id: Uuid::nil(),
            amenity_ids,
        }
    }

    #[tokio::test]
    async fn test_create_place_sets_owner() {
        let owner = Uuid::new_v4();
        let wifi = Uuid::new_v4();

        let mut amenities = MockAmenityRepository::new();
        amenities
            .expect_find_by_id()
            .withf(move |id| *id == wifi)
            .times(1)
            .returning(move |id| Ok(Some(test_support::amenity(id, "Wi-Fi"))));

        let mut places = MockPlaceRepository::new();
        places
            .expect_create()
            .withf(move |p| p.owner_id == owner && p.amenity_ids == vec![wifi])
            .times(1)
            .returning(|p| Ok(test_support::place(Uuid::new_v4(), p.owner_id)));

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            amenities,
            MockReviewRepository::new(),
        );

        let place = facade
            .create_place(&Identity::new(owner, false), new_place(vec![wifi, wifi]))
            .await
            .unwrap();

        assert_eq!(place.owner_id, owner);
    }

    #[tokio::test]
    async fn test_create_place_unknown_amenity() {
        let mut amenities = MockAmenityRepository::new();
        amenities.expect_find_by_id().times(1).returning(|_| Ok(None));

        let mut places = MockPlaceRepository::new();
        places.expect_create().never();

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            amenities,
            MockReviewRepository::new(),
        );

        let result = facade
            .create_place(
                &Identity::new(Uuid::new_v4(), false),
                new_place(vec![Uuid::new_v4()]),
            )
            .await;

        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_update_place_by_non_owner() {
        let owner = Uuid::new_v4();
        let place_id = Uuid::new_v4();

        let mut places = MockPlaceRepository::new();
        places
            .expect_find_by_id()
            .returning(move |_| Ok(Some(test_support::place(place_id, owner))));
        places.expect_update().never();

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        let result = facade
            .update_place(
                &Identity::new(Uuid::new_v4(), false),
                place_id,
                PlacePatch::default(),
            )
            .await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_update_place_by_admin() {
        let owner = Uuid::new_v4();
        let place_id = Uuid::new_v4();

        let mut places = MockPlaceRepository::new();
        places
            .expect_find_by_id()
            .returning(move |_| Ok(Some(test_support::place(place_id, owner))));
        places
            .expect_update()
            .withf(|_, patch| patch.price == Some(80.0))
            .times(1)
            .returning(move |id, patch| {
                let mut place = test_support::place(id, owner);
                place.price = patch.price.unwrap_or(place.price);
                Ok(place)
            });

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        let patch = PlacePatch {
            price: Some(80.0),
            ..Default::default()
        };
        let updated = facade
            .update_place(&Identity::new(Uuid::new_v4(), true), place_id, patch)
            .await
            .unwrap();

        assert_eq!(updated.price, 80.0);
    }

    #[tokio::test]
    async fn test_delete_place_by_owner() {
        let owner = Uuid::new_v4();
        let place_id = Uuid::new_v4();

        let mut places = MockPlaceRepository::new();
        places
            .expect_find_by_id()
            .returning(move |_| Ok(Some(test_support::place(place_id, owner))));
        places.expect_delete().times(1).returning(|_| Ok(()));

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        assert!(
            facade
                .delete_place(&Identity::new(owner, false), place_id)
                .await
                .is_ok()
        );
    }

    #[tokio::test]
    async fn test_get_place_not_found() {
        let mut places = MockPlaceRepository::new();
        places.expect_find_by_id().times(1).returning(|_| Ok(None));

        let facade = test_support::facade(
            MockUserRepository::new(),
            places,
            MockAmenityRepository::new(),
            MockReviewRepository::new(),
        );

        assert!(matches!(
            facade.get_place(Uuid::new_v4()).await,
            Err(AppError::NotFound { .. })
        ));
    }
}
