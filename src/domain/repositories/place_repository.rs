//! Repository trait for places and their amenity links.

use crate::domain::entities::{Amenity, NewPlace, Place, PlacePatch};
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for places.
///
/// The place/amenity many-to-many relation is stored in the `place_amenity`
/// join table and managed through [`PlaceRepository::replace_amenities`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPlaceRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Creates a place and links its amenities in one transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the owner or an amenity does not exist.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_place: NewPlace) -> Result<Place, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Place>, AppError>;

    /// Lists all places ordered by creation time.
    async fn list(&self) -> Result<Vec<Place>, AppError>;

    /// Applies a partial update. When `patch.amenity_ids` is set the amenity
    /// links are replaced in the same transaction.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    async fn update(&self, id: Uuid, patch: PlacePatch) -> Result<Place, AppError>;

    /// Deletes a place together with its reviews and amenity links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the place does not exist.
    async fn delete(&self, id: Uuid) -> Result<(), AppError>;

    /// Replaces the amenity set of a place.
    async fn replace_amenities(&self, place_id: Uuid, amenity_ids: Vec<Uuid>)
    -> Result<(), AppError>;

    /// Lists the amenities linked to a place.
    async fn amenities(&self, place_id: Uuid) -> Result<Vec<Amenity>, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
