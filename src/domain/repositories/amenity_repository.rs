//! Repository trait for amenities.

use crate::domain::entities::Amenity;
use crate::error::AppError;
use async_trait::async_trait;
use uuid::Uuid;

/// Repository interface for the amenity catalogue.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAmenityRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, name: &str) -> Result<Amenity, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Amenity>, AppError>;

    /// Lists all amenities ordered by name.
    async fn list(&self) -> Result<Vec<Amenity>, AppError>;

    /// Renames an amenity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the amenity does not exist.
    async fn update(&self, id: Uuid, name: &str) -> Result<Amenity, AppError>;

    async fn count(&self) -> Result<i64, AppError>;
}
