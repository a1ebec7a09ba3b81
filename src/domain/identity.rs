//! Authenticated caller identity.

use serde_json::json;
use uuid::Uuid;

use crate::error::AppError;

/// The caller identity carried by a validated access token.
///
/// Inserted into request extensions by the auth middleware and passed to
/// every facade operation that enforces ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub user_id: Uuid,
    pub is_admin: bool,
}

impl Identity {
    pub fn new(user_id: Uuid, is_admin: bool) -> Self {
        Self { user_id, is_admin }
    }

    /// Returns true if the caller is `owner_id` or an administrator.
    pub fn can_manage(&self, owner_id: Uuid) -> bool {
        self.is_admin || self.user_id == owner_id
    }

    /// # Errors
    ///
    /// Returns [`AppError::Forbidden`] if the caller is not an administrator.
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.is_admin {
            Ok(())
        } else {
            Err(AppError::forbidden(
                "Admin privileges required",
                json!({"user_id": self.user_id}),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_manage_own_resource() {
        let id = Uuid::new_v4();
        let identity = Identity::new(id, false);

        assert!(identity.can_manage(id));
        assert!(!identity.can_manage(Uuid::new_v4()));
    }

    #[test]
    fn test_admin_can_manage_anything() {
        let identity = Identity::new(Uuid::new_v4(), true);

        assert!(identity.can_manage(Uuid::new_v4()));
        assert!(identity.require_admin().is_ok());
    }

    #[test]
    fn test_require_admin_rejects_regular_user() {
        let identity = Identity::new(Uuid::new_v4(), false);

        assert!(matches!(
            identity.require_admin(),
            Err(AppError::Forbidden { .. })
        ));
    }
}
