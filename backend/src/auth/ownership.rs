//! Resource ownership rule shared by every mutating book operation.

use crate::errors::{ServiceError, ServiceResult};

/// Only the user recorded as a resource's owner may mutate or delete it.
pub fn can_mutate(acting_user_id: &str, resource_owner_id: &str) -> bool {
    !acting_user_id.is_empty() && acting_user_id == resource_owner_id
}

/// Fails with `PermissionDenied` unless `can_mutate` holds.
pub fn ensure_can_mutate(
    acting_user_id: &str,
    resource_owner_id: &str,
    action: &str,
) -> ServiceResult<()> {
    if can_mutate(acting_user_id, resource_owner_id) {
        Ok(())
    } else {
        Err(ServiceError::permission_denied(format!(
            "you can only {} your own books",
            action
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_owner_can_mutate() {
        assert!(can_mutate("user-1", "user-1"));
        assert!(ensure_can_mutate("user-1", "user-1", "update").is_ok());
    }

    #[test]
    fn test_other_user_cannot_mutate() {
        assert!(!can_mutate("user-2", "user-1"));
        let err = ensure_can_mutate("user-2", "user-1", "delete").unwrap_err();
        assert!(matches!(err, ServiceError::PermissionDenied { .. }));
        assert!(err.to_string().contains("delete"));
    }

    #[test]
    fn test_empty_identity_never_matches() {
        assert!(!can_mutate("", ""));
    }
}
