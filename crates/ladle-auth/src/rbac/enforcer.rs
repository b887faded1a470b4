//! RBAC enforcement: checks a staff role against a required minimum.

use ladle_core::error::AppError;
use ladle_entity::user::StaffRole;

/// Checks whether the given role meets the required minimum.
///
/// The hierarchy is strictly linear (Admin > Cashier), so a single
/// minimum-role check covers every gate in the application. Returns
/// `Ok(())` if allowed, or an authorization error if denied.
pub fn require_at_least(actual: StaffRole, required: StaffRole) -> Result<(), AppError> {
    if actual.has_at_least(&required) {
        Ok(())
    } else {
        Err(AppError::authorization(format!(
            "Role '{actual}' is insufficient; minimum required: '{required}'"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_passes_all_gates() {
        assert!(require_at_least(StaffRole::Admin, StaffRole::Admin).is_ok());
        assert!(require_at_least(StaffRole::Admin, StaffRole::Cashier).is_ok());
    }

    #[test]
    fn test_cashier_denied_admin_gate() {
        let err = require_at_least(StaffRole::Cashier, StaffRole::Admin).unwrap_err();
        assert_eq!(err.kind, ladle_core::error::ErrorKind::Authorization);
    }
}
