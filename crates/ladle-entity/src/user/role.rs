//! Staff role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the back office.
///
/// Roles are ordered by privilege level: Admin > Cashier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "staff_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    /// Full back-office administrator.
    Admin,
    /// Point-of-sale operator.
    Cashier,
}

impl StaffRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Admin => 2,
            Self::Cashier => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &StaffRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Cashier => "cashier",
        }
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StaffRole {
    type Err = ladle_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "cashier" => Ok(Self::Cashier),
            _ => Err(ladle_core::AppError::validation(format!(
                "Invalid staff role: '{s}'. Expected one of: admin, cashier"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_privilege_ordering() {
        assert!(StaffRole::Admin.has_at_least(&StaffRole::Cashier));
        assert!(StaffRole::Admin.has_at_least(&StaffRole::Admin));
        assert!(!StaffRole::Cashier.has_at_least(&StaffRole::Admin));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<StaffRole>().unwrap(), StaffRole::Admin);
        assert_eq!("CASHIER".parse::<StaffRole>().unwrap(), StaffRole::Cashier);
        assert!("waiter".parse::<StaffRole>().is_err());
    }
}
