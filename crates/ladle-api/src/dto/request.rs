//! Request DTOs with validation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Self-registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 100, message = "Username must be 3-100 characters"))]
    pub username: String,
    /// Desired password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Re-typed password.
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub confirm_password: String,
    /// Given name.
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Requested role: `admin` or `cashier`.
    pub role: String,
}

/// Password change request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[validate(length(min = 1))]
    pub current_password: String,
    /// New password.
    #[validate(length(min = 1))]
    pub new_password: String,
    /// Re-typed new password.
    #[validate(length(min = 1))]
    pub confirm_password: String,
}

/// Payment capture request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordPaymentRequest {
    /// Product or service name.
    #[validate(length(min = 1, max = 255, message = "Product name is required"))]
    pub product_name: String,
    /// Quantity sold.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// New role name.
    pub role: String,
}

/// Query parameters for the admin user list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListQuery {
    /// Filter by account status (`pending` or `approved`).
    pub status: Option<String>,
}

/// Query parameters for the sales report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesReportQuery {
    /// Inclusive range start (RFC 3339).
    pub from: chrono::DateTime<chrono::Utc>,
    /// Exclusive range end (RFC 3339).
    pub to: chrono::DateTime<chrono::Utc>,
    /// Bucketing granularity: `day`, `week`, or `month`.
    #[serde(default = "default_granularity")]
    pub granularity: String,
}

fn default_granularity() -> String {
    "day".to_string()
}
