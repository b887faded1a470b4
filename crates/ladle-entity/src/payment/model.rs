//! Payment entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A recorded point-of-sale payment.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Payment {
    /// Unique payment identifier.
    pub id: Uuid,
    /// Name of the product or service sold.
    pub product_name: String,
    /// Quantity sold.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Total amount charged.
    pub amount: Decimal,
    /// The cashier who recorded the payment.
    pub cashier_id: Uuid,
    /// When the payment was taken.
    pub paid_at: DateTime<Utc>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to record a new payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePayment {
    /// Name of the product or service sold.
    pub product_name: String,
    /// Quantity sold.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
    /// The cashier recording the payment.
    pub cashier_id: Uuid,
    /// When the payment was taken.
    pub paid_at: DateTime<Utc>,
}

impl CreatePayment {
    /// Total amount for this payment.
    pub fn amount(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
