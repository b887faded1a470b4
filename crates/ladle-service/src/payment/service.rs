//! Payment recording and listing.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;

use ladle_core::error::AppError;
use ladle_core::types::pagination::{PageRequest, PageResponse};
use ladle_database::repositories::payment::PaymentRepository;
use ladle_entity::payment::Payment;
use ladle_entity::payment::model::CreatePayment;

use crate::context::RequestContext;

/// Data for a payment taken at the register.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RecordPaymentRequest {
    /// Name of the product or service sold.
    pub product_name: String,
    /// Quantity sold.
    pub quantity: i32,
    /// Price per unit.
    pub unit_price: Decimal,
}

/// Handles payment capture and browsing.
#[derive(Debug, Clone)]
pub struct PaymentService {
    /// Payment repository.
    payment_repo: Arc<PaymentRepository>,
}

impl PaymentService {
    /// Creates a new payment service.
    pub fn new(payment_repo: Arc<PaymentRepository>) -> Self {
        Self { payment_repo }
    }

    /// Records a payment. The acting cashier is taken from the request
    /// context, never from the request body.
    pub async fn record(
        &self,
        ctx: &RequestContext,
        req: RecordPaymentRequest,
    ) -> Result<Payment, AppError> {
        let product_name = req.product_name.trim();
        if product_name.is_empty() {
            return Err(AppError::validation("Product name is required"));
        }
        if req.quantity <= 0 {
            return Err(AppError::validation("Quantity must be positive"));
        }
        if req.unit_price < Decimal::ZERO {
            return Err(AppError::validation("Unit price cannot be negative"));
        }

        let payment = self
            .payment_repo
            .create(&CreatePayment {
                product_name: product_name.to_string(),
                quantity: req.quantity,
                unit_price: req.unit_price,
                cashier_id: ctx.user_id,
                paid_at: Utc::now(),
            })
            .await?;

        info!(
            payment_id = %payment.id,
            cashier_id = %ctx.user_id,
            amount = %payment.amount,
            "Payment recorded"
        );

        Ok(payment)
    }

    /// Lists payments, most recent first.
    pub async fn list(&self, page: &PageRequest) -> Result<PageResponse<Payment>, AppError> {
        self.payment_repo.find_all(page).await
    }
}
