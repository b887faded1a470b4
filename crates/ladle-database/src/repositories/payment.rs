//! Payment repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use ladle_core::error::{AppError, ErrorKind};
use ladle_core::result::AppResult;
use ladle_core::types::pagination::{PageRequest, PageResponse};
use ladle_entity::payment::model::CreatePayment;
use ladle_entity::payment::Payment;

/// Repository for payment records.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Create a new payment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a new payment.
    pub async fn create(&self, data: &CreatePayment) -> AppResult<Payment> {
        sqlx::query_as::<_, Payment>(
            "INSERT INTO payments (product_name, quantity, unit_price, amount, cashier_id, paid_at) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(&data.product_name)
        .bind(data.quantity)
        .bind(data.unit_price)
        .bind(data.amount())
        .bind(data.cashier_id)
        .bind(data.paid_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create payment", e))
    }

    /// List payments with pagination, most recent first.
    pub async fn find_all(&self, page: &PageRequest) -> AppResult<PageResponse<Payment>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count payments", e)
            })?;

        let payments = sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments ORDER BY paid_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list payments", e))?;

        Ok(PageResponse::new(
            payments,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Fetch all payments taken within a time range, oldest first.
    ///
    /// Used by the report service, which aggregates in process.
    pub async fn find_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            "SELECT * FROM payments WHERE paid_at >= $1 AND paid_at < $2 ORDER BY paid_at ASC",
        )
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to fetch payments for range", e)
        })
    }
}
