//! Payment handlers.

use axum::Json;
use axum::extract::{Query, State};
use validator::Validate;

use ladle_core::error::AppError;
use ladle_core::types::pagination::PageResponse;
use ladle_entity::payment::Payment;
use ladle_service::payment::service;

use crate::dto::request::RecordPaymentRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// POST /api/payments
pub async fn record_payment(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RecordPaymentRequest>,
) -> Result<Json<ApiResponse<Payment>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let payment = state
        .payment_service
        .record(
            &auth,
            service::RecordPaymentRequest {
                product_name: req.product_name,
                quantity: req.quantity,
                unit_price: req.unit_price,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(payment)))
}

/// GET /api/payments
pub async fn list_payments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<Payment>>>, ApiError> {
    let page = params.into_page_request();
    let payments = state.payment_service.list(&page).await?;
    Ok(Json(ApiResponse::ok(payments)))
}
