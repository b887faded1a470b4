//! Admin report handlers.

use axum::Json;
use axum::extract::{Query, State};

use ladle_service::report::sales::{ReportGranularity, SalesReport};

use crate::dto::request::SalesReportQuery;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/admin/reports/sales
pub async fn sales_report(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SalesReportQuery>,
) -> Result<Json<ApiResponse<SalesReport>>, ApiError> {
    let granularity: ReportGranularity = query.granularity.parse()?;

    let report = state
        .report_service
        .generate(query.from, query.to, granularity)
        .await?;

    Ok(Json(ApiResponse::ok(report)))
}
