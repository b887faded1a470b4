//! Role gating middleware for route groups.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;

use ladle_core::error::AppError;
use ladle_entity::user::StaffRole;
use ladle_service::context::RequestContext;

use crate::error::ApiError;

/// Middleware that requires the authenticated user to hold at least the
/// given role.
///
/// Layered onto a whole route group, so every route in the group is
/// gated declaratively and a new route cannot be added without one.
/// Must run after [`super::auth::authenticate`], which provides the
/// request context.
pub async fn require_role(
    required: StaffRole,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let ctx = request
        .extensions()
        .get::<RequestContext>()
        .ok_or_else(|| ApiError(AppError::authentication("Authentication required")))?;

    ladle_auth::rbac::require_at_least(ctx.role, required)?;

    Ok(next.run(request).await)
}
