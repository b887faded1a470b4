//! Bearer token authentication middleware.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use ladle_core::error::AppError;
use ladle_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Pulls the raw bearer token out of the Authorization header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, ApiError> {
    let auth_header = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError(AppError::authentication("Missing Authorization header")))?;

    auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| ApiError(AppError::authentication("Invalid Authorization header format")))
}

/// Middleware that validates the bearer token and attaches a
/// [`RequestContext`] to the request.
///
/// Applied to every route group except the public ones (login, register,
/// health). Handlers downstream read the context via the `AuthUser`
/// extractor.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers())?.to_string();

    let (session, user) = state.session_manager.authenticate(&token).await?;

    let ctx = RequestContext::new(user.id, session.id, user.role, user.username);
    request.extensions_mut().insert(ctx);

    Ok(next.run(request).await)
}
