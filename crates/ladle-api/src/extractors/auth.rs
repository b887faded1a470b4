//! `AuthUser` extractor: picks up the request context placed by the
//! authentication middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use ladle_core::error::AppError;
use ladle_service::context::RequestContext;

use crate::error::ApiError;

/// Extracted authenticated user context available in handlers.
///
/// The heavy lifting (token hashing, session lookup, status check)
/// happens once in the authentication middleware; this extractor just
/// reads the result out of the request extensions.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                ApiError(AppError::authentication(
                    "Authentication required",
                ))
            })
    }
}
