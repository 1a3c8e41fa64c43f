//! Bearer-token authentication extractor.
//!
//! [`RequireAuth`] authenticates a request and attaches the token claims.
//! Authorization is a separate step: admin-only handlers call
//! [`ensure_admin`] themselves even though the token already carries the
//! role, so a handler reads as a complete record of what it requires.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};

use crate::error::ApiError;
use crate::services::Claims;
use crate::state::AppState;

/// Extractor that requires a valid bearer token.
///
/// Rejects with 401 when the Authorization header is missing, not a bearer
/// scheme, or carries an invalid/expired token.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireAuth(claims): RequireAuth) -> impl IntoResponse {
///     format!("hello, {}", claims.sub)
/// }
/// ```
pub struct RequireAuth(pub Claims);

impl<S> FromRequestParts<S> for RequireAuth
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let header_value = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".to_string()))?;

        let token = header_value
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::Unauthorized("Expected a bearer token".to_string()))?;

        let claims = state
            .tokens()
            .verify(token)
            .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

        Ok(Self(claims))
    }
}

/// Assert that the authenticated caller holds the admin role.
///
/// # Errors
///
/// Returns `ApiError::Forbidden` for any other role.
pub fn ensure_admin(claims: &Claims) -> Result<(), ApiError> {
    if claims.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Forbidden("Admin role required".to_string()))
    }
}
