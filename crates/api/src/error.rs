//! Unified error handling for the API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use shipdesk_core::PermissionError;

use crate::db::RepositoryError;

/// Application-level error type for the API.
///
/// Every failure maps to a JSON body of the form `{"msg": ...}`. Server-side
/// failures never expose detail to the caller; the detail goes to the log.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing input.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Duplicate carrier/vendor/email.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Missing or invalid bearer token.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Referenced entity absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Too many attempts from one client.
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error body shape, shared by every failure response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            Self::Internal(_)
                | Self::Database(
                    RepositoryError::Database(_) | RepositoryError::DataCorruption(_)
                )
        ) {
            tracing::error!(error = %self, "API request error");
        }

        let status = match &self {
            // Duplicates surface as 400, matching the public contract
            Self::Validation(_)
            | Self::Conflict(_)
            | Self::Database(RepositoryError::Conflict(_)) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) | Self::Database(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            Self::RateLimited(_) => StatusCode::TOO_MANY_REQUESTS,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let msg = match &self {
            Self::Database(RepositoryError::NotFound) => "Not found".to_string(),
            Self::Database(RepositoryError::Conflict(detail)) => detail.clone(),
            Self::Database(_) | Self::Internal(_) => "Server error".to_string(),
            Self::Validation(m)
            | Self::Conflict(m)
            | Self::Unauthorized(m)
            | Self::Forbidden(m)
            | Self::NotFound(m)
            | Self::RateLimited(m) => m.clone(),
        };

        (status, Json(ErrorBody { msg })).into_response()
    }
}

impl From<PermissionError> for ApiError {
    fn from(err: PermissionError) -> Self {
        match err {
            PermissionError::DuplicateCarrier(_) | PermissionError::DuplicateVendor(_) => {
                Self::Conflict(err.to_string())
            }
            PermissionError::UnknownCarrier(_) | PermissionError::UnknownVendor(_) => {
                Self::NotFound(err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("user 42".to_string());
        assert_eq!(err.to_string(), "Not found: user 42");

        let err = ApiError::Validation("missing field".to_string());
        assert_eq!(err.to_string(), "Validation error: missing field");
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            get_status(ApiError::Validation("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Conflict("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(ApiError::Forbidden("test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(ApiError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(ApiError::RateLimited("test".to_string())),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            get_status(ApiError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_404() {
        assert_eq!(
            get_status(ApiError::Database(RepositoryError::NotFound)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_repository_conflict_maps_to_400() {
        assert_eq!(
            get_status(ApiError::Database(RepositoryError::Conflict(
                "email already registered".to_string()
            ))),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_permission_error_mapping() {
        assert_eq!(
            get_status(PermissionError::DuplicateCarrier("UPS".to_string()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(PermissionError::UnknownVendor("acme".to_string()).into()),
            StatusCode::NOT_FOUND
        );
    }
}
