//! API error taxonomy
//!
//! Four classes cross the HTTP boundary: validation (400), unknown resource
//! (404), expired preview (410), and upstream/service failure (500, with the
//! upstream message passed through as `{error}`). Nothing here retries;
//! failures surface once and stop.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::email::EmailError;
use crate::export::ExportError;
use crate::store::StoreError;

/// Service error type, mapped onto HTTP statuses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A required request field is missing or malformed (400).
    #[error("{0}")]
    BadRequest(String),

    /// The addressed resource does not exist (404).
    #[error("{0}")]
    NotFound(String),

    /// The addressed preview has expired (410).
    #[error("{0}")]
    Gone(String),

    /// An upstream service (inliner, delivery API, store backend) failed
    /// (500); the upstream message passes through.
    #[error("{0}")]
    Upstream(String),
}

impl ApiError {
    /// Convenience constructor for missing-field validation errors.
    #[must_use]
    pub fn missing_field(name: &str) -> Self {
        Self::BadRequest(format!("missing required field: {name}"))
    }

    /// The HTTP status this error maps to.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Gone(_) => StatusCode::GONE,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => Self::NotFound(what),
            StoreError::Expired(what) => Self::Gone(what),
            StoreError::Backend(msg) => Self::Upstream(msg),
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        Self::Upstream(err.to_string())
    }
}

impl From<EmailError> for ApiError {
    fn from(err: EmailError) -> Self {
        match err {
            // Malformed addresses and empty content are the caller's input.
            EmailError::InvalidAddress(_)
            | EmailError::NoRecipients
            | EmailError::NoSender
            | EmailError::NoSubject
            | EmailError::NoContent => Self::BadRequest(err.to_string()),
            _ => Self::Upstream(err.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = %status, "request rejected");
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::missing_field("html").status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("preview".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(ApiError::Gone("preview".into()).status(), StatusCode::GONE);
        assert_eq!(
            ApiError::Upstream("delivery failed".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_errors_map_through() {
        let not_found: ApiError = StoreError::NotFound("preview token".into()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);
        let expired: ApiError = StoreError::Expired("preview token".into()).into();
        assert_eq!(expired.status(), StatusCode::GONE);
    }

    #[test]
    fn test_invalid_address_is_client_error() {
        let err: ApiError = EmailError::InvalidAddress("nope".into()).into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
