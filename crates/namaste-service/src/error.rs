//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use namaste_resolver::{ResolverError, StoreError};
use serde::Serialize;

/// Structured error body for internal API callers.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Error details.
    pub error: ErrorDetail,
}

/// Machine-readable code plus a human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    /// Stable error code.
    pub code: &'static str,
    /// Description of the failure.
    pub message: String,
}

/// Errors returned by the internal API, mapped to HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Nothing matched the requested key.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The request was rejected before reaching the store.
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// The record store could not serve the query.
    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The record store did not answer in time.
    #[error("Record store timed out after {0} ms")]
    Timeout(u64),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound(detail) => (StatusCode::NOT_FOUND, "NOT_FOUND", detail.clone()),
            ApiError::BadRequest(detail) => {
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", detail.clone())
            }
            ApiError::Unavailable(detail) => {
                tracing::error!(detail, "record store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "SEARCH_ERROR",
                    "Terminology store unavailable".to_string(),
                )
            }
            ApiError::Timeout(elapsed_ms) => {
                tracing::warn!(elapsed_ms, "record store timed out");
                (
                    StatusCode::GATEWAY_TIMEOUT,
                    "SEARCH_TIMEOUT",
                    format!("Terminology query timed out after {elapsed_ms} ms"),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };
        (status, Json(body)).into_response()
    }
}

impl From<ResolverError> for ApiError {
    fn from(err: ResolverError) -> Self {
        match err {
            ResolverError::InvalidInput(detail) => ApiError::BadRequest(detail),
            ResolverError::Store(StoreError::Timeout { elapsed_ms }) => ApiError::Timeout(elapsed_ms),
            ResolverError::Store(other) => ApiError::Unavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), 4096).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_returns_404() {
        let response = ApiError::NotFound("Code not found: NAM999".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "NOT_FOUND");
        assert_eq!(json["error"]["message"], "Code not found: NAM999");
    }

    #[tokio::test]
    async fn test_unavailable_hides_details() {
        let response = ApiError::Unavailable("connection refused".into()).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"]["code"], "SEARCH_ERROR");
        assert_eq!(json["error"]["message"], "Terminology store unavailable");
    }

    #[tokio::test]
    async fn test_timeout_returns_504() {
        let response = ApiError::Timeout(250).into_response();
        assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_resolver_errors_map_by_kind() {
        let err: ApiError = ResolverError::InvalidInput("code must not be blank".into()).into();
        assert!(matches!(err, ApiError::BadRequest(_)));

        let err: ApiError = ResolverError::Store(StoreError::Timeout { elapsed_ms: 10 }).into();
        assert!(matches!(err, ApiError::Timeout(10)));

        let err: ApiError = ResolverError::Store(StoreError::Unavailable("down".into())).into();
        assert!(matches!(err, ApiError::Unavailable(_)));
    }
}
