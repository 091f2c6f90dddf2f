//! Error types for the Account API service.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gatehouse_auth_core::AccountError;
use serde::Serialize;

/// Error envelope returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// API error type
///
/// Thin wrapper around [`AccountError`] that renders the `{message}`
/// envelope with the taxonomy's status code.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub AccountError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Log internal errors; their raw message still reaches the client
        if matches!(self.0, AccountError::Internal(_)) {
            tracing::error!(error = %self.0, "Internal API error");
        }

        let body = ErrorResponse {
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    async fn response_parts(err: AccountError) -> (StatusCode, serde_json::Value) {
        let response = ApiError(err).into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_validation_maps_to_400() {
        let (status, body) = response_parts(AccountError::Validation(
            "email cannot be empty".to_string(),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "email cannot be empty");
    }

    #[tokio::test]
    async fn test_auth_failures_map_to_401() {
        let (status, body) = response_parts(AccountError::WrongCredentials).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Email or password is wrong");

        let (status, body) = response_parts(AccountError::NotAuthorized).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], "Not authorized");
    }

    #[tokio::test]
    async fn test_conflict_maps_to_409() {
        let (status, body) = response_parts(AccountError::EmailInUse).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Email in use");
    }

    #[tokio::test]
    async fn test_internal_maps_to_500_with_raw_message() {
        let (status, body) =
            response_parts(AccountError::Internal("pool timed out".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "pool timed out");
    }
}
