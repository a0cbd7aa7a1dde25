use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shelter_core::error::DocumentStoreError;

use crate::schema::{ValidationError, ViolationCode};

/// Application-level error type for HTTP handlers.
///
/// Implements [`IntoResponse`] to produce consistent JSON error bodies of the
/// form `{"code": ..., "detail": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body or query string failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A write was attempted while no store is configured.
    #[error("store is not configured")]
    StoreUnavailable,

    /// The store rejected an operation.
    #[error(transparent)]
    Store(#[from] DocumentStoreError),
}

/// Convenience type alias for handler return values.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(ValidationError::single(
            "body",
            ViolationCode::Body,
            rejection.body_text(),
        ))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(ValidationError::single(
            "query",
            ViolationCode::Body,
            rejection.body_text(),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({
                    "code": "VALIDATION_ERROR",
                    "detail": errors,
                })),
            )
                .into_response(),
            ApiError::StoreUnavailable | ApiError::Store(_) => {
                let detail = self.to_string();
                tracing::error!(error = %detail, "Store write failed");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({
                        "code": "STORE_ERROR",
                        "detail": detail,
                    })),
                )
                    .into_response()
            }
        }
    }
}
