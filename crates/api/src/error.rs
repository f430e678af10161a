use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use premiere_core::signup::ValidationError;
use premiere_geocode::GeocodeError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// One variant per failure class of the signup pipeline, each mapping
/// to a stable machine-readable code so clients branch on `code`
/// rather than parsing messages. Implements [`IntoResponse`] to
/// produce consistent `{ "error": ..., "code": ... }` JSON bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The signup form failed validation; no network call was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The postal code could not be resolved to a place.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(err) => {
                (StatusCode::BAD_REQUEST, err.code(), err.to_string())
            }

            // Transport failures, empty lookups, and timeouts all read
            // the same to the user: the remedy is another postal code.
            // The distinction stays in the logs.
            AppError::Geocode(err) => {
                tracing::info!(error = %err, "Postal code resolution failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "UNRESOLVABLE_POSTAL_CODE",
                    "We couldn't find that postal code. Please try another one.".to_string(),
                )
            }

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else (connectivity failures, constraint violations)
///   maps to 500 `STORE_WRITE_FAILED` with a sanitized message; the
///   submission was not saved and the user must resubmit.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORE_WRITE_FAILED",
                "We couldn't save your signup. Please try again.".to_string(),
            )
        }
    }
}
