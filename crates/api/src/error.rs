use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use roster_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] and implements [`IntoResponse`] so every failure
/// becomes a JSON body whose `message` field clients surface verbatim.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `roster_core`.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::NotFound { id }) => (
                StatusCode::NOT_FOUND,
                json!({
                    "message": format!("Student with id {id} not found"),
                }),
            ),
            AppError::Core(CoreError::Validation(errors)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "message": errors.first_message().unwrap_or("The given data was invalid"),
                    "errors": errors.by_field(),
                }),
            ),
        };

        (status, axum::Json(body)).into_response()
    }
}
