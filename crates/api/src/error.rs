use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use medialib_core::error::CoreError;
use medialib_core::store::StoreError;
use medialib_core::workflow::WorkflowError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors, the fatal workflow and storage
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses.
///
/// Rejected form submissions are not errors; handlers render them as 422.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `medialib_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The recording workflow aborted (contract violation or storage failure).
    #[error(transparent)]
    Workflow(#[from] WorkflowError),

    /// A storage failure outside the recording workflow.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The JSON body could not be read into the expected wire shape.
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),

    /// The query string could not be read into the expected parameters.
    #[error(transparent)]
    MalformedQuery(#[from] QueryRejection),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Core(CoreError::from(errors))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => internal("Internal core error", msg),
            },

            // --- Request-aborting failures ---
            AppError::Workflow(WorkflowError::StructuralMismatch(err)) => {
                internal("Malformed recording form", err)
            }
            AppError::Workflow(WorkflowError::Store(err)) | AppError::Store(err) => {
                internal("Storage error", err)
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::MalformedBody(rejection) => malformed(rejection.body_text()),
            AppError::MalformedQuery(rejection) => malformed(rejection.body_text()),
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Payload that breaks the wire contract. Never 422, which is reserved for
/// re-rendered forms.
fn malformed(detail: String) -> (StatusCode, &'static str, String) {
    tracing::warn!(%detail, "Rejected malformed request");
    (StatusCode::BAD_REQUEST, "MALFORMED_REQUEST", detail)
}

/// Log the real cause and return a sanitized 500.
fn internal(
    context: &'static str,
    err: &dyn std::fmt::Display,
) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "{context}");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}
