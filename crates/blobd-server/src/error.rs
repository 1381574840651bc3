use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use blobd_store::StoreError;
use blobd_types::RepositoryNameError;

/// Request-boundary errors: the closed taxonomy rendered to callers.
///
/// Every variant carries an HTTP status and a human-readable message; the
/// message text is part of the API surface and asserted by tests. Anything
/// that is not one of these kinds is logged server-side and rendered as a
/// generic 500 without leaking detail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidRepositoryName(#[from] RepositoryNameError),

    #[error("Content-Type '{0}' is not supported.")]
    UnsupportedContentType(String),

    #[error("Body exceeded the {0} length limit.")]
    BodyTooLarge(usize),

    #[error("Duplicate. Repository Object already exists.")]
    Duplicate,

    #[error("Not Found.")]
    NotFound,

    /// Unexpected failure. The payload is logged, never rendered.
    #[error("Internal Server Error.")]
    Internal(String),
}

impl ApiError {
    /// The HTTP status this error renders with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRepositoryName(_) | Self::Duplicate => StatusCode::BAD_REQUEST,
            Self::UnsupportedContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::BodyTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(%detail, "request failed with internal error");
        }
        let status = self.status();
        let body = serde_json::json!({
            "error": {
                "status": status.as_u16(),
                "message": self.to_string(),
            }
        });
        (status, axum::Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate { repository, oid } => {
                tracing::warn!(%repository, %oid, "duplicate repository object");
                Self::Duplicate
            }
            StoreError::NotFound { repository, oid } => {
                tracing::warn!(%repository, %oid, "repository object not found");
                Self::NotFound
            }
            StoreError::Io(err) => Self::Internal(err.to_string()),
        }
    }
}

/// Process-level server errors (startup and shutdown).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
