use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Unknown(String),
}

impl AppError {
    /// Maps an I/O failure on `path` to the nearest error kind.
    pub fn from_io(err: io::Error, path: &str) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(path.to_string()),
            io::ErrorKind::NotADirectory => {
                Self::InvalidArgument(format!("not a directory: {path}"))
            }
            io::ErrorKind::InvalidInput => Self::InvalidArgument(format!("{path}: {err}")),
            _ => Self::Unknown(format!("{path}: {err}")),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::AccessDenied(_) => "access_denied",
            Self::InvalidArgument(_) => "invalid_argument",
            Self::Unknown(_) => "unknown",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::AccessDenied(_) => StatusCode::FORBIDDEN,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        let message = err.to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound(message),
            io::ErrorKind::PermissionDenied => Self::AccessDenied(message),
            io::ErrorKind::NotADirectory | io::ErrorKind::InvalidInput => {
                Self::InvalidArgument(message)
            }
            _ => Self::Unknown(message),
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Unknown(format!("background task failed: {err}"))
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a AppError,
    kind: &'static str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: &self,
            kind: self.kind(),
        };
        let json = Json(serde_json::to_value(&body).unwrap_or_default());
        (self.status_code(), json).into_response()
    }
}
