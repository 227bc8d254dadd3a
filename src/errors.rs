use axum::http::StatusCode;
use thiserror::Error;

use crate::models::DayIndex;

/// The backing key-value store could not be read or written.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("store document is corrupt: {0}")]
    Corrupt(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Unavailable(err.to_string())
    }
}

/// An import payload was rejected. Nothing has been written when this is returned,
/// except for the `Store` variant.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid data: expected a JSON object")]
    NotAnObject,

    #[error("invalid data: weekStart `{0}` is not a YYYY-MM-DD date")]
    WeekStart(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("day {day} has no item `{item}`")]
    UnknownItem { day: DayIndex, item: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("failed to read plan file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse plan file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("a plan needs exactly 7 days, found {0}")]
    DayCount(usize),

    #[error("day {day} lists item `{item}` more than once")]
    DuplicateItem { day: usize, item: String },
}

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::CONFLICT,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::internal(err)
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::Store(err) => Self::internal(err),
            other => Self::bad_request(other.to_string()),
        }
    }
}

impl From<TrackerError> for AppError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::UnknownItem { .. } => Self::bad_request(err.to_string()),
            TrackerError::Import(err) => err.into(),
            TrackerError::Store(err) => err.into(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}
