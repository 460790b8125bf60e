// src/transform/error.rs
use thiserror::Error;

/// Error types for the two network flows. Payloads are plain strings so
/// the values stay cheap to clone into events.
#[derive(Error, Debug, Clone)]
pub enum TransformError {
    #[error("Αποτυχία λήψης ευρετηρίου φύλλων: {0}")]
    IndexFetch(String),
    #[error("Μη έγκυρο ευρετήριο φύλλων: {0}")]
    IndexDecode(String),
    #[error("Αποτυχία αποστολής: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for TransformError {
    fn from(err: reqwest::Error) -> Self {
        TransformError::Transport(err.to_string())
    }
}
