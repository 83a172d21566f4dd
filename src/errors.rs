use std::sync::PoisonError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} is already in contacts")]
    DuplicateName(String),

    #[error("Stored contacts are malformed: {0}")]
    MalformedStorage(String),

    #[error("I/O error while reading stored contacts: {0}")]
    StorageRead(#[source] std::io::Error),

    #[error("I/O error while saving contacts: {0}")]
    StorageWrite(#[source] std::io::Error),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error("Contact store lock was poisoned by a panicking writer")]
    Poisoned,
}

impl AppError {
    pub fn is_duplicate_name(&self) -> bool {
        matches!(self, AppError::DuplicateName(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedStorage(err.to_string())
    }
}

impl<T> From<PoisonError<T>> for AppError {
    fn from(_: PoisonError<T>) -> Self {
        AppError::Poisoned
    }
}
