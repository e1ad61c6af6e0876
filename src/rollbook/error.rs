use crate::model::StudentId;
use crate::validation::ErrorMap;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollbookError {
    #[error("Validation failed: {0}")]
    Validation(ErrorMap),

    #[error("Student not found: {0}")]
    NotFound(StudentId),

    #[error("Import rejected: {0}")]
    InvalidImport(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RollbookError {
    /// Field-level errors, if this is a validation failure.
    pub fn field_errors(&self) -> Option<&ErrorMap> {
        match self {
            RollbookError::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RollbookError>;
