use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    NotFound,
    Validation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

/// A single problem with one authored record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("entry {index}: `{field}` {reason}")]
pub struct EntryError {
    pub index: usize,
    pub field: &'static str,
    pub reason: String,
}

impl EntryError {
    pub fn new(index: usize, field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            index,
            field,
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset is not a list of records: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("dataset has {} invalid field(s)", .0.len())]
    Invalid(Vec<EntryError>),
}

impl DatasetError {
    pub fn findings(&self) -> &[EntryError] {
        match self {
            DatasetError::Malformed(_) => &[],
            DatasetError::Invalid(findings) => findings,
        }
    }
}
