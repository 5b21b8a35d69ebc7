use serde::Serialize;

use crate::runtime::Runtime;

pub type EnvResult<T> = Result<T, EnvError>;

/// Fieldless tag of an [`EnvError`], stable across the JS and CLI boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnsupportedRuntime,
    MissingKey,
    MissingValue,
    KeyNotFound,
    StoreRejected,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::UnsupportedRuntime => "unsupported_runtime",
            ErrorKind::MissingKey => "missing_key",
            ErrorKind::MissingValue => "missing_value",
            ErrorKind::KeyNotFound => "key_not_found",
            ErrorKind::StoreRejected => "store_rejected",
        }
    }
}

/// Failure of an environment read or write. The `Display` output is the
/// human-readable message handed to callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("{}", unsupported(.runtime))]
    UnsupportedRuntime { runtime: Runtime },
    #[error("key is required")]
    MissingKey,
    #[error("value is required for key: {key}")]
    MissingValue { key: String },
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    #[error("{runtime} rejected access to {key}: {reason}")]
    StoreRejected {
        runtime: Runtime,
        key: String,
        reason: String,
    },
}

fn unsupported(runtime: &Runtime) -> String {
    match runtime {
        Runtime::Unknown => "unknown runtime".to_string(),
        runtime => format!("unsupported runtime: {}", runtime),
    }
}

impl EnvError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            EnvError::UnsupportedRuntime { .. } => ErrorKind::UnsupportedRuntime,
            EnvError::MissingKey => ErrorKind::MissingKey,
            EnvError::MissingValue { .. } => ErrorKind::MissingValue,
            EnvError::KeyNotFound { .. } => ErrorKind::KeyNotFound,
            EnvError::StoreRejected { .. } => ErrorKind::StoreRejected,
        }
    }

    /// The key the failure concerns, when one was accepted.
    pub fn key(&self) -> Option<&str> {
        match self {
            EnvError::MissingValue { key }
            | EnvError::KeyNotFound { key }
            | EnvError::StoreRejected { key, .. } => Some(key),
            EnvError::UnsupportedRuntime { .. } | EnvError::MissingKey => None,
        }
    }
}
