//! Error types for the navigation drawer

use thiserror::Error;

/// Failures of the browser-local key-value store
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage is unavailable in this environment")]
    Unavailable,

    #[error("Failed to read key '{0}'")]
    Read(String),

    #[error("Failed to write key '{0}'")]
    Write(String),
}

/// Failures while loading a drawer configuration override
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
