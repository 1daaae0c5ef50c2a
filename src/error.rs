use thiserror::Error;

/// Failure to obtain the session catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Invalid catalog location: {0}")]
    Location(String),

    #[error("Catalog request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Catalog request returned HTTP {0}")]
    Status(u16),

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Failure talking to the local key-value store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Local storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage read error: {0}")]
    Read(String),

    #[error("Storage write error: {0}")]
    Write(String),

    #[error("Storage quota exceeded while writing '{0}'")]
    QuotaExceeded(String),
}

impl From<LoadError> for String {
    fn from(err: LoadError) -> Self {
        err.to_string()
    }
}

impl From<StorageError> for String {
    fn from(err: StorageError) -> Self {
        err.to_string()
    }
}
