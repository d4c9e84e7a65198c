use thiserror::Error;

/// Failure reading or writing durable client-side storage.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("durable storage is unavailable: {0}")]
    Unavailable(String),
    #[error("storage i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode storage document: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("failed to decode storage document: {0}")]
    Parse(#[from] toml::de::Error),
}
