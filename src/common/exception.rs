use thiserror::Error;

/// Errors raised by cache construction, configuration loading and
/// structural validation.
///
/// A lookup miss is not an error: `get` reports it as `None`.
#[derive(Error, Debug)]
pub enum CacheError {
    #[error("Cache capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("Recency ring is corrupt: {0}")]
    CorruptRing(String),
    #[error("Failed to read cache configuration: {0}")]
    ConfigRead(#[from] std::io::Error),
    #[error("Failed to parse cache configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CacheError>;
