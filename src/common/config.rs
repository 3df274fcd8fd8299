use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::exception::{CacheError, Result};

pub const DEFAULT_CACHE_CAPACITY: usize = 1000; // entries held before eviction starts

/// Configuration for building a [`RecencyCache`](crate::cache::lru::RecencyCache).
///
/// Missing fields fall back to [`CacheConfig::default`], so a config file only
/// needs to name what it overrides:
///
/// ```toml
/// capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of entries. Must be positive.
    pub capacity: usize,
    /// Reserve arena and index storage for `capacity` entries up front.
    pub prealloc_memory: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CACHE_CAPACITY,
            prealloc_memory: true,
        }
    }
}

impl CacheConfig {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: CacheConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a zero capacity instead of clamping it.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
