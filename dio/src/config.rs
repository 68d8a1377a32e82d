//! Dive configuration
//!
//! Loaded from TOML, e.g.
//!
//! ```toml
//! max_depth = 32
//! ```

use serde::Deserialize;
use std::num::NonZeroUsize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid dive configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("max_depth must be at least 1")]
    ZeroDepth,
}

/// Settings shared by every forwarder in one wrapper tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiveConfig {
    /// Deepest nesting a forwarder may create below the root. `None` leaves
    /// recursion unbounded, so a self-referential value can be dived into
    /// for as long as the host keeps asking.
    pub max_depth: Option<NonZeroUsize>,
}

impl DiveConfig {
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_depth(max_depth: usize) -> Result<Self, ConfigError> {
        let max_depth = NonZeroUsize::new(max_depth).ok_or(ConfigError::ZeroDepth)?;
        Ok(Self {
            max_depth: Some(max_depth),
        })
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Whether a forwarder at `depth` may be created.
    pub fn allows(&self, depth: usize) -> bool {
        self.max_depth.map_or(true, |limit| depth <= limit.get())
    }
}
