#![forbid(unsafe_code)]

//! View configuration.
//!
//! Exactly two switches affect layout: `real_size` selects the scale mode and
//! `show_reserved_memory` decides whether reserved bytes count toward a
//! segment's size. Both default to `false` (bucketed, committed only).
//!
//! # Loading
//!
//! ```toml
//! # heapmap.toml
//! real_size = true
//! show_reserved_memory = false
//! ```
//!
//! ```rust,ignore
//! let config = ViewConfig::from_toml_file("heapmap.toml")?;
//! let config = ViewConfig::from_json_str(r#"{ "real_size": true }"#)?;
//! let config = ViewConfig::from_env();
//! ```

#[cfg(feature = "config-file")]
use std::path::Path;

use thiserror::Error;

/// Environment variable enabling real-size mode.
pub const ENV_REAL_SIZE: &str = "HEAPMAP_REAL_SIZE";
/// Environment variable including reserved memory in segment sizes.
pub const ENV_SHOW_RESERVED: &str = "HEAPMAP_SHOW_RESERVED";

/// Mode switches consumed by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    any(feature = "config-file", feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[cfg_attr(any(feature = "config-file", feature = "serde"), serde(default))]
pub struct ViewConfig {
    /// Width proportional to megabytes instead of coarse buckets.
    pub real_size: bool,
    /// Count reserved memory on top of committed memory.
    pub show_reserved_memory: bool,
}

impl ViewConfig {
    #[must_use]
    pub const fn new(real_size: bool, show_reserved_memory: bool) -> Self {
        Self {
            real_size,
            show_reserved_memory,
        }
    }

    #[must_use]
    pub const fn with_real_size(mut self, real_size: bool) -> Self {
        self.real_size = real_size;
        self
    }

    #[must_use]
    pub const fn with_show_reserved_memory(mut self, show: bool) -> Self {
        self.show_reserved_memory = show;
        self
    }

    /// Load config from environment variables.
    ///
    /// Reads:
    /// - `HEAPMAP_REAL_SIZE`: "1" or "true" enables real-size mode
    /// - `HEAPMAP_SHOW_RESERVED`: "1" or "true" counts reserved memory
    ///
    /// Unset variables keep their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`Self::from_env`] with an injectable variable source.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(val) = lookup(ENV_REAL_SIZE) {
            config.real_size = parse_flag(&val);
        }
        if let Some(val) = lookup(ENV_SHOW_RESERVED) {
            config.show_reserved_memory = parse_flag(&val);
        }
        config
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(ConfigError::Toml)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(s).map_err(ConfigError::Json)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Load from a file, picking the format by extension (`.json` or TOML).
    #[cfg(feature = "config-file")]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_file(path),
            _ => Self::from_toml_file(path),
        }
    }
}

fn parse_flag(val: &str) -> bool {
    let val = val.trim();
    val == "1" || val.eq_ignore_ascii_case("true")
}

/// Error loading a [`ViewConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "config-file")]
    #[error("TOML parse error: {0}")]
    Toml(toml::de::Error),

    #[cfg(feature = "config-file")]
    #[error("JSON parse error: {0}")]
    Json(serde_json::Error),
}
