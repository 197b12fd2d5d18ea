//! Decoder configuration.
//!
//! The defaults reproduce RFC 7946 decoding as this crate documents it:
//! strict ring closure, extra position elements ignored, and a bounded
//! geometry collection depth.
use crate::error::{GeoJsonError, Result};
use serde::de::Error;
use std::path::Path;

/// How the decoder treats a polygon ring whose first and last positions differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RingClosure {
    /// Reject the ring with `UnclosedRing`.
    #[default]
    Strict,
    /// Append a copy of the first position.
    AutoClose,
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub ring_closure: RingClosure,

    /// Maximum depth of nested geometry collections
    #[serde(default = "Config::default_max_nesting_depth")]
    pub max_nesting_depth: usize,

    /// Positions longer than three numbers are accepted and truncated
    #[serde(default = "Config::default_ignore_extra_position_elements")]
    pub ignore_extra_position_elements: bool,
}

impl Config {
    const fn default_max_nesting_depth() -> usize {
        32
    }

    const fn default_ignore_extra_position_elements() -> bool {
        true
    }

    pub fn with_ring_closure(mut self, ring_closure: RingClosure) -> Self {
        self.ring_closure = ring_closure;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        assert!(depth > 0, "Nesting depth must be greater than zero");

        if depth > 512 {
            log::warn!(
                "Nesting depth of {} is very large; deeply nested geometry collections \
                are decoded recursively and may exhaust the stack.",
                depth
            );
        }

        self.max_nesting_depth = depth;
        self
    }

    pub fn with_ignore_extra_position_elements(mut self, ignore: bool) -> Self {
        self.ignore_extra_position_elements = ignore;
        self
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.max_nesting_depth == 0 {
            return Err("Nesting depth must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a configuration file. The format follows the file extension:
    /// `.json`, or `.toml` with the `toml` feature enabled.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading codec configuration from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|e| {
            GeoJsonError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                Self::from_json(&contents).map_err(|e| GeoJsonError::Config(e.to_string()))
            }
            #[cfg(feature = "toml")]
            Some("toml") => {
                Self::from_toml(&contents).map_err(|e| GeoJsonError::Config(e.to_string()))
            }
            _ => Err(GeoJsonError::Config(format!(
                "Unsupported configuration file: {}",
                path.display()
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ring_closure: RingClosure::default(),
            max_nesting_depth: Self::default_max_nesting_depth(),
            ignore_extra_position_elements: Self::default_ignore_extra_position_elements(),
        }
    }
}
