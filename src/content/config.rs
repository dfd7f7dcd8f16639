//! Load-time settings: slot capacity and which features to load.

use crate::error::Result;
use crate::variant::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

fn default_capacity() -> usize {
    DEFAULT_CAPACITY
}

/// Settings applied while loading a content manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Metadata states per block.
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// Features switched off by the user.
    #[serde(default)]
    pub disabled_features: BTreeSet<String>,
    /// Mods present alongside this one.
    #[serde(default)]
    pub loaded_mods: BTreeSet<String>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            disabled_features: BTreeSet::new(),
            loaded_mods: BTreeSet::new(),
        }
    }
}

impl ContentConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Disable a feature.
    pub fn disable(mut self, feature: impl Into<String>) -> Self {
        self.disabled_features.insert(feature.into());
        self
    }

    /// Mark a mod as loaded.
    pub fn with_mod(mut self, mod_id: impl Into<String>) -> Self {
        self.loaded_mods.insert(mod_id.into());
        self
    }

    pub fn feature_disabled(&self, feature: &str) -> bool {
        self.disabled_features.contains(feature)
    }

    pub fn mod_loaded(&self, mod_id: &str) -> bool {
        self.loaded_mods.contains(mod_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ContentConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ContentConfig::default());
        assert_eq!(config.capacity, 16);
    }

    #[test]
    fn test_parse() {
        let config = ContentConfig::from_json_str(
            r#"{ "capacity": 8, "disabled_features": ["marble"], "loaded_mods": ["thaumcraft"] }"#,
        )
        .unwrap();
        assert_eq!(config.capacity, 8);
        assert!(config.feature_disabled("marble"));
        assert!(!config.feature_disabled("limestone"));
        assert!(config.mod_loaded("thaumcraft"));
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "loaded_mods": ["ae2"] }"#).unwrap();
        let config = ContentConfig::from_path(&path).unwrap();
        assert!(config.mod_loaded("ae2"));
    }

    #[test]
    fn test_builders() {
        let config = ContentConfig::default().disable("ice").with_mod("botania");
        assert!(config.feature_disabled("ice"));
        assert!(config.mod_loaded("botania"));
    }
}
