//! Plugin configuration management.
//!
//! Two knobs: which authentication scheme new accounts use, and whether the
//! edit sheet may change an account's domain after creation.
//!
//! Configuration is stored at `~/.config/lighthouse-account/config.json`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::account::AuthScheme;

/// Application name used for the config directory path
const APP_NAME: &str = "lighthouse-account";

/// Config file name
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Scheme for newly created accounts. Existing accounts keep whatever
    /// scheme they were created with.
    pub auth_scheme: AuthScheme,
    /// Whether the edit sheet may change the domain post-creation.
    pub allow_domain_edit: bool,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            auth_scheme: AuthScheme::Token,
            allow_domain_edit: false,
        }
    }
}

impl PluginConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PluginConfig::default();
        assert_eq!(config.auth_scheme, AuthScheme::Token);
        assert!(!config.allow_domain_edit);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = PluginConfig {
            auth_scheme: AuthScheme::Password,
            allow_domain_edit: true,
        };
        config.save_to(&path).unwrap();

        let loaded = PluginConfig::load_from(&path).unwrap();
        assert_eq!(loaded.auth_scheme, AuthScheme::Password);
        assert!(loaded.allow_domain_edit);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = PluginConfig::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(loaded.auth_scheme, AuthScheme::Token);
    }
}
