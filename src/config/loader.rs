//! Configuration Loader
//!
//! Builds a `ClientConfig` from a JSON file and environment variables.
//! Later sources override earlier ones; the environment always wins.

use crate::config::settings::ClientConfig;
use crate::error::{DriftError, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable holding the bearer token
pub const TOKEN_ENV: &str = "DRIFT_ACCESS_TOKEN";

/// Environment variable overriding the API root
pub const BASE_URL_ENV: &str = "DRIFT_API_URL";

/// Environment variable pointing at a config file
pub const CONFIG_PATH_ENV: &str = "DRIFT_CONFIG_PATH";

/// One layer of configuration; every field optional
#[derive(Debug, Default, Deserialize)]
struct PartialConfig {
    #[serde(default)]
    access_token: Option<String>,

    #[serde(default)]
    extra_headers: HashMap<String, String>,

    #[serde(default)]
    base_url: Option<String>,
}

/// Configuration loader with support for multiple sources
#[derive(Debug, Default)]
pub struct ConfigLoader {
    layer: PartialConfig,
}

impl ConfigLoader {
    /// Load `.env`, the first config file found in the default locations,
    /// then the environment
    pub fn new() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut loader = Self::default();
        loader.load_from_default_paths()?;
        loader.apply_env(|name| std::env::var(name).ok());
        Ok(loader)
    }

    /// Load a specific config file, then the environment
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut loader = Self::default();
        loader.load_from_file(path)?;
        loader.apply_env(|name| std::env::var(name).ok());
        Ok(loader)
    }

    /// Get list of config paths to check
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Ok(custom_path) = std::env::var(CONFIG_PATH_ENV) {
            paths.push(PathBuf::from(custom_path));
        }

        paths.push(PathBuf::from("drift.json"));

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("drift").join("config.json"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".drift").join("config.json"));
        }

        paths
    }

    fn load_from_default_paths(&mut self) -> Result<()> {
        if let Some(path) = Self::get_config_paths().into_iter().find(|p| p.exists()) {
            self.load_from_file(&path)?;
        }
        Ok(())
    }

    /// Merge a JSON config file into the current layer
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            DriftError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let layer: PartialConfig = serde_json::from_str(&content).map_err(|e| {
            DriftError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), "Loaded Drift client config file");
        self.merge(layer);
        Ok(())
    }

    /// Merge values from an environment lookup
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.merge(PartialConfig {
            access_token: lookup(TOKEN_ENV),
            extra_headers: HashMap::new(),
            base_url: lookup(BASE_URL_ENV).filter(|url| !url.is_empty()),
        });
    }

    fn merge(&mut self, other: PartialConfig) {
        if other.access_token.is_some() {
            self.layer.access_token = other.access_token;
        }
        if other.base_url.is_some() {
            self.layer.base_url = other.base_url;
        }
        self.layer.extra_headers.extend(other.extra_headers);
    }

    /// Finish loading; fails when no source supplied a token
    pub fn into_config(self) -> Result<ClientConfig> {
        let access_token = self.layer.access_token.ok_or_else(|| {
            DriftError::Config(format!(
                "No access token configured. Set {} or add access_token to a config file",
                TOKEN_ENV
            ))
        })?;

        let mut config = ClientConfig::new(access_token);
        config.extra_headers = self.layer.extra_headers;
        if let Some(base_url) = self.layer.base_url {
            config.base_url = base_url;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_load_from_file() {
        let file = write_config(
            r#"{
                "access_token": "file-token",
                "extra_headers": {"X-Partner": "acme"}
            }"#,
        );

        let mut loader = ConfigLoader::default();
        loader.load_from_file(file.path()).unwrap();
        let config = loader.into_config().unwrap();

        assert_eq!(config.access_token, "file-token");
        assert_eq!(config.extra_headers.get("X-Partner").map(String::as_str), Some("acme"));
        assert_eq!(config.base_url, "https://driftapi.com");
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config(r#"{"access_token": "file-token", "base_url": "http://file"}"#);

        let mut loader = ConfigLoader::default();
        loader.load_from_file(file.path()).unwrap();
        loader.apply_env(|name| match name {
            TOKEN_ENV => Some("env-token".to_string()),
            _ => None,
        });
        let config = loader.into_config().unwrap();

        assert_eq!(config.access_token, "env-token");
        assert_eq!(config.base_url, "http://file");
    }

    #[test]
    fn test_empty_token_is_accepted() {
        let mut loader = ConfigLoader::default();
        loader.apply_env(|name| (name == TOKEN_ENV).then(String::new));
        assert_eq!(loader.into_config().unwrap().access_token, "");
    }

    #[test]
    fn test_missing_token() {
        let err = ConfigLoader::default().into_config().unwrap_err();
        assert!(matches!(err, DriftError::Config(_)));
    }

    #[test]
    fn test_bad_file() {
        let file = write_config("{ not json");
        let mut loader = ConfigLoader::default();
        let err = loader.load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, DriftError::Config(_)));

        let err = loader.load_from_file("/nonexistent/drift.json").unwrap_err();
        assert!(matches!(err, DriftError::Config(_)));
    }
}
