//! Client configuration loading.
//!
//! Reads `config.toml`, applies environment overrides, and validates the
//! result.

use std::fs;
use std::path::{Path, PathBuf};

use rucscope_core::config::ClientConfig;
use rucscope_core::error::{ClientError, Result};

use crate::paths::ClientPaths;

/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "RUCSCOPE_API_URL";

/// Loads [`ClientConfig`] from a TOML file.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses `<config_dir>/config.toml`.
    pub fn new(paths: &ClientPaths) -> Result<Self> {
        Ok(Self {
            path: paths.config_file()?,
        })
    }

    /// Uses an explicit file (for `--config` and tests).
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file, falling back to defaults when it doesn't exist, then
    /// applies `RUCSCOPE_API_URL`.
    pub fn load(&self) -> Result<ClientConfig> {
        let env_api_url = std::env::var(API_URL_ENV).ok();
        self.load_with_override(env_api_url.as_deref())
    }

    fn load_with_override(&self, api_url: Option<&str>) -> Result<ClientConfig> {
        let mut config = self.load_file()?;
        if let Some(api_url) = api_url.filter(|url| !url.trim().is_empty()) {
            tracing::debug!("[ConfigService] api_url overridden by {}", API_URL_ENV);
            config.api_url = api_url.to_string();
        }
        config.validated()
    }

    fn load_file(&self) -> Result<ClientConfig> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(
                    "[ConfigService] No config at {}, using defaults",
                    self.path.display()
                );
                return Ok(ClientConfig::default());
            }
            Err(e) => {
                return Err(ClientError::config(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        toml::from_str(&content).map_err(|e| {
            ClientError::config(format!("Invalid config at {}: {}", self.path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rucscope_core::config::DEFAULT_API_URL;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));

        let config = service.load_with_override(None).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_file_values_and_override() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            "api_url = \"https://file.example.pe\"\npage_size = 20\n",
        )
        .unwrap();
        let service = ConfigService::with_path(&path);

        let config = service.load_with_override(None).unwrap();
        assert_eq!(config.api_url, "https://file.example.pe");
        assert_eq!(config.page_size, 20);

        let config = service
            .load_with_override(Some("https://env.example.pe/"))
            .unwrap();
        assert_eq!(config.api_url, "https://env.example.pe");
        assert_eq!(config.page_size, 20);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "page_size = \"many\"").unwrap();

        let err = ConfigService::with_path(&path)
            .load_with_override(None)
            .unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_paths_based_location() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ClientPaths::new(Some(temp_dir.path().to_path_buf()));
        let service = ConfigService::new(&paths).unwrap();
        assert_eq!(service.path(), temp_dir.path().join("config.toml"));
    }
}
