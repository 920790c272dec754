//! Unified path management for rucscope files.
//!
//! All configuration and persisted session state lives under one per-user
//! directory so that a single client profile maps to a single directory.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/rucscope/          # Config directory (platform specific)
//! ├── config.toml              # Client configuration
//! └── session/                 # Persisted session (FileSessionStore)
//!     ├── token                # Bearer token
//!     └── user.json            # User profile
//! ```

use std::path::PathBuf;

const APP_DIR_NAME: &str = "rucscope";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Platform config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for rucscope_core::ClientError {
    fn from(err: PathError) -> Self {
        rucscope_core::ClientError::config(err.to_string())
    }
}

/// Path resolution rooted either at the platform config directory or at an
/// explicit base (tests, `--config` overrides).
#[derive(Debug, Clone, Default)]
pub struct ClientPaths {
    base: Option<PathBuf>,
}

impl ClientPaths {
    /// Creates a resolver. `None` uses the platform config directory.
    pub fn new(base: Option<PathBuf>) -> Self {
        Self { base }
    }

    /// Returns the rucscope configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: e.g. `~/.config/rucscope/`
    /// - `Err(PathError::ConfigDirNotFound)`: no platform config directory
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or(PathError::ConfigDirNotFound),
        }
    }

    /// Returns the path to `config.toml`.
    pub fn config_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("config.toml"))
    }

    /// Returns the directory holding the persisted session.
    pub fn session_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("session"))
    }
}
