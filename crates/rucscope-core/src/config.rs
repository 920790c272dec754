//! Client configuration.
//!
//! Loaded from `config.toml` by the infrastructure layer; every field has a
//! default.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::audit_log::DEFAULT_PAGE_SIZE;
use crate::error::{ClientError, Result};

pub const DEFAULT_API_URL: &str = "http://localhost:3000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Client configuration, stored as `config.toml`.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the backend, without a trailing slash
    pub api_url: String,
    /// Rows per page in the log viewer
    pub page_size: u32,
    pub request_timeout_secs: u64,
    /// Where the session is persisted; the platform config dir when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_dir: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            session_dir: None,
        }
    }
}

impl ClientConfig {
    /// Checks value ranges and normalizes the base URL.
    pub fn validated(mut self) -> Result<Self> {
        let api_url = self.api_url.trim().trim_end_matches('/');
        if api_url.is_empty() {
            return Err(ClientError::config("api_url must not be empty"));
        }
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(ClientError::config(format!(
                "api_url must start with http:// or https://, got '{api_url}'"
            )));
        }
        self.api_url = api_url.to_string();

        if self.page_size == 0 {
            return Err(ClientError::config("page_size must be greater than 0"));
        }
        if self.request_timeout_secs == 0 {
            return Err(ClientError::config(
                "request_timeout_secs must be greater than 0",
            ));
        }
        Ok(self)
    }
}
