//! Wiring of configuration, session store and backend for one invocation.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};

use rucscope_core::api::ApiBackend;
use rucscope_core::config::ClientConfig;
use rucscope_core::session::SessionStore;
use rucscope_infrastructure::{ClientPaths, ConfigService, FileSessionStore, HttpApiBackend};

pub struct AppContext {
    pub config: ClientConfig,
    pub backend: Arc<dyn ApiBackend>,
    pub session_store: Arc<dyn SessionStore>,
}

impl AppContext {
    /// Loads the config (file, env, then `--api-url`), opens the session
    /// directory and builds the HTTP client.
    pub fn bootstrap(config_path: Option<&Path>, api_url: Option<&str>) -> Result<Self> {
        let paths = ClientPaths::default();
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(&paths)?,
        };
        let config = resolve_config(config_service.load()?, api_url)?;
        tracing::debug!("[Bootstrap] Config from {}", config_service.path().display());

        let session_store = match &config.session_dir {
            Some(dir) => FileSessionStore::new(dir.clone()),
            None => FileSessionStore::from_paths(&paths)?,
        };
        tracing::debug!("[Bootstrap] Session dir {}", session_store.dir().display());

        let backend = HttpApiBackend::new(&config).context("Failed to set up HTTP client")?;
        tracing::debug!("[Bootstrap] Backend at {}", backend.base_url());

        Ok(Self {
            config,
            backend: Arc::new(backend),
            session_store: Arc::new(session_store),
        })
    }
}

fn resolve_config(config: ClientConfig, api_url: Option<&str>) -> Result<ClientConfig> {
    match api_url {
        Some(api_url) => Ok(ClientConfig {
            api_url: api_url.to_string(),
            ..config
        }
        .validated()?),
        None => Ok(config),
    }
}
