//! Infrastructure layer of the rucscope client.
//!
//! Concrete implementations of the core traits: file and in-memory session
//! stores, the reqwest-based backend, and configuration loading.

pub mod config_service;
pub mod file_session_store;
pub mod http_backend;
pub mod memory_session_store;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_session_store::FileSessionStore;
pub use crate::http_backend::HttpApiBackend;
pub use crate::memory_session_store::MemorySessionStore;
pub use crate::paths::ClientPaths;
