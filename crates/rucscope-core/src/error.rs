//! Error types for the rucscope client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the entire rucscope client.
///
/// The first four variants are the failure modes a user can actually see:
/// bad credentials, a malformed identifier, an unreachable backend, and a
/// backend that answered with a non-success status. The remaining variants
/// cover local concerns (session directory, config file, payload decoding).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClientError {
    /// Bad credentials, or a missing/expired bearer token
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Malformed user input (e.g. a non-numeric identifier)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Transport failure, no response received
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response carrying a message
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Local persistence error (session directory)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates an Authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates a Server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is an Authentication error
    pub fn is_authentication(&self) -> bool {
        matches!(self, Self::Authentication(_))
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Returns the bare message, without the category prefix.
    ///
    /// Controllers store this string as their inline error text, so a backend
    /// answering `{"error": "not found"}` is shown as exactly `not found`.
    pub fn user_message(&self) -> String {
        match self {
            Self::Authentication(message)
            | Self::Validation(message)
            | Self::Network(message)
            | Self::Storage(message)
            | Self::Config(message) => message.clone(),
            Self::Server { message, .. } => message.clone(),
            Self::Serialization { message, .. } => message.clone(),
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
