//! Audit log row models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::pagination::Pagination;

/// One historical API call as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    /// Endpoint tag, e.g. `consulta_ruc`
    pub endpoint: String,
    /// The identifier that was looked up
    #[serde(default)]
    pub parameter: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    pub status_code: u16,
    /// Response time in milliseconds
    #[serde(default, rename = "responseTime", alias = "responseTimeMs")]
    pub response_time_ms: Option<u64>,
    pub success: bool,
    pub created_at: DateTime<Utc>,
}

/// Response envelope of `GET /api/logs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPage {
    pub data: Vec<LogEntry>,
    pub pagination: Pagination,
}
