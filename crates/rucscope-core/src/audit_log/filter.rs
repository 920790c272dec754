//! Log filter and request parameters.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Which lookup endpoint a log row must come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum EndpointFilter {
    /// No constraint
    #[default]
    Any,
    /// Taxpayer (RUC) lookups
    Ruc,
    /// National ID (DNI) lookups
    Dni,
}

impl EndpointFilter {
    /// Value sent as the `endpoint` query parameter, `None` for `Any`.
    pub fn wire_value(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Ruc => Some("consulta_ruc"),
            Self::Dni => Some("consulta_dni"),
        }
    }
}

/// Outcome a log row must have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SuccessFilter {
    /// No constraint
    #[default]
    #[strum(serialize = "any")]
    Any,
    #[strum(to_string = "true", serialize = "ok")]
    Succeeded,
    #[strum(to_string = "false", serialize = "failed")]
    Failed,
}

impl SuccessFilter {
    /// Value sent as the `success` query parameter, `None` for `Any`.
    pub fn wire_value(&self) -> Option<&'static str> {
        match self {
            Self::Any => None,
            Self::Succeeded => Some("true"),
            Self::Failed => Some("false"),
        }
    }
}

/// User-editable predicate over the audit log.
///
/// A field at its "any"/empty value puts no constraint on the query and is
/// not sent to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    pub endpoint: EndpointFilter,
    pub success: SuccessFilter,
    /// Caller IP to match; blank means any
    pub ip: String,
}

impl LogFilter {
    /// True when no field constrains the query.
    pub fn is_default(&self) -> bool {
        self.endpoint == EndpointFilter::Any
            && self.success == SuccessFilter::Any
            && self.ip_value().is_none()
    }

    /// The trimmed IP, or `None` when blank.
    pub fn ip_value(&self) -> Option<&str> {
        let ip = self.ip.trim();
        (!ip.is_empty()).then_some(ip)
    }
}

/// Parameters of one `GET /api/logs` request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub page: u32,
    pub limit: u32,
    pub filter: LogFilter,
}

impl LogQuery {
    pub fn new(page: u32, limit: u32, filter: LogFilter) -> Self {
        Self {
            page,
            limit,
            filter,
        }
    }

    /// Query-string pairs in request order: `page`, `limit`, then the
    /// constrained filter fields.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(endpoint) = self.filter.endpoint.wire_value() {
            pairs.push(("endpoint", endpoint.to_string()));
        }
        if let Some(success) = self.filter.success.wire_value() {
            pairs.push(("success", success.to_string()));
        }
        if let Some(ip) = self.filter.ip_value() {
            pairs.push(("ip", ip.to_string()));
        }
        pairs
    }

    /// True if the request carries the given parameter.
    pub fn has_param(&self, key: &str) -> bool {
        self.query_pairs().iter().any(|(k, _)| *k == key)
    }
}
