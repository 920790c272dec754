//! Test doubles shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use tokio::sync::Notify;

use rucscope_core::api::{ApiBackend, LoginRequest, LoginResponse};
use rucscope_core::audit_log::{LogEntry, LogPage, LogQuery, Pagination};
use rucscope_core::error::{ClientError, Result};
use rucscope_core::lookup::{IdentifierKind, LookupResult};
use rucscope_core::user::User;

pub(crate) fn ana() -> User {
    User {
        id: "u1".to_string(),
        name: "Ana".to_string(),
        email: "a@x.com".to_string(),
        role: "admin".to_string(),
    }
}

pub(crate) fn log_entry(n: u32) -> LogEntry {
    LogEntry {
        id: format!("log-{n}"),
        endpoint: "consulta_ruc".to_string(),
        parameter: Some("20100070970".to_string()),
        ip: Some("10.0.0.1".to_string()),
        user_agent: None,
        country: Some("PE".to_string()),
        status_code: 200,
        response_time_ms: Some(12),
        success: true,
        created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
    }
}

/// Recording backend. The log endpoint pretends to hold `total_logs` rows
/// and serves the requested slice of them.
pub(crate) struct MockBackend {
    pub login_result: Mutex<Option<Result<LoginResponse>>>,
    pub logout_error: Mutex<Option<ClientError>>,
    pub logout_calls: AtomicUsize,
    pub total_logs: AtomicU32,
    pub logs_error: Mutex<Option<ClientError>>,
    /// Reported instead of the pagination derived from `total_logs`
    pub pagination_override: Mutex<Option<Pagination>>,
    pub log_calls: Mutex<Vec<(Option<String>, LogQuery)>>,
    pub lookup_error: Mutex<Option<ClientError>>,
    pub lookup_calls: Mutex<Vec<(Option<String>, IdentifierKind, String)>>,
    /// Requests for a gated page (or identifier) wait until notified.
    pub page_gates: Mutex<HashMap<u32, Arc<Notify>>>,
    pub lookup_gates: Mutex<HashMap<String, Arc<Notify>>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            login_result: Mutex::new(None),
            logout_error: Mutex::new(None),
            logout_calls: AtomicUsize::new(0),
            total_logs: AtomicU32::new(0),
            logs_error: Mutex::new(None),
            pagination_override: Mutex::new(None),
            log_calls: Mutex::new(Vec::new()),
            lookup_error: Mutex::new(None),
            lookup_calls: Mutex::new(Vec::new()),
            page_gates: Mutex::new(HashMap::new()),
            lookup_gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn with_logs(total: u32) -> Self {
        let backend = Self::new();
        backend.total_logs.store(total, Ordering::SeqCst);
        backend
    }

    pub fn fail_logs(&self, error: Option<ClientError>) {
        *self.logs_error.lock().unwrap() = error;
    }

    pub fn override_pagination(&self, pagination: Option<Pagination>) {
        *self.pagination_override.lock().unwrap() = pagination;
    }

    pub fn gate_page(&self, page: u32) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.page_gates.lock().unwrap().insert(page, gate.clone());
        gate
    }

    pub fn gate_lookup(&self, identifier: &str) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        self.lookup_gates
            .lock()
            .unwrap()
            .insert(identifier.to_string(), gate.clone());
        gate
    }

    pub fn last_log_query(&self) -> LogQuery {
        self.log_calls.lock().unwrap().last().unwrap().1.clone()
    }

    pub fn log_call_count(&self) -> usize {
        self.log_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ApiBackend for MockBackend {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
        self.login_result
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| Err(ClientError::authentication("Login failed")))
    }

    async fn logout(&self) -> Result<()> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        match self.logout_error.lock().unwrap().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    async fn list_logs(&self, token: Option<&str>, query: &LogQuery) -> Result<LogPage> {
        self.log_calls
            .lock()
            .unwrap()
            .push((token.map(str::to_string), query.clone()));

        let gate = self.page_gates.lock().unwrap().get(&query.page).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(err) = self.logs_error.lock().unwrap().clone() {
            return Err(err);
        }

        let total = self.total_logs.load(Ordering::SeqCst);
        let pagination = Pagination::from_total(query.page, query.limit, total);
        let first = (query.page.saturating_sub(1)) * query.limit + 1;
        let last = (query.page * query.limit).min(total);
        let data = (first..=last).map(log_entry).collect();
        let pagination = self
            .pagination_override
            .lock()
            .unwrap()
            .unwrap_or(pagination);
        Ok(LogPage { data, pagination })
    }

    async fn lookup(
        &self,
        token: Option<&str>,
        kind: IdentifierKind,
        identifier: &str,
    ) -> Result<LookupResult> {
        self.lookup_calls.lock().unwrap().push((
            token.map(str::to_string),
            kind,
            identifier.to_string(),
        ));

        let gate = self.lookup_gates.lock().unwrap().get(identifier).cloned();
        if let Some(gate) = gate {
            gate.notified().await;
        }

        if let Some(err) = self.lookup_error.lock().unwrap().clone() {
            return Err(err);
        }

        Ok(LookupResult {
            ruc: identifier.to_string(),
            business_name: Some(format!("{kind} holder {identifier}")),
            ..LookupResult::default()
        })
    }
}
