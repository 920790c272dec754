//! Audit log viewer controller.
//!
//! Owns the filter and pagination state of the log view and turns explicit
//! user transitions (apply, clear, page changes) into `GET /api/logs`
//! requests.
//!
//! # Stale responses
//!
//! Requests may complete out of order. Every query takes a ticket from a
//! [`RequestSequence`] while holding the state lock, and its response is
//! applied only if that ticket is still the latest. Anything older is
//! dropped, so the view always reflects the most recently issued query.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use rucscope_core::api::ApiBackend;
use rucscope_core::audit_log::{DEFAULT_PAGE_SIZE, LogEntry, LogFilter, LogQuery, Pagination};
use rucscope_core::error::ClientError;
use rucscope_core::session::SessionStore;

use crate::request_sequence::RequestSequence;

/// Observable state of the log view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogViewState {
    pub filter: LogFilter,
    /// Page of the most recently issued query
    pub page: u32,
    /// Rows of the last successful response, in server order
    pub logs: Vec<LogEntry>,
    pub pagination: Pagination,
    pub loading: bool,
    /// Inline error text of the last failed query
    pub error: Option<String>,
}

impl LogViewState {
    fn new(limit: u32) -> Self {
        Self {
            filter: LogFilter::default(),
            page: 1,
            logs: Vec::new(),
            pagination: Pagination::empty(limit),
            loading: false,
            error: None,
        }
    }

    /// Page numbers for the page picker.
    pub fn page_window(&self) -> Vec<u32> {
        self.pagination.window()
    }

    /// Row numbers shown as "first–last of total".
    pub fn visible_range(&self) -> Option<(u32, u32)> {
        self.pagination.visible_range()
    }
}

/// What happened to a query once its response arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Response applied to the view
    Applied,
    /// Request failed; the message is now the view's error
    Failed(ClientError),
    /// A newer query was issued meanwhile; the response was dropped
    Superseded,
}

pub struct LogQueryController {
    backend: Arc<dyn ApiBackend>,
    session_store: Arc<dyn SessionStore>,
    limit: u32,
    state: RwLock<LogViewState>,
    sequence: RequestSequence,
}

impl LogQueryController {
    /// Creates a controller with the default page size.
    pub fn new(backend: Arc<dyn ApiBackend>, session_store: Arc<dyn SessionStore>) -> Self {
        Self::with_limit(backend, session_store, DEFAULT_PAGE_SIZE)
    }

    /// Creates a controller with a fixed page size (at least 1).
    pub fn with_limit(
        backend: Arc<dyn ApiBackend>,
        session_store: Arc<dyn SessionStore>,
        limit: u32,
    ) -> Self {
        let limit = limit.max(1);
        Self {
            backend,
            session_store,
            limit,
            state: RwLock::new(LogViewState::new(limit)),
            sequence: RequestSequence::new(),
        }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Returns a copy of the current view state.
    pub async fn snapshot(&self) -> LogViewState {
        self.state.read().await.clone()
    }

    /// Replaces the filter without fetching.
    pub async fn set_filter(&self, filter: LogFilter) {
        self.state.write().await.filter = filter;
    }

    /// Edits the filter in place without fetching.
    pub async fn update_filter<F>(&self, edit: F)
    where
        F: FnOnce(&mut LogFilter),
    {
        edit(&mut self.state.write().await.filter);
    }

    /// Fetches `page` with the current filter.
    ///
    /// On failure the previous rows and pagination stay on screen and only
    /// the error text changes. There is no retry.
    pub async fn query(&self, page: u32) -> QueryOutcome {
        let (ticket, query) = {
            let mut state = self.state.write().await;
            let ticket = self.sequence.issue();
            state.page = page;
            state.loading = true;
            state.error = None;
            (ticket, LogQuery::new(page, self.limit, state.filter.clone()))
        };

        let token = self.session_store.token();
        tracing::debug!(
            "[LogQuery] Request #{} page={} limit={} filtered={}",
            ticket,
            query.page,
            query.limit,
            !query.filter.is_default()
        );
        let result = self.backend.list_logs(token.as_deref(), &query).await;

        let mut state = self.state.write().await;
        if !self.sequence.is_latest(ticket) {
            tracing::debug!("[LogQuery] Dropping stale response for request #{}", ticket);
            return QueryOutcome::Superseded;
        }
        state.loading = false;

        match result {
            Ok(page) => {
                if !page.pagination.is_consistent() {
                    tracing::warn!(
                        "[LogQuery] Inconsistent pagination from server: {:?}",
                        page.pagination
                    );
                }
                tracing::debug!(
                    "[LogQuery] Loaded {} of {} logs",
                    page.data.len(),
                    page.pagination.total
                );
                state.logs = page.data;
                state.pagination = page.pagination;
                QueryOutcome::Applied
            }
            Err(e) => {
                tracing::warn!("[LogQuery] Request #{} failed: {}", ticket, e);
                state.error = Some(e.user_message());
                QueryOutcome::Failed(e)
            }
        }
    }

    /// Fetches page 1 with the current filter.
    pub async fn apply_filters(&self) -> QueryOutcome {
        self.query(1).await
    }

    /// Resets every filter field to "any" and fetches page 1.
    pub async fn clear_filters(&self) -> QueryOutcome {
        self.state.write().await.filter = LogFilter::default();
        self.apply_filters().await
    }

    /// Fetches page `page`. Out-of-range pages are sent as-is.
    pub async fn go_to_page(&self, page: u32) -> QueryOutcome {
        self.query(page).await
    }

    /// Re-fetches the page currently on screen, i.e. the last one that
    /// loaded. After a failed page change this goes back to the shown page.
    pub async fn refresh(&self) -> QueryOutcome {
        let page = self.state.read().await.pagination.page;
        self.query(page).await
    }

    /// Fetches the next page, or returns `None` without a request when the
    /// current pagination has no next page.
    pub async fn next_page(&self) -> Option<QueryOutcome> {
        let pagination = self.state.read().await.pagination;
        if !pagination.has_next {
            return None;
        }
        // Server pagination is not trusted to be in range.
        let page = pagination.page.checked_add(1)?;
        Some(self.query(page).await)
    }

    /// Fetches the previous page, or returns `None` without a request when
    /// already on the first page.
    pub async fn previous_page(&self) -> Option<QueryOutcome> {
        let pagination = self.state.read().await.pagination;
        if !pagination.has_prev {
            return None;
        }
        let page = pagination.page.checked_sub(1).filter(|page| *page >= 1)?;
        Some(self.query(page).await)
    }
}
