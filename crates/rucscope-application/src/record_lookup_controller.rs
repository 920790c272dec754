//! Single-record lookup controller.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;

use rucscope_core::api::ApiBackend;
use rucscope_core::error::ClientError;
use rucscope_core::lookup::{IdentifierKind, LookupResult, validate_identifier};
use rucscope_core::session::SessionStore;

use crate::request_sequence::RequestSequence;

/// Observable state of the lookup view.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LookupViewState {
    pub kind: IdentifierKind,
    pub identifier: String,
    pub result: Option<LookupResult>,
    pub error: Option<String>,
    pub loading: bool,
}

/// What happened to a search.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    Found(LookupResult),
    /// Rejected locally or by the backend; the message is now the view's error
    Failed(ClientError),
    /// Cleared or replaced by a newer search before the response arrived
    Superseded,
}

pub struct RecordLookupController {
    backend: Arc<dyn ApiBackend>,
    session_store: Arc<dyn SessionStore>,
    state: RwLock<LookupViewState>,
    sequence: RequestSequence,
}

impl RecordLookupController {
    pub fn new(backend: Arc<dyn ApiBackend>, session_store: Arc<dyn SessionStore>) -> Self {
        Self {
            backend,
            session_store,
            state: RwLock::new(LookupViewState::default()),
            sequence: RequestSequence::new(),
        }
    }

    pub async fn snapshot(&self) -> LookupViewState {
        self.state.read().await.clone()
    }

    /// Input-level masking for the identifier field.
    pub fn mask_input(kind: IdentifierKind, raw: &str) -> String {
        kind.mask_input(raw)
    }

    /// Looks up one record.
    ///
    /// A non-numeric or empty identifier is rejected without a request.
    pub async fn search(&self, kind: IdentifierKind, identifier: &str) -> LookupOutcome {
        let identifier = identifier.trim();

        let ticket = {
            let mut state = self.state.write().await;
            state.kind = kind;
            state.identifier = identifier.to_string();

            if let Err(e) = validate_identifier(identifier) {
                // A rejected search also supersedes one still in flight.
                self.sequence.invalidate();
                state.result = None;
                state.loading = false;
                state.error = Some(e.user_message());
                return LookupOutcome::Failed(e);
            }

            state.result = None;
            state.error = None;
            state.loading = true;
            self.sequence.issue()
        };

        let token = self.session_store.token();
        tracing::debug!("[Lookup] Request #{} {} {}", ticket, kind, identifier);
        let result = self
            .backend
            .lookup(token.as_deref(), kind, identifier)
            .await;

        let mut state = self.state.write().await;
        if !self.sequence.is_latest(ticket) {
            tracing::debug!("[Lookup] Dropping stale response for request #{}", ticket);
            return LookupOutcome::Superseded;
        }
        state.loading = false;

        match result {
            Ok(record) => {
                state.result = Some(record.clone());
                LookupOutcome::Found(record)
            }
            Err(e) => {
                tracing::info!("[Lookup] {} {} failed: {}", kind, identifier, e);
                state.error = Some(e.user_message());
                LookupOutcome::Failed(e)
            }
        }
    }

    /// Resets identifier, result and error. Any search in flight is dropped
    /// when it completes.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        self.sequence.invalidate();
        state.identifier.clear();
        state.result = None;
        state.error = None;
        state.loading = false;
    }
}
