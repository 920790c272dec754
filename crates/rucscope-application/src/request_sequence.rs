//! Request sequencing for stale-response detection.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out monotonically increasing tickets, one per issued request.
///
/// A response is applied only if its ticket is still the latest one issued;
/// anything older has been superseded and is dropped.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: AtomicU64,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, superseding every earlier one.
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// True if no newer ticket has been issued since `ticket`.
    pub fn is_latest(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Supersedes every outstanding ticket without issuing a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}
