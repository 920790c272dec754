//! Pagination state and page-picker arithmetic.

use serde::{Deserialize, Serialize};

/// Rows per page when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Number of page buttons shown by the page picker.
pub const PAGE_WINDOW_WIDTH: u32 = 5;

/// Pagination state as reported by the backend.
///
/// `page` and `limit` are request parameters; the remaining fields are derived
/// by the server and satisfy:
///
/// - `total_pages == ceil(total / limit)` (0 when `total` is 0)
/// - `has_next == page < total_pages`
/// - `has_prev == page > 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// State before the first response arrives: page 1, nothing loaded.
    pub fn empty(limit: u32) -> Self {
        Self::from_total(1, limit, 0)
    }

    /// Derives the server-side fields from `total`.
    ///
    /// A zero `limit` is treated as one row per page.
    pub fn from_total(page: u32, limit: u32, total: u32) -> Self {
        let limit = limit.max(1);
        let total_pages = total.div_ceil(limit);
        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// True when the derived fields agree with `page`, `limit` and `total`.
    pub fn is_consistent(&self) -> bool {
        self.limit > 0 && *self == Self::from_total(self.page, self.limit, self.total)
    }

    /// Page numbers to show in the page picker for this state.
    pub fn window(&self) -> Vec<u32> {
        page_window(self.page, self.total_pages)
    }

    /// First and last row numbers (1-based) displayed on the current page.
    ///
    /// `None` when the current page holds no rows.
    pub fn visible_range(&self) -> Option<(u32, u32)> {
        let first = self
            .page
            .saturating_sub(1)
            .saturating_mul(self.limit)
            .saturating_add(1);
        let last = self.page.saturating_mul(self.limit).min(self.total);
        (first <= last).then_some((first, last))
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::empty(DEFAULT_PAGE_SIZE)
    }
}

/// Selects the page numbers shown by a page picker of width 5.
///
/// - `total_pages <= 5`: every page
/// - near the start (`page <= 3`): `1..=5`
/// - near the end (`page >= total_pages - 2`): the last five pages
/// - otherwise: `page` centred, two on each side
pub fn page_window(page: u32, total_pages: u32) -> Vec<u32> {
    let half = PAGE_WINDOW_WIDTH / 2;
    let start = if total_pages <= PAGE_WINDOW_WIDTH || page <= half + 1 {
        1
    } else if page >= total_pages - half {
        total_pages - PAGE_WINDOW_WIDTH + 1
    } else {
        page - half
    };
    let len = PAGE_WINDOW_WIDTH.min(total_pages);
    (start..start + len).collect()
}
