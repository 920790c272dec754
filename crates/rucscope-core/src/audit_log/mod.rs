//! Audit log domain module.
//!
//! The backend records one row per lookup call it served. This module holds
//! the read-only row model, the user-editable filter, and the pagination
//! arithmetic shared by the log controller and its page picker.
//!
//! # Module Structure
//!
//! - `model`: `LogEntry` rows and the `LogPage` envelope
//! - `filter`: `LogFilter` and the `LogQuery` request parameters
//! - `pagination`: `Pagination` state and the page-window function

mod filter;
mod model;
mod pagination;

pub use filter::{EndpointFilter, LogFilter, LogQuery, SuccessFilter};
pub use model::{LogEntry, LogPage};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_WINDOW_WIDTH, Pagination, page_window};
