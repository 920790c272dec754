//! Plain-text rendering of view state. Coloring is left to the callers.

use rucscope_application::LogViewState;
use rucscope_core::audit_log::LogEntry;
use rucscope_core::lookup::LookupResult;

const DASH: &str = "-";

pub fn log_header() -> String {
    format!(
        "{:<20} {:<13} {:<12} {:<15} {:<4} {:>6} {:>7}",
        "DATE", "ENDPOINT", "PARAMETER", "IP", "CTRY", "STATUS", "TIME"
    )
}

pub fn log_row(entry: &LogEntry) -> String {
    let time = entry
        .response_time_ms
        .map(|ms| format!("{ms}ms"))
        .unwrap_or_else(|| DASH.to_string());
    format!(
        "{:<20} {:<13} {:<12} {:<15} {:<4} {:>6} {:>7}",
        entry.created_at.format("%Y-%m-%d %H:%M:%S"),
        entry.endpoint,
        entry.parameter.as_deref().unwrap_or(DASH),
        entry.ip.as_deref().unwrap_or(DASH),
        entry.country.as_deref().unwrap_or(DASH),
        entry.status_code,
        time
    )
}

/// "Showing 11-15 of 15", or a no-results line.
pub fn summary(state: &LogViewState) -> String {
    match state.visible_range() {
        Some((first, last)) => {
            format!("Showing {first}-{last} of {}", state.pagination.total)
        }
        None => "No logs found".to_string(),
    }
}

/// Page picker with the current page bracketed, e.g. `< 1 [2] 3 >`.
pub fn page_picker(state: &LogViewState) -> String {
    let pagination = &state.pagination;
    let mut parts = Vec::new();
    parts.push(if pagination.has_prev { "<" } else { " " }.to_string());
    for page in state.page_window() {
        if page == pagination.page {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    parts.push(if pagination.has_next { ">" } else { " " }.to_string());
    parts.join(" ")
}

/// `label: value` lines for every field of a record.
pub fn record_lines(record: &LookupResult) -> Vec<String> {
    let width = record
        .fields()
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    record
        .fields()
        .into_iter()
        .map(|(label, value)| format!("{label:<width$}  {}", value.unwrap_or(DASH)))
        .collect()
}
