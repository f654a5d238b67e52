//! Dashboard State
//!
//! Reactive state for the dashboard view.

use leptos::*;

use crate::api::{HistoryEntry, Session, Summary};

/// Analytics panel state.
///
/// A single tagged value instead of separate "data loaded" and "summary
/// present" flags, so the placeholder and the charts can never disagree about
/// what was fetched.
#[derive(Clone, Debug, PartialEq)]
pub enum AnalyticsState {
    /// Nothing uploaded yet; the placeholder is shown.
    NoData,
    /// An upload succeeded and the summary fetch is in flight.
    Loading,
    /// A chartable summary arrived.
    Loaded(Summary),
    /// The summary fetch failed. Rendered like `NoData`; the message goes to
    /// the console only.
    Error(String),
}

impl AnalyticsState {
    pub fn summary(&self) -> Option<&Summary> {
        match self {
            AnalyticsState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, AnalyticsState::Loaded(_))
    }

    /// Fold a summary fetch result into the next state. A summary without a
    /// dataset id means the backend has no data yet.
    pub fn from_fetch(result: Result<Summary, String>) -> Self {
        match result {
            Ok(summary) if summary.is_chartable() => AnalyticsState::Loaded(summary),
            Ok(_) => AnalyticsState::NoData,
            Err(e) => AnalyticsState::Error(e),
        }
    }
}

/// Signal bundle shared by the dashboard page and its child components.
///
/// The session rides along as a plain value: requests are built from it
/// explicitly, there is no global client configuration to mutate.
#[derive(Clone)]
pub struct DashboardState {
    pub session: Session,
    pub analytics: RwSignal<AnalyticsState>,
    pub history: RwSignal<Vec<HistoryEntry>>,
    pub file: RwSignal<Option<web_sys::File>>,
    pub uploading: RwSignal<bool>,
    pub status: RwSignal<String>,
}

impl DashboardState {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            analytics: create_rw_signal(AnalyticsState::NoData),
            history: create_rw_signal(Vec::new()),
            file: create_rw_signal(None),
            uploading: create_rw_signal(false),
            status: create_rw_signal(String::new()),
        }
    }
}

/// User-facing message for a failed upload. Prefers the backend's structured
/// error text, which the API layer already extracted.
pub fn upload_failure_message(error: &str) -> String {
    format!("Upload failed: {}", error)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chartable_summary() -> Summary {
        serde_json::from_str(r#"{"id": 1, "total_equipment": 7}"#).unwrap()
    }

    #[test]
    fn fetch_with_id_loads() {
        let state = AnalyticsState::from_fetch(Ok(chartable_summary()));
        assert!(state.is_loaded());
        assert_eq!(state.summary().unwrap().total_equipment, Some(7));
    }

    #[test]
    fn fetch_without_id_stays_no_data() {
        let state = AnalyticsState::from_fetch(Ok(Summary::default()));
        assert_eq!(state, AnalyticsState::NoData);
        assert!(state.summary().is_none());
    }

    #[test]
    fn fetch_error_carries_message() {
        let state = AnalyticsState::from_fetch(Err("Network error: timeout".to_string()));
        assert_eq!(
            state,
            AnalyticsState::Error("Network error: timeout".to_string())
        );
        assert!(!state.is_loaded());
    }

    #[test]
    fn failure_message_wraps_backend_error() {
        assert_eq!(upload_failure_message("bad format"), "Upload failed: bad format");
    }
}
