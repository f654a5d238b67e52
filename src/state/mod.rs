//! State Management
//!
//! Dashboard state machine and signal bundle.

pub mod dashboard;

pub use dashboard::{upload_failure_message, AnalyticsState, DashboardState};
