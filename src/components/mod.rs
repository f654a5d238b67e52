//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod history_table;
pub mod metric_card;
pub mod upload_form;

pub use chart::{BarChart, PieChart};
pub use history_table::HistoryTable;
pub use metric_card::MetricCard;
pub use upload_form::UploadForm;
