//! Metric Card Component
//!
//! Displays a single scalar metric from the summary.

use leptos::*;

/// Metric card component
#[component]
pub fn MetricCard(
    /// Metric label to display
    label: &'static str,
    /// Pre-formatted value
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
            <span class="text-gray-400 text-sm">{label}</span>
            <div class="text-3xl font-bold mt-2">{value}</div>
        </div>
    }
}

/// Two-decimal rendering for an average that may be absent.
pub fn format_average(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "—".to_string())
}

/// Integer rendering for the equipment count.
pub fn format_count(value: Option<u32>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn averages_round_to_two_decimals() {
        assert_eq!(format_average(Some(12.345)), "12.35");
        assert_eq!(format_average(Some(1.2)), "1.20");
        assert_eq!(format_average(Some(99.0)), "99.00");
    }

    #[test]
    fn absent_values_render_as_dash() {
        assert_eq!(format_average(None), "—");
        assert_eq!(format_count(None), "—");
    }

    #[test]
    fn counts_render_as_integers() {
        assert_eq!(format_count(Some(7)), "7");
    }
}
