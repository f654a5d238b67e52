//! History Table Component
//!
//! Renders the last uploads in the order the backend returned them.

use leptos::*;

use crate::state::dashboard::DashboardState;

/// Upload history table component
#[component]
pub fn HistoryTable() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let history = state.history;

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"Upload History (Last 5)"</h3>

            <table class="w-full text-left">
                <thead>
                    <tr class="text-gray-400 text-sm border-b border-gray-700">
                        <th class="py-2">"Dataset ID"</th>
                        <th class="py-2">"Uploaded At"</th>
                        <th class="py-2">"Total Equipment"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let entries = history.get();
                        if entries.is_empty() {
                            view! {
                                <tr>
                                    <td colspan="3" class="py-4 text-gray-400 text-sm">
                                        "No uploads yet"
                                    </td>
                                </tr>
                            }
                            .into_view()
                        } else {
                            entries
                                .into_iter()
                                .map(|entry| view! {
                                    <tr class="border-b border-gray-700 last:border-0">
                                        <td class="py-2">{entry.id}</td>
                                        <td class="py-2">{format_uploaded_at(&entry.uploaded_at)}</td>
                                        <td class="py-2">{entry.total_equipment}</td>
                                    </tr>
                                })
                                .collect_view()
                        }
                    }}
                </tbody>
            </table>
        </section>
    }
}

/// Render an RFC 3339 upload timestamp as a readable date-time, falling back
/// to the raw string when it does not parse.
pub fn format_uploaded_at(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%b %d, %Y %H:%M").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_rfc3339_timestamps() {
        assert_eq!(
            format_uploaded_at("2025-11-02T09:15:00Z"),
            "Nov 02, 2025 09:15"
        );
        // Django emits fractional seconds; they parse the same way.
        assert_eq!(
            format_uploaded_at("2025-11-02T09:15:00.123456Z"),
            "Nov 02, 2025 09:15"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_uploaded_at("yesterday"), "yesterday");
    }
}
