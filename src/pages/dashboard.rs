//! Dashboard Page
//!
//! Main view: dataset upload, summary metrics with charts, upload history,
//! and PDF report download.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{self, Session, Summary};
use crate::components::{BarChart, HistoryTable, MetricCard, PieChart, UploadForm};
use crate::components::metric_card::{format_average, format_count};
use crate::state::dashboard::{AnalyticsState, DashboardState};

/// Dashboard page component
#[component]
pub fn Dashboard(session: Session) -> impl IntoView {
    let state = DashboardState::new(session);
    provide_context(state.clone());

    // Fetch history on mount. The summary is deliberately NOT fetched here:
    // charts appear only after a successful upload.
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            match api::fetch_history(&state.session).await {
                Ok(entries) => state.history.set(entries),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching history: {}", e).into());
                }
            }
        });
    });

    view! {
        <div class="container mx-auto px-4 py-8 space-y-6">
            <Header />
            <UploadForm />
            <AnalyticsPanel />
            <HistoryTable />
        </div>
    }
}

/// Page header with the report download control.
#[component]
fn Header() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let analytics = state.analytics;
    let session = state.session.clone();
    let operator = state.session.username().to_string();

    let on_download = move |_| {
        let session = session.clone();
        spawn_local(async move {
            match api::fetch_report_pdf(&session).await {
                Ok(bytes) => {
                    if let Err(e) = save_download(&bytes, "summary_report.pdf") {
                        web_sys::console::error_1(
                            &format!("Error saving report: {:?}", e).into(),
                        );
                    }
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error downloading report: {}", e).into(),
                    );
                }
            }
        });
    };

    view! {
        <div class="flex flex-wrap items-center justify-between gap-4">
            <div>
                <h1 class="text-3xl font-bold">"Chemical Visualizer Dashboard"</h1>
                <p class="text-gray-400 mt-1">{format!("Operator: {}", operator)}</p>
            </div>

            <button
                on:click=on_download
                disabled=move || !analytics.get().is_loaded()
                class="px-4 py-2 bg-red-700 hover:bg-red-600 disabled:bg-gray-700
                       disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
            >
                "Download PDF Report"
            </button>
        </div>
    }
}

/// Charts and metrics once a summary is loaded, placeholder otherwise.
#[component]
fn AnalyticsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");
    let analytics = state.analytics;

    move || match analytics.get() {
        AnalyticsState::Loaded(summary) => view! {
            <div class="space-y-6">
                <MetricsRow summary=summary.clone() />

                <div class="grid md:grid-cols-2 gap-6">
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h3 class="text-lg font-semibold mb-4">"Average Parameters"</h3>
                        <BarChart summary=summary.clone() />
                    </section>

                    // Skipped gracefully when the backend sent no distribution.
                    {summary.type_distribution.clone()
                        .filter(|dist| !dist.is_empty())
                        .map(|dist| view! {
                            <section class="bg-gray-800 rounded-xl p-6">
                                <h3 class="text-lg font-semibold mb-4">"Equipment Distribution"</h3>
                                <PieChart distribution=dist />
                            </section>
                        })}
                </div>
            </div>
        }
        .into_view(),
        _ => view! {
            <div class="bg-gray-800 rounded-xl p-10 text-center border border-gray-700">
                <h2 class="text-2xl font-semibold">"Analytics Unavailable"</h2>
                <p class="text-gray-400 mt-2">
                    "Upload a CSV file to generate charts and insights."
                </p>
            </div>
        }
        .into_view(),
    }
}

/// The four scalar metrics of the current summary.
#[component]
fn MetricsRow(summary: Summary) -> impl IntoView {
    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <MetricCard label="Total Equipment" value=format_count(summary.total_equipment) />
            <MetricCard label="Avg Flow" value=format_average(summary.avg_flowrate) />
            <MetricCard label="Avg Pressure" value=format_average(summary.avg_pressure) />
            <MetricCard label="Avg Temp" value=format_average(summary.avg_temperature) />
        </div>
    }
}

/// Offer `bytes` to the browser as a PDF file download via an object URL and
/// a synthetic anchor click.
fn save_download(bytes: &[u8], filename: &str) -> Result<(), wasm_bindgen::JsValue> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array.into());

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)?;

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let anchor = document.create_element("a")?;
    anchor.set_attribute("href", &url)?;
    anchor.set_attribute("download", filename)?;
    anchor
        .dyn_ref::<web_sys::HtmlElement>()
        .ok_or("anchor is not an HtmlElement")?
        .click();
    web_sys::Url::revoke_object_url(&url)?;

    Ok(())
}
