//! Upload Form Component
//!
//! CSV file picker and the upload flow that drives the analytics state.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::state::dashboard::{upload_failure_message, AnalyticsState, DashboardState};

const SUCCESS_MESSAGE: &str = "Upload successful!";

/// Upload form component
#[component]
pub fn UploadForm() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let file = state.file;
    let uploading = state.uploading;
    let status = state.status;

    let on_file_change = move |ev: web_sys::Event| {
        let input: web_sys::HtmlInputElement = ev.target().unwrap().dyn_into().unwrap();
        file.set(input.files().and_then(|list| list.get(0)));
    };

    let state_for_submit = state;
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        // No file selected, no request.
        let selected = match state_for_submit.file.get() {
            Some(f) => f,
            None => return,
        };

        let state = state_for_submit.clone();
        state.uploading.set(true);
        state.status.set(String::new());

        spawn_local(async move {
            match api::upload_dataset(&state.session, &selected).await {
                Ok(_) => {
                    state.status.set(SUCCESS_MESSAGE.to_string());
                    state.file.set(None);
                    state.analytics.set(AnalyticsState::Loading);

                    // Two independent refreshes, not awaited together; they
                    // may complete in either order and each updates its own
                    // state slice.
                    let summary_state = state.clone();
                    spawn_local(async move {
                        let result = api::fetch_summary(&summary_state.session).await;
                        if let Err(e) = &result {
                            web_sys::console::error_1(
                                &format!("Error fetching summary: {}", e).into(),
                            );
                        }
                        summary_state.analytics.set(AnalyticsState::from_fetch(result));
                    });

                    let history_state = state.clone();
                    spawn_local(async move {
                        match api::fetch_history(&history_state.session).await {
                            Ok(entries) => history_state.history.set(entries),
                            Err(e) => {
                                web_sys::console::error_1(
                                    &format!("Error fetching history: {}", e).into(),
                                );
                            }
                        }
                    });

                    // Let the success note fade; leave any newer message alone.
                    let status = state.status;
                    gloo_timers::callback::Timeout::new(4000, move || {
                        status.update(|s| {
                            if s.as_str() == SUCCESS_MESSAGE {
                                s.clear();
                            }
                        });
                    })
                    .forget();
                }
                Err(e) => {
                    // Surfaced failure tier: the only user-visible error in
                    // the app. The selected file and analytics state are
                    // left as they were.
                    state.status.set(upload_failure_message(&e));
                    web_sys::console::error_1(&format!("Upload error: {}", e).into());
                }
            }
            state.uploading.set(false);
        });
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h3 class="text-lg font-semibold mb-4">"Upload Dataset"</h3>

            <form on:submit=on_submit class="flex flex-wrap items-center gap-3">
                <input
                    type="file"
                    accept=".csv"
                    on:change=on_file_change
                    class="text-sm text-gray-300 file:mr-3 file:px-4 file:py-2 file:rounded-lg
                           file:border-0 file:bg-gray-700 file:text-gray-200"
                />

                <button
                    type="submit"
                    disabled=move || file.get().is_none() || uploading.get()
                    class="px-4 py-2 bg-red-700 hover:bg-red-600 disabled:bg-gray-700
                           disabled:cursor-not-allowed rounded-lg font-medium transition-colors"
                >
                    {move || if uploading.get() { "Uploading..." } else { "Upload CSV" }}
                </button>

                <span class="text-sm text-gray-300">{move || status.get()}</span>
            </form>
        </section>
    }
}
