//! App Root Component
//!
//! Holds the authenticated session and switches between Login and Dashboard.

use leptos::*;

use crate::api::Session;
use crate::pages::{Dashboard, Login};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // The only root-level state: the current session, absent until login.
    // Nothing is persisted, so a page refresh returns to the Login view.
    let session = create_rw_signal(None::<Session>);

    let on_login = move |s: Session| session.set(Some(s));

    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            {move || match session.get() {
                None => view! { <Login on_login=on_login /> }.into_view(),
                Some(s) => view! { <Dashboard session=s /> }.into_view(),
            }}
        </div>
    }
}
