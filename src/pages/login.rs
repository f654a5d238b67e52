//! Login Page
//!
//! Credential form shown until a session exists. The credentials are not
//! validated against the backend here: the session is constructed locally
//! and a wrong password only surfaces when a later dashboard request fails.

use leptos::*;

use crate::api::Session;

/// Login form component
#[component]
pub fn Login(#[prop(into)] on_login: Callback<Session>) -> impl IntoView {
    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let user = username.get();
        let pass = password.get();

        // Unreachable in practice: the inputs are `required`, so the browser
        // refuses to submit an empty username. Kept so a failure has
        // somewhere to land rather than silently dropping the submit.
        if user.is_empty() {
            set_error.set(Some("Invalid credentials".to_string()));
            return;
        }

        set_error.set(None);
        on_login.call(Session::new(&user, &pass));
    };

    view! {
        <div class="min-h-screen flex items-center justify-center px-4">
            <div class="bg-gray-800 rounded-xl p-8 w-full max-w-sm border border-gray-700">
                <h2 class="text-xl font-semibold text-center tracking-widest mb-8">
                    "ACCESS CONTROL"
                </h2>

                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"USERNAME"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-red-700 focus:outline-none"
                        />
                    </div>

                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"PASSWORD"</label>
                        <input
                            type="password"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                                   border border-gray-600 focus:border-red-700 focus:outline-none"
                        />
                    </div>

                    {move || error.get().map(|msg| view! {
                        <p class="text-red-400 text-center text-sm">{msg}</p>
                    })}

                    <button
                        type="submit"
                        class="w-full bg-red-700 hover:bg-red-600 rounded-lg py-3 font-semibold
                               transition-colors mt-4"
                    >
                        "AUTHENTICATE"
                    </button>
                </form>
            </div>
        </div>
    }
}
