//! Registration Page
//!
//! Account creation form; success signs the user in and navigates to the
//! dashboard.

use leptos::*;
use leptos_router::*;

use crate::state::global::use_global_state;
use crate::state::session::use_session;
use crate::validate::validate_registration;

/// Registration page component
#[component]
pub fn Register() -> impl IntoView {
    let state = use_global_state();
    let session = use_session();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();

        if let Err(message) = validate_registration(&name_value, &email_value, &password_value) {
            state.show_error(&message);
            return;
        }

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match session
                .register(&name_value, &email_value, &password_value)
                .await
            {
                Ok(()) => {
                    state.show_success("Account created!");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    state.show_error(e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex items-center justify-center p-4">
            <div class="w-full max-w-md">
                // Header
                <div class="text-center mb-8">
                    <div class="text-4xl mb-3">"💸"</div>
                    <h1 class="text-3xl font-bold mb-2">"Create Account"</h1>
                    <p class="text-gray-400">"Start splitting expenses with your friends"</p>
                </div>

                // Form card
                <div class="bg-gray-800 rounded-xl p-8">
                    <form on:submit=on_submit class="space-y-5">
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                            <input
                                type="text"
                                placeholder="Enter your full name"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-indigo-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Email Address"</label>
                            <input
                                type="email"
                                placeholder="Enter your email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-indigo-500 focus:outline-none"
                            />
                        </div>

                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Password"</label>
                            <input
                                type="password"
                                placeholder="At least 6 characters"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-indigo-500 focus:outline-none"
                            />
                        </div>

                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="w-full py-3 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                                   rounded-lg font-semibold transition-colors flex items-center justify-center space-x-2"
                        >
                            {move || if submitting.get() {
                                view! {
                                    <div class="loading-spinner w-5 h-5" />
                                    <span>"Creating account..."</span>
                                }.into_view()
                            } else {
                                view! {
                                    <span>"Sign Up"</span>
                                }.into_view()
                            }}
                        </button>
                    </form>

                    <div class="mt-6 text-center text-gray-400">
                        "Already have an account? "
                        <A href="/login" class="text-indigo-400 hover:text-indigo-300 font-medium">
                            "Sign in here"
                        </A>
                    </div>
                </div>
            </div>
        </div>
    }
}
