//! Profile Page
//!
//! Shows the signed-in account. The edit form only updates local state;
//! the API exposes no profile-update endpoint.

use leptos::*;

use crate::components::Layout;
use crate::model::initial;
use crate::state::global::use_global_state;
use crate::state::session::use_session;

/// Profile page component
#[component]
pub fn Profile() -> impl IntoView {
    let state = use_global_state();
    let session = use_session();

    let (editing, set_editing) = create_signal(false);
    let (name, set_name) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());

    // Seed the edit form from the session user
    create_effect(move |_| {
        if let Some(user) = session.user.get() {
            set_name.set(user.name);
            set_email.set(user.email);
        }
    });

    let save = move |_| {
        state.show_success("Profile updated successfully!");
        set_editing.set(false);
    };

    view! {
        <Layout>
            <div class="p-8 max-w-2xl mx-auto">
                // Page header
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Profile"</h1>
                    <p class="text-gray-400">"Manage your account information"</p>
                </div>

                {move || {
                    let Some(user) = session.user.get() else {
                        return view! {
                            <div class="p-8 text-center">
                                <h2 class="text-2xl font-bold">"User not found"</h2>
                            </div>
                        }.into_view();
                    };

                    view! {
                        <div class="bg-gray-800 rounded-xl p-8">
                            // Identity header
                            <div class="flex items-center justify-between mb-6">
                                <div class="flex items-center space-x-4">
                                    <div class="w-16 h-16 bg-indigo-600 rounded-full flex items-center justify-center text-2xl font-bold">
                                        {initial(&user.name)}
                                    </div>
                                    <div>
                                        <h2 class="text-2xl font-bold">{user.name.clone()}</h2>
                                        <p class="text-gray-400">{user.email.clone()}</p>
                                    </div>
                                </div>

                                <button
                                    on:click=move |_| set_editing.update(|e| *e = !*e)
                                    class="px-4 py-2 text-gray-300 hover:text-white hover:bg-gray-700 rounded-lg transition-colors"
                                >
                                    {move || if editing.get() { "Cancel" } else { "Edit" }}
                                </button>
                            </div>

                            {move || {
                                if editing.get() {
                                    view! {
                                        <div class="space-y-5">
                                            <div>
                                                <label class="block text-sm text-gray-400 mb-2">"Full Name"</label>
                                                <input
                                                    type="text"
                                                    prop:value=move || name.get()
                                                    on:input=move |ev| set_name.set(event_target_value(&ev))
                                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                                           border border-gray-600 focus:border-indigo-500 focus:outline-none"
                                                />
                                            </div>

                                            <div>
                                                <label class="block text-sm text-gray-400 mb-2">"Email Address"</label>
                                                <input
                                                    type="email"
                                                    prop:value=move || email.get()
                                                    on:input=move |ev| set_email.set(event_target_value(&ev))
                                                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                                                           border border-gray-600 focus:border-indigo-500 focus:outline-none"
                                                />
                                            </div>

                                            <div class="flex space-x-4">
                                                <button
                                                    on:click=move |_| set_editing.set(false)
                                                    class="flex-1 py-3 px-4 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                                                >
                                                    "Cancel"
                                                </button>
                                                <button
                                                    on:click=save
                                                    class="flex-1 py-3 px-4 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-semibold transition-colors"
                                                >
                                                    "Save Changes"
                                                </button>
                                            </div>
                                        </div>
                                    }.into_view()
                                } else {
                                    view! {
                                        <div class="space-y-4">
                                            <InfoRow label="Full Name" value=name.get() />
                                            <InfoRow label="Email Address" value=email.get() />
                                        </div>
                                    }.into_view()
                                }
                            }}
                        </div>
                    }.into_view()
                }}
            </div>
        </Layout>
    }
}

/// Read-only account info row
#[component]
fn InfoRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-700 rounded-lg">
            <p class="text-sm text-gray-400">{label}</p>
            <p class="font-medium">{value}</p>
        </div>
    }
}
