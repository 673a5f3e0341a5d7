//! Create Group Page
//!
//! Group name plus dynamic invitee email rows; a successful creation
//! navigates to the new group's detail page.

use leptos::*;
use leptos_router::*;

use crate::api::client;
use crate::components::Layout;
use crate::state::global::use_global_state;
use crate::validate::validate_group;

/// Create-group page component
#[component]
pub fn CreateGroup() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let (name, set_name) = create_signal(String::new());
    let (member_emails, set_member_emails) = create_signal(vec![String::new()]);
    let (submitting, set_submitting) = create_signal(false);

    let add_email_row = move |_| {
        set_member_emails.update(|emails| emails.push(String::new()));
    };

    let remove_email_row = move |index: usize| {
        set_member_emails.update(|emails| {
            if emails.len() > 1 {
                emails.remove(index);
            }
        });
    };

    let update_email = move |index: usize, value: String| {
        set_member_emails.update(|emails| {
            if let Some(slot) = emails.get_mut(index) {
                *slot = value;
            }
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = match validate_group(&name.get(), &member_emails.get()) {
            Ok(draft) => draft,
            Err(message) => {
                state.show_error(&message);
                return;
            }
        };

        set_submitting.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match client::create_group(&draft).await {
                Ok(group) => {
                    state.show_success("Group created successfully!");
                    navigate(&format!("/groups/{}", group.id), Default::default());
                }
                Err(e) => {
                    state.show_error(e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Layout>
            <div class="p-8 max-w-2xl mx-auto">
                // Page header
                <div class="mb-8">
                    <h1 class="text-3xl font-bold mb-2">"Create New Group"</h1>
                    <p class="text-gray-400">"Start a new group to share expenses with friends"</p>
                </div>

                <div class="bg-gray-800 rounded-xl p-8">
                    <form on:submit=on_submit.clone() class="space-y-6">
                        // Group name
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Group Name"</label>
                            <input
                                type="text"
                                placeholder="e.g., Weekend Trip, Roommates, Office Lunch"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                                disabled=move || submitting.get()
                                class="w-full bg-gray-700 rounded-lg px-4 py-3
                                       border border-gray-600 focus:border-indigo-500 focus:outline-none"
                            />
                        </div>

                        // Member emails
                        <div>
                            <label class="block text-sm text-gray-400 mb-2">"Member Emails"</label>
                            <p class="text-sm text-gray-500 mb-4">
                                "Add the email addresses of people you want to include in this group"
                            </p>

                            <div class="space-y-3">
                                // Keyed by row index so typing does not rebuild the input
                                <For
                                    each=move || 0..member_emails.get().len()
                                    key=|index| *index
                                    children=move |index| {
                                        view! {
                                            <div class="flex items-center space-x-3">
                                                <input
                                                    type="email"
                                                    placeholder="friend@example.com"
                                                    prop:value=move || {
                                                        member_emails.with(|emails| {
                                                            emails.get(index).cloned().unwrap_or_default()
                                                        })
                                                    }
                                                    on:input=move |ev| update_email(index, event_target_value(&ev))
                                                    disabled=move || submitting.get()
                                                    class="flex-1 bg-gray-700 rounded-lg px-4 py-3
                                                           border border-gray-600 focus:border-indigo-500 focus:outline-none"
                                                />

                                                {move || {
                                                    (member_emails.with(Vec::len) > 1).then(|| view! {
                                                        <button
                                                            type="button"
                                                            on:click=move |_| remove_email_row(index)
                                                            disabled=move || submitting.get()
                                                            class="p-2 text-red-400 hover:text-red-300 rounded-lg"
                                                        >
                                                            "✕"
                                                        </button>
                                                    })
                                                }}
                                            </div>
                                        }
                                    }
                                />
                            </div>

                            <button
                                type="button"
                                on:click=add_email_row
                                disabled=move || submitting.get()
                                class="mt-3 px-4 py-2 text-gray-300 hover:text-white hover:bg-gray-700 rounded-lg transition-colors"
                            >
                                "+ Add another email"
                            </button>
                        </div>

                        // Buttons
                        <div class="flex space-x-4 pt-2">
                            <A
                                href="/dashboard"
                                class="flex-1 py-3 px-4 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium text-center transition-colors"
                            >
                                "Cancel"
                            </A>

                            <button
                                type="submit"
                                disabled=move || submitting.get()
                                class="flex-1 py-3 px-4 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                                       rounded-lg font-semibold transition-colors flex items-center justify-center space-x-2"
                            >
                                {move || if submitting.get() {
                                    view! {
                                        <div class="loading-spinner w-5 h-5" />
                                        <span>"Creating..."</span>
                                    }.into_view()
                                } else {
                                    view! {
                                        <span>"Create Group"</span>
                                    }.into_view()
                                }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Layout>
    }
}
