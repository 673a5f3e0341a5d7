//! Add Expense Modal
//!
//! Form for recording a new expense in a group: title, amount, payer, and
//! the members the amount is split among.

use leptos::*;

use crate::api::client;
use crate::model::{initial, Group};
use crate::state::global::use_global_state;
use crate::validate::validate_expense;

/// Modal dialog for adding an expense to a group
#[component]
pub fn AddExpenseModal(
    group: Group,
    on_close: impl Fn() + 'static + Clone,
    on_added: impl Fn() + 'static + Clone,
) -> impl IntoView {
    let state = use_global_state();

    let (title, set_title) = create_signal(String::new());
    let (amount, set_amount) = create_signal(String::new());
    let (paid_by, set_paid_by) = create_signal(String::new());
    let (split_among, set_split_among) = create_signal(Vec::<String>::new());
    let (submitting, set_submitting) = create_signal(false);

    let group_id = group.id.clone();
    let members = group.members;

    let toggle_split = move |member_id: String| {
        set_split_among.update(|split| {
            if split.contains(&member_id) {
                split.retain(|id| id != &member_id);
            } else {
                split.push(member_id);
            }
        });
    };

    let on_close_for_x = on_close.clone();
    let on_close_for_cancel = on_close;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let draft = match validate_expense(
            &title.get(),
            &amount.get(),
            &paid_by.get(),
            &split_among.get(),
        ) {
            Ok(draft) => draft,
            Err(message) => {
                state.show_error(&message);
                return;
            }
        };

        set_submitting.set(true);

        let group_id = group_id.clone();
        let on_added = on_added.clone();
        spawn_local(async move {
            match client::create_expense(&group_id, &draft).await {
                Ok(_expense) => {
                    state.show_success("Expense added successfully!");
                    on_added();
                }
                Err(e) => {
                    state.show_error(e.user_message());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50">
            <div class="bg-gray-800 rounded-xl w-full max-w-md mx-4 max-h-[90vh] overflow-y-auto">
                // Header
                <div class="flex items-center justify-between p-6 border-b border-gray-700">
                    <h2 class="text-xl font-semibold">"Add Expense"</h2>
                    <button
                        on:click=move |_| on_close_for_x()
                        disabled=move || submitting.get()
                        class="text-gray-400 hover:text-white"
                    >
                        "✕"
                    </button>
                </div>

                <form on:submit=on_submit class="p-6 space-y-5">
                    // Title
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Expense Title"</label>
                        <input
                            type="text"
                            placeholder="e.g., Dinner at restaurant"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-indigo-500 focus:outline-none"
                        />
                    </div>

                    // Amount
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Amount"</label>
                        <input
                            type="number"
                            placeholder="0.00"
                            step="0.01"
                            min="0"
                            prop:value=move || amount.get()
                            on:input=move |ev| set_amount.set(event_target_value(&ev))
                            disabled=move || submitting.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-indigo-500 focus:outline-none"
                        />
                    </div>

                    // Paid by
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Paid By"</label>
                        <select
                            on:change=move |ev| set_paid_by.set(event_target_value(&ev))
                            prop:value=move || paid_by.get()
                            disabled=move || submitting.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-indigo-500 focus:outline-none"
                        >
                            <option value="">"Select who paid"</option>
                            {members.iter().map(|member| {
                                view! {
                                    <option value=member.id.clone()>{member.name.clone()}</option>
                                }
                            }).collect_view()}
                        </select>
                    </div>

                    // Split among
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Split Among"</label>
                        <p class="text-sm text-gray-500 mb-3">
                            "Select the people who should split this expense"
                        </p>

                        <div class="space-y-2 max-h-40 overflow-y-auto">
                            {members.iter().map(|member| {
                                let id = member.id.clone();
                                let id_for_check = member.id.clone();
                                let toggle = toggle_split.clone();

                                view! {
                                    <label class="flex items-center p-3 bg-gray-700 rounded-lg cursor-pointer hover:bg-gray-600 transition-colors">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || split_among.get().contains(&id_for_check)
                                            on:change=move |_| toggle(id.clone())
                                            disabled=move || submitting.get()
                                            class="mr-3 w-4 h-4"
                                        />
                                        <div class="flex items-center space-x-3">
                                            <div class="w-8 h-8 bg-indigo-600 rounded-full flex items-center justify-center text-sm font-medium">
                                                {initial(&member.name)}
                                            </div>
                                            <span class="font-medium">{member.name.clone()}</span>
                                        </div>
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </div>

                    // Buttons
                    <div class="flex space-x-3 pt-2">
                        <button
                            type="button"
                            on:click=move |_| on_close_for_cancel()
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-gray-700 hover:bg-gray-600 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <button
                            type="submit"
                            disabled=move || submitting.get()
                            class="flex-1 px-4 py-3 bg-indigo-600 hover:bg-indigo-700 disabled:bg-gray-600
                                   rounded-lg font-semibold transition-colors flex items-center justify-center space-x-2"
                        >
                            {move || if submitting.get() {
                                view! {
                                    <div class="loading-spinner w-5 h-5" />
                                    <span>"Adding..."</span>
                                }.into_view()
                            } else {
                                view! {
                                    <span>"Add Expense"</span>
                                }.into_view()
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
