//! Group Details Page
//!
//! Fetches a group and its expenses, shows totals, per-member paid amounts,
//! net balances with suggested settlements, and the expense list.

use leptos::*;
use leptos_router::*;

use crate::api::client;
use crate::balance::{group_total, net_balances, paid_total, round_cents, suggest_settlements};
use crate::components::{AddExpenseModal, Layout, Loading};
use crate::model::{format_date, initial, Expense, Group};
use crate::state::global::use_global_state;

/// Balances within a cent of zero count as settled for display
const SETTLED_EPSILON: f64 = 0.01;

/// Group detail page component
#[component]
pub fn GroupDetails() -> impl IntoView {
    let state = use_global_state();
    let params = use_params_map();

    let (group, set_group) = create_signal(None::<Group>);
    let (expenses, set_expenses) = create_signal(Vec::<Expense>::new());
    let (loading, set_loading) = create_signal(true);
    let (show_add_expense, set_show_add_expense) = create_signal(false);

    let group_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    // Fetch group and expenses on mount
    create_effect(move |_| {
        let id = group_id();
        if id.is_empty() {
            return;
        }

        spawn_local(async move {
            match client::fetch_group(&id).await {
                Ok(fetched) => {
                    set_group.set(Some(fetched));
                }
                Err(e) => {
                    state.show_error("Failed to fetch group details");
                    web_sys::console::error_1(&format!("Failed to fetch group: {}", e).into());
                }
            }

            match client::fetch_expenses(&id).await {
                Ok(fetched) => {
                    set_expenses.set(fetched);
                }
                Err(_) => {
                    state.show_error("Failed to fetch expenses");
                }
            }

            set_loading.set(false);
        });
    });

    // Refetch expenses after one is added through the modal
    let on_expense_added = move || {
        set_show_add_expense.set(false);

        let id = group_id();
        spawn_local(async move {
            match client::fetch_expenses(&id).await {
                Ok(fetched) => {
                    set_expenses.set(fetched);
                }
                Err(_) => {
                    state.show_error("Failed to fetch expenses");
                }
            }
        });
    };

    view! {
        <Layout>
            {move || {
                if loading.get() {
                    return view! {
                        <div class="min-h-screen flex items-center justify-center">
                            <Loading />
                        </div>
                    }.into_view();
                }

                let Some(group) = group.get() else {
                    return view! {
                        <div class="p-8 text-center">
                            <h1 class="text-2xl font-bold">"Group not found"</h1>
                        </div>
                    }.into_view();
                };

                let expenses = expenses.get();
                let total = group_total(&expenses);
                let on_added = on_expense_added.clone();

                let modal_group = group.clone();
                let members_group = group.clone();
                let balances_group = group.clone();

                view! {
                    <div class="p-8 space-y-8">
                        // Page header
                        <div class="flex items-center justify-between">
                            <div>
                                <h1 class="text-3xl font-bold mb-1">{group.name.clone()}</h1>
                                <p class="text-gray-400">
                                    "Created " {format_date(&group.created_at)}
                                </p>
                            </div>

                            <button
                                on:click=move |_| set_show_add_expense.set(true)
                                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                            >
                                "+ Add Expense"
                            </button>
                        </div>

                        // Stat tiles
                        <div class="grid md:grid-cols-3 gap-4">
                            <StatTile icon="💰" label="Total Spent" value=format!("${:.2}", total) />
                            <StatTile icon="🧾" label="Expenses" value=expenses.len().to_string() />
                            <StatTile icon="👥" label="Members" value=group.members.len().to_string() />
                        </div>

                        <div class="grid lg:grid-cols-2 gap-8">
                            // Members with paid totals
                            <MembersCard group=members_group expenses=expenses.clone() />

                            // Net balances and settlements
                            <BalancesCard group=balances_group expenses=expenses.clone() />
                        </div>

                        // Expense list
                        <section class="bg-gray-800 rounded-xl p-6">
                            <h2 class="text-xl font-semibold mb-4">"Recent Expenses"</h2>

                            {if expenses.is_empty() {
                                view! {
                                    <div class="text-center py-8">
                                        <div class="text-3xl mb-2">"🧾"</div>
                                        <p class="text-gray-400 mb-3">"No expenses yet"</p>
                                        <button
                                            on:click=move |_| set_show_add_expense.set(true)
                                            class="text-indigo-400 hover:text-indigo-300 font-medium"
                                        >
                                            "Add the first expense"
                                        </button>
                                    </div>
                                }.into_view()
                            } else {
                                view! {
                                    <div class="space-y-3 max-h-96 overflow-y-auto">
                                        {expenses.iter().map(|expense| {
                                            view! { <ExpenseRow expense=expense.clone() /> }
                                        }).collect_view()}
                                    </div>
                                }.into_view()
                            }}
                        </section>

                        // Add expense modal
                        {move || {
                            if show_add_expense.get() {
                                let on_added = on_added.clone();
                                view! {
                                    <AddExpenseModal
                                        group=modal_group.clone()
                                        on_close=move || set_show_add_expense.set(false)
                                        on_added=on_added
                                    />
                                }.into_view()
                            } else {
                                view! {}.into_view()
                            }
                        }}
                    </div>
                }.into_view()
            }}
        </Layout>
    }
}

/// Summary tile with icon
#[component]
fn StatTile(
    icon: &'static str,
    label: &'static str,
    value: String,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-5 border border-gray-700 flex items-center space-x-4">
            <div class="text-3xl">{icon}</div>
            <div>
                <div class="text-2xl font-bold">{value}</div>
                <div class="text-sm text-gray-400">{label}</div>
            </div>
        </div>
    }
}

/// Members list with how much each has paid
#[component]
fn MembersCard(group: Group, expenses: Vec<Expense>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Members"</h2>

            <div class="space-y-3">
                {group.members.iter().map(|member| {
                    let paid = paid_total(&expenses, &member.id);
                    view! {
                        <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg">
                            <div class="flex items-center space-x-3">
                                <div class="w-10 h-10 bg-indigo-600 rounded-full flex items-center justify-center font-medium">
                                    {initial(&member.name)}
                                </div>
                                <div>
                                    <p class="font-medium">{member.name.clone()}</p>
                                    <p class="text-sm text-gray-400">{member.email.clone()}</p>
                                </div>
                            </div>
                            <div class="text-right">
                                <p class="font-semibold">{format!("${:.2}", paid)}</p>
                                <p class="text-sm text-gray-400">"paid"</p>
                            </div>
                        </div>
                    }
                }).collect_view()}
            </div>
        </section>
    }
}

/// Net balances plus the suggested transfers that settle them
#[component]
fn BalancesCard(group: Group, expenses: Vec<Expense>) -> impl IntoView {
    let balances = net_balances(&group.members, &expenses);
    let transfers = suggest_settlements(&balances);

    let name_for = {
        let members = group.members.clone();
        move |id: &str| {
            members
                .iter()
                .find(|m| m.id == id)
                .map(|m| m.name.clone())
                .unwrap_or_else(|| id.to_string())
        }
    };

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Balances"</h2>

            <div class="space-y-2 mb-6">
                {group.members.iter().map(|member| {
                    let balance = round_cents(*balances.get(&member.id).unwrap_or(&0.0));
                    let (text, class) = if balance > SETTLED_EPSILON {
                        (format!("is owed ${:.2}", balance), "text-green-400")
                    } else if balance < -SETTLED_EPSILON {
                        (format!("owes ${:.2}", -balance), "text-red-400")
                    } else {
                        ("settled up".to_string(), "text-gray-400")
                    };

                    view! {
                        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                            <span class="font-medium">{member.name.clone()}</span>
                            <span class=format!("text-sm {}", class)>{text}</span>
                        </div>
                    }
                }).collect_view()}
            </div>

            <h3 class="font-medium text-gray-300 mb-2">"Suggested Settlements"</h3>
            {if transfers.is_empty() {
                view! {
                    <p class="text-sm text-gray-400">"Everyone is settled up"</p>
                }.into_view()
            } else {
                view! {
                    <div class="space-y-2">
                        {transfers.iter().map(|transfer| {
                            view! {
                                <div class="flex items-center justify-between p-3 bg-gray-700 rounded-lg text-sm">
                                    <span>
                                        {name_for(&transfer.from)}
                                        " pays "
                                        {name_for(&transfer.to)}
                                    </span>
                                    <span class="font-semibold">{format!("${:.2}", transfer.amount)}</span>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </section>
    }
}

/// One expense row
#[component]
fn ExpenseRow(expense: Expense) -> impl IntoView {
    let split_names = expense
        .split_among
        .iter()
        .map(|m| m.name.clone())
        .collect::<Vec<_>>()
        .join(", ");

    view! {
        <div class="p-4 border border-gray-700 rounded-lg">
            <div class="flex items-center justify-between mb-2">
                <h3 class="font-medium">{expense.title.clone()}</h3>
                <span class="font-bold">{format!("${:.2}", expense.amount)}</span>
            </div>

            <div class="flex items-center justify-between text-sm text-gray-400">
                <span>"Paid by " {expense.paid_by.name.clone()}</span>
                <span>{format_date(&expense.created_at)}</span>
            </div>

            <p class="text-sm text-gray-400 mt-2">
                "Split among: " {split_names}
            </p>
        </div>
    }
}
