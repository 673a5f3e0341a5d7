//! Dashboard Page
//!
//! Lists the signed-in user's groups, with an empty state prompting the
//! first group creation.

use leptos::*;
use leptos_router::*;

use crate::api::client;
use crate::components::{Layout, ListSkeleton};
use crate::model::{format_date, initial, Group};
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();

    let (groups, set_groups) = create_signal(Vec::<Group>::new());
    let (loading, set_loading) = create_signal(true);

    // Fetch groups on mount
    create_effect(move |_| {
        spawn_local(async move {
            match client::fetch_groups().await {
                Ok(fetched) => {
                    set_groups.set(fetched);
                }
                Err(e) => {
                    state.show_error("Failed to fetch groups");
                    web_sys::console::error_1(&format!("Failed to fetch groups: {}", e).into());
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <Layout>
            <div class="p-8 space-y-8">
                // Page header
                <div class="flex items-center justify-between">
                    <div>
                        <h1 class="text-3xl font-bold">"Dashboard"</h1>
                        <p class="text-gray-400 mt-1">"Your groups at a glance"</p>
                    </div>

                    <A
                        href="/groups/new"
                        class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                    >
                        "+ New Group"
                    </A>
                </div>

                // Stat tiles
                <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                    <StatCard
                        label="Groups"
                        value=Signal::derive(move || groups.get().len().to_string())
                    />
                    <StatCard
                        label="People"
                        value=Signal::derive(move || {
                            groups.get().iter().map(|g| g.members.len()).sum::<usize>().to_string()
                        })
                    />
                </div>

                // Groups list
                {move || {
                    if loading.get() {
                        view! { <ListSkeleton count=3 /> }.into_view()
                    } else {
                        let groups = groups.get();
                        if groups.is_empty() {
                            view! {
                                <div class="text-center py-16 bg-gray-800 rounded-xl">
                                    <div class="text-4xl mb-3">"👥"</div>
                                    <p class="text-gray-400 mb-4">"No groups yet"</p>
                                    <A
                                        href="/groups/new"
                                        class="text-indigo-400 hover:text-indigo-300 font-medium"
                                    >
                                        "Create your first group"
                                    </A>
                                </div>
                            }.into_view()
                        } else {
                            view! {
                                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                                    {groups.into_iter().map(|group| {
                                        view! { <GroupCard group=group /> }
                                    }).collect_view()}
                                </div>
                            }.into_view()
                        }
                    }
                }}
            </div>
        </Layout>
    }
}

/// Summary tile
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <div class="text-sm text-gray-400 mt-1">{label}</div>
        </div>
    }
}

/// Single group card linking to its detail page
#[component]
fn GroupCard(group: Group) -> impl IntoView {
    let href = format!("/groups/{}", group.id);
    let member_count = group.members.len();

    view! {
        <A
            href=href
            class="block bg-gray-800 rounded-xl p-5 border border-gray-700 hover:border-gray-600 transition-colors"
        >
            <div class="flex items-center space-x-3 mb-3">
                <div class="w-10 h-10 bg-indigo-600 rounded-lg flex items-center justify-center font-bold">
                    {initial(&group.name)}
                </div>
                <h3 class="font-semibold truncate">{group.name}</h3>
            </div>

            <div class="flex items-center justify-between text-sm text-gray-400">
                <span>
                    {member_count}
                    {if member_count == 1 { " member" } else { " members" }}
                </span>
                <span>{format_date(&group.created_at)}</span>
            </div>
        </A>
    }
}
