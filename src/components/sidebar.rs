//! Sidebar Navigation Component
//!
//! Navigation links plus the current-user blurb and sign-out.

use leptos::*;
use leptos_router::*;

use crate::model::initial;
use crate::state::session::use_session;

/// Sidebar navigation for authenticated pages
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.logout();
        navigate("/login", Default::default());
    };

    view! {
        <aside class="w-64 bg-gray-800 border-r border-gray-700 flex flex-col min-h-screen">
            // Logo and brand
            <A href="/dashboard" class="flex items-center space-x-3 px-6 h-16 border-b border-gray-700">
                <span class="text-2xl">"💸"</span>
                <span class="text-xl font-bold text-white">"SplitGroup"</span>
            </A>

            // Navigation links
            <nav class="flex-1 px-3 py-6 space-y-1">
                <SidebarLink href="/dashboard" icon="🏠" label="Dashboard" />
                <SidebarLink href="/groups/new" icon="➕" label="New Group" />
                <SidebarLink href="/profile" icon="👤" label="Profile" />
            </nav>

            // Current user and sign out
            <div class="px-4 py-4 border-t border-gray-700">
                {move || {
                    session.user.get().map(|user| view! {
                        <div class="flex items-center space-x-3 mb-3">
                            <div class="w-10 h-10 bg-indigo-600 rounded-full flex items-center justify-center font-semibold">
                                {initial(&user.name)}
                            </div>
                            <div class="min-w-0">
                                <p class="font-medium truncate">{user.name}</p>
                                <p class="text-sm text-gray-400 truncate">{user.email}</p>
                            </div>
                        </div>
                    })
                }}

                <button
                    on:click=sign_out
                    class="w-full px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg text-sm font-medium transition-colors"
                >
                    "Sign Out"
                </button>
            </div>
        </aside>
    }
}

/// Individual sidebar link
#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="flex items-center space-x-3 px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            <span>{icon}</span>
            <span>{label}</span>
        </A>
    }
}
