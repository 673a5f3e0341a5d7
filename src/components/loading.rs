//! Loading Component
//!
//! Loading spinners and skeleton states.

use leptos::*;

/// Full-page loading spinner
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12">
            <div class="loading-spinner w-8 h-8" />
        </div>
    }
}

/// Skeleton loader for card lists
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4 animate-pulse">
            {(0..count).map(|_| view! {
                <div class="bg-gray-800 rounded-xl h-24" />
            }).collect_view()}
        </div>
    }
}
