//! Landing Page
//!
//! Public marketing page with sign-in and sign-up calls to action.

use leptos::*;
use leptos_router::*;

/// Landing page component
#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            // Header
            <header class="border-b border-gray-800">
                <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"💸"</span>
                        <span class="text-xl font-bold">"SplitGroup"</span>
                    </div>
                    <div class="flex items-center space-x-2">
                        <A
                            href="/login"
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-800 transition-colors"
                        >
                            "Sign In"
                        </A>
                        <A
                            href="/register"
                            class="px-4 py-2 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
                        >
                            "Get Started"
                        </A>
                    </div>
                </div>
            </header>

            // Hero
            <main class="flex-1 container mx-auto px-4 flex flex-col items-center justify-center text-center">
                <h1 class="text-5xl font-bold mb-4">"Split expenses, not friendships"</h1>
                <p class="text-xl text-gray-400 max-w-xl mb-8">
                    "Create groups, track who paid for what, and settle up with a clear
                     view of every balance."
                </p>
                <A
                    href="/register"
                    class="px-8 py-4 bg-indigo-600 hover:bg-indigo-700 rounded-lg text-lg font-semibold transition-colors"
                >
                    "Create your first group"
                </A>

                // Feature blurbs
                <div class="grid md:grid-cols-3 gap-6 mt-16 max-w-4xl w-full pb-16">
                    <FeatureCard
                        icon="👥"
                        title="Shared groups"
                        text="Invite friends by email and keep every trip or household in one place."
                    />
                    <FeatureCard
                        icon="🧾"
                        title="Track expenses"
                        text="Log who paid and who shares each expense in seconds."
                    />
                    <FeatureCard
                        icon="⚖️"
                        title="Settle up"
                        text="See net balances and the fewest payments that clear them."
                    />
                </div>
            </main>
        </div>
    }
}

/// Feature blurb card
#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    text: &'static str,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-left">
            <div class="text-3xl mb-3">{icon}</div>
            <h3 class="font-semibold mb-2">{title}</h3>
            <p class="text-gray-400 text-sm">{text}</p>
        </div>
    }
}
