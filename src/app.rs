//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{CreateGroup, Dashboard, GroupDetails, Landing, Login, Profile, Register};
use crate::state::global::provide_global_state;
use crate::state::session::{provide_session, use_session};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global and session state to all components
    provide_global_state();
    provide_session();

    // Restore any persisted session before guarded pages decide to redirect
    let session = use_session();
    spawn_local(async move {
        session.restore().await;
    });

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/login" view=Login />
                <Route path="/register" view=Register />
                <Route path="/dashboard" view=Dashboard />
                <Route path="/groups/new" view=CreateGroup />
                <Route path="/groups/:id" view=GroupDetails />
                <Route path="/profile" view=Profile />
                <Route path="/*any" view=NotFound />
            </Routes>

            // Toast notifications
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col items-center justify-center text-center">
            <div class="text-6xl mb-4">"🔍"</div>
            <h1 class="text-3xl font-bold mb-2">"Page Not Found"</h1>
            <p class="text-gray-400 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-indigo-600 hover:bg-indigo-700 rounded-lg font-medium transition-colors"
            >
                "Back to SplitGroup"
            </A>
        </div>
    }
}
