//! Layout Component
//!
//! Shell for authenticated pages: sidebar plus content area. Visitors with
//! no session are sent to the login page once startup restore settles.

use leptos::*;
use leptos_router::use_navigate;

use crate::components::{Loading, Sidebar};
use crate::state::session::use_session;

/// Authenticated page shell
#[component]
pub fn Layout(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    create_effect(move |_| {
        if !session.loading.get() && session.user.with(Option::is_none) {
            navigate("/login", Default::default());
        }
    });

    view! {
        {move || {
            if session.loading.get() {
                view! {
                    <div class="min-h-screen bg-gray-900 text-white flex items-center justify-center">
                        <Loading />
                    </div>
                }.into_view()
            } else if session.user.with(Option::is_none) {
                // Redirect effect is about to fire
                view! {}.into_view()
            } else {
                view! {
                    <div class="min-h-screen bg-gray-900 text-white flex">
                        <Sidebar />
                        <main class="flex-1 overflow-y-auto">
                            {children()}
                        </main>
                    </div>
                }.into_view()
            }
        }}
    }
}
