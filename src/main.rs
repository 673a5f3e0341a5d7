//! SplitGroup Web Client
//!
//! Shared-expense tracking for groups, built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the SplitGroup REST API over HTTP; the session
//! token persists in browser local storage.

use leptos::*;

mod api;
mod app;
mod balance;
mod components;
mod model;
mod pages;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
