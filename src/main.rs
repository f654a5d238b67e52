//! ChemViz Dashboard
//!
//! Chemical-process analytics dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Basic-auth login gating the dashboard
//! - CSV dataset upload to the analytics backend
//! - Summary metrics with bar/pie charts drawn on canvas
//! - Upload history table and PDF report download
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All computation (CSV parsing, aggregation, PDF generation)
//! happens in the analytics backend; the client calls its REST API and
//! reflects the results in the DOM.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
