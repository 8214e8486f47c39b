//! Income Statement Intake - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that accepts one `.xlsx` sales ledger, submits it to
//! the conversion endpoint, and shows the resulting income statement totals.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IntakePanel                                                 │
//! │  ├── drop zone + hidden file input      (idle)               │
//! │  ├── ProgressSection                    (in-flight)          │
//! │  └── ResultSection                      (complete)           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Wire types, phases, errors
//! - [`intake`] - Platform-neutral widget logic (validation, state, rendering)
//! - [`components`] - Leptos markup and the signal-backed view binding
//! - [`services`] - Backend communication (upload)

use leptos::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod intake;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // API
    UploadResponse, StatementResult, ConvertedStatement,
    // UI
    Phase, TotalSlot,
    // Errors
    AppError, AppResult,
};

// Core
pub use intake::{IntakeView, IntakeWidget, NamedFile, UploadState};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install logging and mount the application on `<body>`.
///
/// Exported so a host page can start the widget from JavaScript.
#[wasm_bindgen]
pub fn mount_intake() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Income Statement Intake - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <IntakePanel/>
        </div>

        <Footer/>
    }
}
