//! MonApp - Landing Page Rust/Leptos Application
//!
//! A WebAssembly landing page introducing MonApp: static marketing
//! content rendered once, with in-page anchor navigation and no backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, nav anchors, CTA)                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LandingPage                                                 │
//! │  ├── Hero (headline, sub-headline, CTA buttons)             │
//! │  ├── Features (#features, three cards)                      │
//! │  └── CallToAction (#about)                                  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer (#contact, link columns, copyright)                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Brand constants and section fragment identifiers
//! - [`types`] - Content descriptors (NavLink, Feature, FooterColumn)
//! - [`content`] - The constant display copy
//! - [`components`] - UI components (Header, Hero, Features, ...)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod content;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Feature, FooterColumn, NavLink};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 MonApp Landing - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::BRAND/>
        <Router>
            <Routes>
                <Route path="/" view=LandingPage/>
            </Routes>
        </Router>
    }
}

/// The single page: five static blocks in fixed top-to-bottom order.
#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Header/>

        <main class="container">
            <Hero/>
            <Features/>
            <CallToAction/>
        </main>

        <Footer/>
    }
}
