//! Dioxus fullstack application entry point.
//!
//! This module provides the main App component that serves as the root
//! of the Dioxus application with client-side hydration.

use dioxus::prelude::*;

pub mod api;
pub mod chat;
pub mod clipboard;
pub mod components;
pub mod contact;
pub mod content;
pub mod csrf;
pub mod dom;
pub mod pages;
pub mod projects;
pub mod sections;
pub mod slider;
pub mod theme;

use components::modal::use_modal_provider;
use components::toast::use_toast_provider;
use pages::Portfolio;
use theme::use_theme_provider;

/// Root app component with routing
#[component]
pub fn App() -> Element {
    // Initialize theme context at app root (handles localStorage + DOM class)
    use_theme_provider();

    // Overlays shared by the contact form and the copy buttons
    use_modal_provider();
    use_toast_provider();

    rsx! {
        Router::<Route> {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Portfolio {},
}
