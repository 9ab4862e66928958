//! Layout component wrapping the page with Tailwind CSS and shared overlays.

use dioxus::prelude::*;

use super::modal::Modal;
use super::nav::Nav;
use super::toast::Toast;
use crate::app::theme::THEME_BOOTSTRAP_SCRIPT;

/// Tailwind CDN configuration: class-based dark mode plus the site palette.
const TAILWIND_CONFIG: &str = r#"
tailwind.config = {
    darkMode: 'class',
    theme: {
        extend: {
            colors: {
                navy: '#03045e',
                ocean: '#0077b6',
                sky: '#90e0ef',
            },
        },
    },
};
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Name shown in the navigation bar
    pub brand: &'static str,
    /// Page content
    pub children: Element,
}

/// Main layout component wrapping the page.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("PORTFOLIO_VERSION");
    let git_sha = env!("PORTFOLIO_GIT_SHA");

    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{props.title}" }
        // Must run before first paint to avoid a light flash in dark mode
        document::Script { "{THEME_BOOTSTRAP_SCRIPT}" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { "{TAILWIND_CONFIG}" }
        document::Stylesheet { href: asset!("/public/main.css") }

        Nav { brand: props.brand }
        main { class: "pt-16 bg-slate-50 dark:bg-slate-900 text-slate-800 dark:text-slate-200 min-h-screen",
            {props.children}
        }
        footer { class: "text-center py-6 text-xs text-slate-500 dark:text-slate-400 bg-slate-50 dark:bg-slate-900",
            small { "v{version} ({git_sha})" }
        }
        Modal {}
        Toast {}
    }
}
