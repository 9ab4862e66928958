//! Navigation bar with scroll-spy highlighting.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::app::sections::{active_link, use_section_tracker};

/// In-page anchors, in page order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#projects", "Projects"),
    ("#certificates", "Certificates"),
    ("#contact", "Contact"),
];

/// Fixed top bar; the link for the section in view gets `active`.
#[component]
pub fn Nav(brand: &'static str) -> Element {
    let current = use_section_tracker();
    let hrefs = NAV_LINKS.map(|(href, _)| href);
    let active = active_link(&hrefs, current.read().as_deref());

    rsx! {
        nav { class: "fixed top-0 inset-x-0 z-30 backdrop-blur bg-white/80 dark:bg-slate-900/80 border-b border-slate-200 dark:border-slate-800",
            div { class: "max-w-6xl mx-auto px-4 h-16 flex items-center justify-between",
                a { href: "#home", class: "font-bold text-navy dark:text-white", "{brand}" }
                div { class: "flex items-center gap-6",
                    ul { class: "hidden md:flex gap-6 text-sm",
                        for (i, (href, label)) in NAV_LINKS.iter().enumerate() {
                            li {
                                a {
                                    class: if active == Some(i) { "nav-link active" } else { "nav-link" },
                                    href: "{href}",
                                    "{label}"
                                }
                            }
                        }
                    }
                    ThemeToggle {}
                }
            }
        }
    }
}
