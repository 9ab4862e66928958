//! Dark/light toggle button in the navigation bar.

use dioxus::prelude::*;

use crate::app::theme::use_theme;

/// Shows the icon of the theme a click would switch to.
#[component]
pub fn ThemeToggle() -> Element {
    let theme = use_theme();
    let icons = theme.get().icons();

    rsx! {
        button {
            id: "theme-toggle",
            r#type: "button",
            class: "p-2 rounded-lg text-slate-500 dark:text-slate-400 hover:bg-slate-100 dark:hover:bg-slate-800",
            aria_label: "Toggle dark mode",
            onclick: move |_| theme.toggle(),
            span {
                id: "theme-toggle-dark-icon",
                class: if icons.dark_icon_hidden { "hidden" } else { "" },
                "\u{263E}"
            }
            span {
                id: "theme-toggle-light-icon",
                class: if icons.light_icon_hidden { "hidden" } else { "" },
                "\u{2600}"
            }
        }
    }
}
