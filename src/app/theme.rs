//! Theme management with localStorage persistence.
//!
//! The stored preference is applied to `<html class="dark">` by an inline
//! script before first paint; the context then reads its initial state back
//! from the root class on mount.

use dioxus::prelude::*;

/// localStorage key holding `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "color-theme";

/// Class on the root element that switches Tailwind into dark mode.
pub const DARK_CLASS: &str = "dark";

/// Theme options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    #[cfg(test)]
    fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn from_root_class(has_dark_class: bool) -> Self {
        if has_dark_class {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    /// Icon visibility: the icon shown is the theme a click switches to.
    pub fn icons(self) -> ThemeIcons {
        ThemeIcons {
            dark_icon_hidden: self.is_dark(),
            light_icon_hidden: !self.is_dark(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeIcons {
    pub dark_icon_hidden: bool,
    pub light_icon_hidden: bool,
}

/// Where the preference is persisted. It is only ever read back by the
/// bootstrap script, before the app starts.
pub trait PreferenceStore {
    fn save(&mut self, theme: ThemePreference);
}

/// Flip the preference and persist the new value.
pub fn toggle_with<S: PreferenceStore>(current: ThemePreference, store: &mut S) -> ThemePreference {
    let next = current.toggled();
    store.save(next);
    next
}

/// Global theme state shared via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub current: Signal<ThemePreference>,
}

impl ThemeContext {
    pub fn get(&self) -> ThemePreference {
        (self.current)()
    }

    /// Flip, persist, and apply to the DOM in one step.
    pub fn toggle(&self) {
        let mut current = self.current;

        #[cfg(target_arch = "wasm32")]
        let next = {
            let next = toggle_with(current(), &mut LocalStorage);
            apply_theme_to_dom(next);
            next
        };
        #[cfg(not(target_arch = "wasm32"))]
        let next = current().toggled();

        tracing::debug!("Theme switched to {}", next.as_str());
        current.set(next);
    }
}

/// Initialize theme context provider - call once at app root
pub fn use_theme_provider() {
    let current = use_signal(ThemePreference::default);

    let ctx = ThemeContext { current };
    use_context_provider(|| ctx);

    // Client-side only: adopt whatever the bootstrap script put on the root
    #[cfg(target_arch = "wasm32")]
    {
        let mut current = current;
        use_effect(move || {
            current.set(ThemePreference::from_root_class(root_has_dark_class()));
        });
    }
}

/// Get theme context - use in any component
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>()
}

/// Inline script run before first paint: stored preference, else the
/// system color scheme, applied to the root class.
pub const THEME_BOOTSTRAP_SCRIPT: &str = r#"
(function(){
    var t = localStorage.getItem('color-theme');
    var dark = t ? t === 'dark' : window.matchMedia('(prefers-color-scheme: dark)').matches;
    document.documentElement.classList.toggle('dark', dark);
})();
"#;

// ============ WASM-only helpers ============

#[cfg(target_arch = "wasm32")]
struct LocalStorage;

#[cfg(target_arch = "wasm32")]
impl PreferenceStore for LocalStorage {
    fn save(&mut self, theme: ThemePreference) {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Err(e) = storage.set_item(STORAGE_KEY, theme.as_str()) {
                    tracing::warn!("Failed to persist theme: {:?}", e);
                }
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn root_has_dark_class() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|root| root.class_list().contains(DARK_CLASS))
        .unwrap_or(false)
}

#[cfg(target_arch = "wasm32")]
fn apply_theme_to_dom(theme: ThemePreference) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root
                    .class_list()
                    .toggle_with_force(DARK_CLASS, theme.is_dark());
            }
        }
    }
}
