//! Blocking status modal for form submission feedback.

use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKind {
    /// Spinner, no dismiss button.
    Loading,
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalContent {
    pub kind: ModalKind,
    pub title: String,
    pub text: String,
}

impl ModalContent {
    pub fn loading(title: &str, text: &str) -> Self {
        Self {
            kind: ModalKind::Loading,
            title: title.to_string(),
            text: text.to_string(),
        }
    }

    pub fn success(title: &str, text: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Success,
            title: title.to_string(),
            text: text.into(),
        }
    }

    pub fn error(title: &str, text: impl Into<String>) -> Self {
        Self {
            kind: ModalKind::Error,
            title: title.to_string(),
            text: text.into(),
        }
    }

    pub fn dismissable(&self) -> bool {
        self.kind != ModalKind::Loading
    }
}

/// Global modal state shared via context
#[derive(Clone, Copy)]
pub struct ModalContext {
    pub current: Signal<Option<ModalContent>>,
}

impl ModalContext {
    /// Replace whatever is showing.
    pub fn show(&self, content: ModalContent) {
        let mut current = self.current;
        current.set(Some(content));
    }

    pub fn close(&self) {
        let mut current = self.current;
        current.set(None);
    }
}

pub fn use_modal_provider() {
    let current = use_signal(|| None::<ModalContent>);
    use_context_provider(|| ModalContext { current });
}

pub fn use_modal() -> ModalContext {
    use_context::<ModalContext>()
}

#[component]
pub fn Modal() -> Element {
    let modal = use_modal();
    let Some(content) = modal.current.read().clone() else {
        return rsx! {};
    };

    let icon_class = match content.kind {
        ModalKind::Loading => "modal-icon animate-spin border-4 border-ocean border-t-transparent",
        ModalKind::Success => "modal-icon text-green-500",
        ModalKind::Error => "modal-icon text-red-500",
    };
    let icon = match content.kind {
        ModalKind::Loading => "",
        ModalKind::Success => "✓",
        ModalKind::Error => "✗",
    };

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/40",
            role: "dialog",
            aria_modal: "true",
            div { class: "bg-white dark:bg-slate-800 rounded-2xl shadow-xl p-8 w-80 text-center",
                div { class: "{icon_class}", "{icon}" }
                h2 { class: "text-xl font-semibold text-navy dark:text-white mt-4", "{content.title}" }
                p { class: "text-sm text-slate-600 dark:text-slate-300 mt-2", "{content.text}" }
                if content.dismissable() {
                    button {
                        class: "mt-6 px-6 py-2 rounded-lg bg-navy text-white",
                        onclick: move |_| modal.close(),
                        "OK"
                    }
                }
            }
        }
    }
}
