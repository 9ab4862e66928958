//! Short-lived corner notification.

use dioxus::prelude::*;

use crate::app::dom;

/// How long a toast stays up.
pub const TOAST_DURATION_MS: u32 = 2000;

#[derive(Clone, Copy)]
pub struct ToastContext {
    message: Signal<Option<String>>,
    generation: Signal<u64>,
}

impl ToastContext {
    /// Show `message`, replacing any current toast, and clear it after
    /// [`TOAST_DURATION_MS`] unless a newer toast took its place.
    pub fn show(&self, message: impl Into<String>) {
        let mut text = self.message;
        let mut generation = self.generation;
        let mine = generation() + 1;
        generation.set(mine);
        text.set(Some(message.into()));

        spawn(async move {
            dom::sleep_ms(TOAST_DURATION_MS).await;
            if generation() == mine {
                text.set(None);
            }
        });
    }

    pub fn message(&self) -> Option<String> {
        self.message.read().clone()
    }
}

pub fn use_toast_provider() {
    let message = use_signal(|| None::<String>);
    let generation = use_signal(|| 0u64);
    use_context_provider(|| ToastContext {
        message,
        generation,
    });
}

pub fn use_toast() -> ToastContext {
    use_context::<ToastContext>()
}

#[component]
pub fn Toast() -> Element {
    let toast = use_toast();
    let Some(message) = toast.message() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fixed top-4 right-4 z-50 flex items-center gap-2 px-4 py-3 rounded-lg shadow-lg bg-white dark:bg-slate-800 text-sm text-navy dark:text-white animate-fade-in",
            role: "status",
            span { class: "text-green-500", "✓" }
            "{message}"
        }
    }
}
