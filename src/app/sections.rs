//! Scroll-based highlighting of the navigation link for the current section.

use dioxus::prelude::*;

/// A section counts as reached this many pixels before its top edge.
pub const SCROLL_MARGIN: f64 = 150.0;

#[derive(Clone, Debug, PartialEq)]
pub struct SectionOffset {
    pub id: String,
    pub top: f64,
}

/// The last section, in document order, whose `top - SCROLL_MARGIN` has been
/// scrolled past. Later sections win ties.
pub fn current_section(sections: &[SectionOffset], scroll_y: f64) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.top - SCROLL_MARGIN)
        .last()
        .map(|s| s.id.as_str())
}

/// Index of the single link to mark active: the first whose href contains
/// the current section id. No current section means no active link.
pub fn active_link<S: AsRef<str>>(hrefs: &[S], current: Option<&str>) -> Option<usize> {
    let current = current.filter(|id| !id.is_empty())?;
    hrefs.iter().position(|href| href.as_ref().contains(current))
}

/// Track the current section id across scroll events.
pub fn use_section_tracker() -> Signal<Option<String>> {
    let current = use_signal(|| None::<String>);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::app::dom::{section_offsets, WindowListener};

        let guard: Rc<RefCell<Option<WindowListener>>> = use_hook(|| Rc::new(RefCell::new(None)));

        let guard_clone = guard.clone();
        use_effect(move || {
            if guard_clone.borrow().is_some() {
                return;
            }
            let mut current = current;
            let listener = WindowListener::new("scroll", move |_| {
                let Some((sections, scroll_y)) = section_offsets() else {
                    return;
                };
                let next = current_section(&sections, scroll_y).map(str::to_string);
                if *current.peek() != next {
                    current.set(next);
                }
            });
            if listener.is_none() {
                tracing::warn!("Section tracker: failed to attach scroll listener");
            }
            *guard_clone.borrow_mut() = listener;
        });
    }

    current
}
