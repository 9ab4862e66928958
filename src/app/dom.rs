//! Thin browser DOM helpers.
//!
//! Every helper has an SSR counterpart that does nothing, so components can
//! call them from event handlers without cfg noise. Event handlers only run
//! after hydration.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

#[cfg(target_arch = "wasm32")]
fn element(id: &str) -> Option<web_sys::Element> {
    document().and_then(|d| d.get_element_by_id(id))
}

/// Smoothly scroll an element horizontally by `dx` pixels.
#[cfg(target_arch = "wasm32")]
pub fn scroll_by_smooth(id: &str, dx: f64) {
    use web_sys::{ScrollBehavior, ScrollToOptions};

    if let Some(el) = element(id) {
        let opts = ScrollToOptions::new();
        opts.set_left(dx);
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_by_with_scroll_to_options(&opts);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_by_smooth(_id: &str, _dx: f64) {}

/// Smoothly scroll the page so the element is in view.
#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view_smooth(id: &str) {
    use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

    if let Some(el) = element(id) {
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_into_view_smooth(_id: &str) {}

/// Scroll a container to its latest content.
#[cfg(target_arch = "wasm32")]
pub fn scroll_to_bottom(id: &str) {
    if let Some(el) = element(id) {
        el.set_scroll_top(el.scroll_height());
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_to_bottom(_id: &str) {}

/// Scroll to bottom now and again after the next render has landed.
pub async fn scroll_to_bottom_after_render(id: &str) {
    scroll_to_bottom(id);
    sleep_ms(16).await;
    scroll_to_bottom(id);
}

/// Value of the first `<input>` matching `selector`.
#[cfg(target_arch = "wasm32")]
pub fn input_value(selector: &str) -> Option<String> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<web_sys::HtmlInputElement>()
        .ok()
        .map(|input| input.value())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn input_value(_selector: &str) -> Option<String> {
    None
}

/// Raw `document.cookie` string.
#[cfg(target_arch = "wasm32")]
pub fn cookies() -> Option<String> {
    document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()?
        .cookie()
        .ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn cookies() -> Option<String> {
    None
}

/// Address of the current page.
#[cfg(target_arch = "wasm32")]
pub fn current_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn current_url() -> Option<String> {
    None
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(_ms: u32) {}

/// `(id, offsetTop)` of every `<section>` with an id, in document order,
/// plus the page's vertical scroll offset.
#[cfg(target_arch = "wasm32")]
pub fn section_offsets() -> Option<(Vec<crate::app::sections::SectionOffset>, f64)> {
    use crate::app::sections::SectionOffset;

    let window = web_sys::window()?;
    let nodes = window.document()?.query_selector_all("section").ok()?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(section) = nodes
            .item(i)
            .and_then(|n| n.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            continue;
        };
        let id = section.id();
        if id.is_empty() {
            continue;
        }
        sections.push(SectionOffset {
            id,
            top: f64::from(section.offset_top()),
        });
    }
    let scroll_y = window.scroll_y().ok()?;
    Some((sections, scroll_y))
}

/// RAII guard for a listener on `window`; removed on drop.
#[cfg(target_arch = "wasm32")]
pub struct WindowListener {
    event: &'static str,
    callback: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
}

#[cfg(target_arch = "wasm32")]
impl WindowListener {
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let callback = wasm_bindgen::closure::Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(web_sys::Event)>
        );
        web_sys::window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, callback })
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        }
    }
}
