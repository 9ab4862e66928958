//! Anti-forgery token plumbing.
//!
//! The backend sets a `csrftoken` cookie; the page mirrors it into hidden
//! `csrfmiddlewaretoken` fields, and submissions read the token back from the
//! field.

use dioxus::prelude::*;

use crate::app::dom;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Look up `name` in a `document.cookie` string, percent-decoded.
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| {
            urlencoding::decode(value)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| value.to_string())
        })
}

/// Token from the hidden form field, falling back to the cookie.
pub fn read_token() -> String {
    dom::input_value(&format!("[name={}]", CSRF_FIELD))
        .filter(|v| !v.is_empty())
        .or_else(|| dom::cookies().and_then(|c| cookie_value(&c, CSRF_COOKIE)))
        .unwrap_or_default()
}

/// Hidden input carrying the token, filled in after hydration.
#[component]
pub fn CsrfField() -> Element {
    let mut token = use_signal(String::new);

    use_effect(move || {
        if let Some(value) = dom::cookies().and_then(|c| cookie_value(&c, CSRF_COOKIE)) {
            token.set(value);
        }
    });

    rsx! {
        input { r#type: "hidden", name: CSRF_FIELD, value: "{token}" }
    }
}
