//! Copy-to-clipboard with toast feedback.

use dioxus::document::eval;
use dioxus::prelude::*;

use crate::app::components::toast::ToastContext;

/// Script writing `text` to the clipboard. The text is embedded as a JSON
/// string literal so quotes and newlines survive.
pub fn write_script(text: &str) -> String {
    let literal = serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string());
    format!("await navigator.clipboard.writeText({}); return true;", literal)
}

/// Copy `text` and announce `message` once the browser confirms the write.
/// A refused write is logged and produces no toast.
pub fn copy_to_clipboard(text: &str, message: &str, toast: ToastContext) {
    let script = write_script(text);
    let message = message.to_string();
    spawn(async move {
        match eval(&script).await {
            Ok(_) => toast.show(message),
            Err(e) => tracing::warn!("Clipboard write failed: {:?}", e),
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_script_quotes_text() {
        assert_eq!(
            write_script("me@example.com"),
            "await navigator.clipboard.writeText(\"me@example.com\"); return true;"
        );
    }

    #[test]
    fn test_write_script_escapes_quotes_and_newlines() {
        let script = write_script("a\"b\nc");
        assert!(script.contains(r#"writeText("a\"b\nc")"#));
    }
}
