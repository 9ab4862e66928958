//! Floating chat widget with streamed assistant replies.
//!
//! A submitted query renders immediately with a typing indicator; the reply
//! is streamed from [`CHAT_ENDPOINT`] and re-rendered as markdown after every
//! fragment. Turns are independent: a new query does not cancel one that is
//! still streaming.

use dioxus::prelude::*;
use futures::Stream;

use crate::app::api::{self, ApiError, CHAT_ENDPOINT};
use crate::app::content::QUICK_QUERIES;
use crate::app::csrf::{self, CSRF_FIELD};
use crate::app::dom;

pub mod markdown;
pub mod stream;
pub mod transcript;
pub mod window;

use stream::{pump_stream, StreamSummary};
use transcript::{ChatEntry, ChatTranscript, TurnId};
use window::ChatWindow;

/// Container the messages are rendered into.
pub const MESSAGES_ID: &str = "chat-messages";

/// Mutable access to a transcript, whether it lives in a signal or a test.
pub trait TranscriptHandle {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatTranscript) -> R) -> R;
}

impl TranscriptHandle for ChatTranscript {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatTranscript) -> R) -> R {
        f(self)
    }
}

impl TranscriptHandle for Signal<ChatTranscript> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ChatTranscript) -> R) -> R {
        let mut transcript = self.write();
        f(&mut transcript)
    }
}

/// Finish a turn from the endpoint's response.
///
/// A failed request replaces the typing indicator with an inline error and
/// creates no reply bubble. Otherwise the bubble is opened and fed until the
/// stream ends; a read error mid-stream is appended after the partial reply.
/// `after_append` sees the transcript once each fragment is in it.
pub async fn stream_reply<H, S, F>(
    handle: &mut H,
    turn: TurnId,
    response: Result<S, ApiError>,
    mut after_append: F,
) -> Option<StreamSummary>
where
    H: TranscriptHandle,
    S: Stream<Item = Result<Vec<u8>, ApiError>> + Unpin,
    F: FnMut(&ChatTranscript),
{
    let chunks = match response {
        Ok(chunks) => chunks,
        Err(e) => {
            tracing::warn!("Chat request failed: {}", e);
            handle.update(|t| t.fail_turn(turn, e.to_string()));
            return None;
        }
    };

    handle.update(|t| t.open_reply(turn));

    let result = pump_stream(chunks, |fragment| {
        handle.update(|t| {
            if t.append_reply(turn, fragment) {
                after_append(t);
            }
        });
    })
    .await;

    match result {
        Ok(summary) => Some(summary),
        Err(e) => {
            tracing::warn!("Chat stream interrupted: {}", e);
            handle.update(|t| t.fail_turn(turn, e.to_string()));
            None
        }
    }
}

/// Render the query, then stream the reply in the background.
fn send_query(mut transcript: Signal<ChatTranscript>, mut input: Signal<String>, query: String) {
    let Some(turn) = transcript.write().begin_turn(&query) else {
        return;
    };
    input.set(String::new());

    spawn(async move {
        dom::scroll_to_bottom_after_render(MESSAGES_ID).await;

        let token = csrf::read_token();
        let response = api::post_form_stream(
            CHAT_ENDPOINT,
            &[("message", query.trim()), (CSRF_FIELD, token.as_str())],
        )
        .await;

        let mut handle = transcript;
        stream_reply(&mut handle, turn, response, |_| follow_latest()).await;
        dom::scroll_to_bottom_after_render(MESSAGES_ID).await;
    });
}

/// Keep the newest content in view. The scroll waits for the render that
/// the transcript write schedules, so it measures the grown container.
fn follow_latest() {
    spawn(dom::scroll_to_bottom_after_render(MESSAGES_ID));
}

/// Show or hide the chat window, running its CSS transition.
fn toggle_window(mut window: Signal<ChatWindow>) {
    let transition = window.write().toggle();
    spawn(async move {
        dom::sleep_ms(transition.delay_ms).await;
        window.write().settle(transition.generation);
    });
}

fn render_entry(entry: &ChatEntry) -> Element {
    match entry {
        ChatEntry::User { text } => rsx! {
            div { class: "flex justify-end mb-4",
                div { class: "bg-navy text-white p-4 rounded-2xl rounded-tr-none shadow-md max-w-[80%] text-sm",
                    "{text}"
                }
            }
        },
        ChatEntry::Typing { turn } => {
            let loader_id = turn.loader_id();
            rsx! {
                div { id: "{loader_id}", class: "flex justify-start mb-4",
                    div { class: "bg-white dark:bg-slate-800 p-4 rounded-2xl rounded-tl-none border border-sky/5 dark:border-slate-800 w-16 shadow-sm",
                        div { class: "typing-dots flex justify-center items-center gap-1",
                            span { class: "w-1.5 h-1.5 bg-ocean rounded-full animate-bounce" }
                            span { class: "w-1.5 h-1.5 bg-ocean rounded-full animate-bounce [animation-delay:0.2s]" }
                            span { class: "w-1.5 h-1.5 bg-ocean rounded-full animate-bounce [animation-delay:0.4s]" }
                        }
                    }
                }
            }
        }
        ChatEntry::Assistant { html, .. } => rsx! {
            div { class: "flex justify-start mb-4",
                div {
                    class: "ai-bubble bg-white dark:bg-slate-800 p-4 rounded-2xl rounded-tl-none border border-sky/5 dark:border-slate-800 text-navy dark:text-slate-300 shadow-sm leading-relaxed max-w-[90%] text-sm",
                    dangerous_inner_html: "{html}",
                }
            }
        },
        ChatEntry::Error { message } => rsx! {
            div { class: "text-red-500 italic p-2 text-xs text-center mb-4", "{message}" }
        },
    }
}

/// Floating chat bubble and window.
#[component]
pub fn ChatWidget() -> Element {
    let transcript = use_signal(ChatTranscript::new);
    let mut input = use_signal(String::new);
    let window = use_signal(ChatWindow::default);

    let entries = transcript.read().entries().to_vec();
    let state = *window.read();
    let window_class = state.window_class();
    let bubble_class = if state.bubble_pulses() {
        "animate-pulse-slow"
    } else {
        ""
    };

    rsx! {
        div { class: "fixed bottom-6 right-6 z-40 flex flex-col items-end gap-4",
            div {
                id: "ai-chat-window",
                class: "w-80 sm:w-96 h-[28rem] flex flex-col rounded-2xl shadow-2xl bg-slate-50 dark:bg-slate-900 transition-all duration-300 origin-bottom-right {window_class}",
                div { class: "flex items-center justify-between px-4 py-3 bg-navy text-white rounded-t-2xl",
                    span { class: "font-semibold text-sm", "Ask about my work" }
                    button {
                        r#type: "button",
                        aria_label: "Close chat",
                        onclick: move |_| toggle_window(window),
                        "×"
                    }
                }
                div { id: MESSAGES_ID, class: "flex-1 overflow-y-auto p-4",
                    for entry in entries.iter() {
                        {render_entry(entry)}
                    }
                }
                div { class: "flex flex-wrap gap-2 px-4 pb-2",
                    for query in QUICK_QUERIES.iter().copied() {
                        button {
                            r#type: "button",
                            class: "px-2 py-1 text-xs rounded-full border border-ocean/30 text-ocean",
                            onclick: move |_| send_query(transcript, input, query.to_string()),
                            "{query}"
                        }
                    }
                }
                form {
                    id: "ai-chat-form",
                    class: "flex gap-2 p-3 border-t border-slate-200 dark:border-slate-800",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let query = input();
                        send_query(transcript, input, query);
                    },
                    input {
                        id: "ai-user-input",
                        class: "flex-1 px-3 py-2 rounded-lg text-sm bg-white dark:bg-slate-800",
                        placeholder: "Type your question...",
                        autocomplete: "off",
                        value: "{input}",
                        oninput: move |e| input.set(e.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "px-4 py-2 rounded-lg bg-ocean text-white text-sm",
                        "Send"
                    }
                }
            }
            button {
                id: "chat-bubble",
                r#type: "button",
                class: "w-14 h-14 rounded-full bg-navy text-white shadow-xl {bubble_class}",
                aria_label: "Open chat",
                onclick: move |_| toggle_window(window),
                "💬"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream::{self, Iter};
    use std::vec::IntoIter;

    type TestChunks = Iter<IntoIter<Result<Vec<u8>, ApiError>>>;

    fn chunks(parts: &[&str]) -> TestChunks {
        stream::iter(
            parts
                .iter()
                .map(|p| Ok(p.as_bytes().to_vec()))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn test_reply_renders_cumulative_markdown() {
        let mut transcript = ChatTranscript::new();
        let turn = transcript.begin_turn("hi").unwrap();
        let summary = tokio_test::block_on(stream_reply(
            &mut transcript,
            turn,
            Ok(chunks(&["data: {\"text\":\"Hel\"}\n\n", "data: {\"text\":\"lo\"}\n\n"])),
            |_| {},
        ));
        assert_eq!(summary.map(|s| s.fragments), Some(2));
        assert_eq!(transcript.reply_text(turn), Some("Hello"));
        assert!(matches!(
            transcript.entries().last(),
            Some(ChatEntry::Assistant { html, .. }) if html == "<p>Hello</p>\n"
        ));
    }

    #[test]
    fn test_malformed_event_does_not_stop_reply() {
        let mut transcript = ChatTranscript::new();
        let turn = transcript.begin_turn("hi").unwrap();
        tokio_test::block_on(stream_reply(
            &mut transcript,
            turn,
            Ok(chunks(&[
                "data: {\"text\":\"one \"}\n\n",
                "data: not-json\n\n",
                "data: {\"text\":\"two\"}\n\n",
            ])),
            |_| {},
        ));
        assert_eq!(transcript.reply_text(turn), Some("one two"));
    }

    #[test]
    fn test_server_error_shows_inline_error_without_bubble() {
        let mut transcript = ChatTranscript::new();
        let turn = transcript.begin_turn("hi").unwrap();
        let mut appended = 0;
        let summary = tokio_test::block_on(stream_reply::<_, TestChunks, _>(
            &mut transcript,
            turn,
            Err(ApiError::Status(500)),
            |_| appended += 1,
        ));
        assert_eq!(appended, 0);
        assert_eq!(summary, None);
        assert!(!transcript.is_typing(turn));
        assert_eq!(transcript.reply_text(turn), None);
        assert_eq!(
            transcript.entries().last(),
            Some(&ChatEntry::Error {
                message: "AI server error.".into()
            })
        );
    }

    #[test]
    fn test_interrupted_stream_keeps_partial_reply() {
        let mut transcript = ChatTranscript::new();
        let turn = transcript.begin_turn("hi").unwrap();
        let parts: Vec<Result<Vec<u8>, ApiError>> = vec![
            Ok(b"data: {\"text\":\"par\"}\n\n".to_vec()),
            Err(ApiError::Js("reset".into())),
        ];
        tokio_test::block_on(stream_reply(
            &mut transcript,
            turn,
            Ok(stream::iter(parts)),
            |_| {},
        ));
        assert_eq!(transcript.reply_text(turn), Some("par"));
        assert!(matches!(
            transcript.entries().last(),
            Some(ChatEntry::Error { message }) if message == "reset"
        ));
    }

    #[test]
    fn test_after_append_sees_each_fragment_in_place() {
        let mut transcript = ChatTranscript::new();
        let turn = transcript.begin_turn("hi").unwrap();
        let mut seen = Vec::new();
        tokio_test::block_on(stream_reply(
            &mut transcript,
            turn,
            Ok(chunks(&[
                "data: {\"text\":\"Hel\"}\n\n",
                ": ping\n\n",
                "data: {\"text\":\"lo\"}\n\n",
            ])),
            |t| seen.push(t.reply_text(turn).map(str::to_string)),
        ));
        assert_eq!(
            seen,
            vec![Some("Hel".to_string()), Some("Hello".to_string())]
        );
    }
}
