//! Incremental decoding of `data: <json>` event streams.
//!
//! The chat endpoint answers with a chunked body of events separated by blank
//! lines. Chunk boundaries fall anywhere: inside a multi-byte character, inside
//! the prefix, inside the JSON. [`EventStreamDecoder`] carries both remainders
//! across calls so it can be fed arbitrary splits of the same bytes.

use futures::{Stream, StreamExt};
use serde::Deserialize;

use crate::app::api::ApiError;

/// Separator between events.
pub const EVENT_DELIMITER: &str = "\n\n";

/// Prefix introducing an event's JSON payload.
pub const DATA_PREFIX: &str = "data:";

/// Payload of a single chat event.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ChatFrame {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("event does not start with `data:`")]
    MissingPrefix,
    #[error("invalid event payload: {0}")]
    Json(String),
}

/// Parse one raw event (without its delimiter).
///
/// Returns `Ok(None)` for blank events and `:` comment lines, which carry no
/// payload but are not malformed either.
pub fn parse_event(raw: &str) -> Result<Option<ChatFrame>, FrameError> {
    let raw = raw.trim_start_matches('\n');
    if raw.trim().is_empty() || raw.starts_with(':') {
        return Ok(None);
    }
    let payload = raw
        .strip_prefix(DATA_PREFIX)
        .ok_or(FrameError::MissingPrefix)?
        .trim();
    serde_json::from_str(payload)
        .map(Some)
        .map_err(|e| FrameError::Json(e.to_string()))
}

/// Stream-aware UTF-8 decoding.
///
/// An incomplete sequence at the end of a chunk is held back until the next
/// chunk arrives; invalid bytes decode to U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8Carry {
    pending: Vec<u8>,
}

impl Utf8Carry {
    pub fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(err) => {
                    let (valid, after) = rest.split_at(err.valid_up_to());
                    out.push_str(&String::from_utf8_lossy(valid));
                    match err.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[len..];
                        }
                        None => {
                            self.pending = after.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }

    /// Flush at end of input. A dangling partial character becomes U+FFFD.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            String::new()
        } else {
            self.pending.clear();
            char::REPLACEMENT_CHARACTER.to_string()
        }
    }

    #[cfg(test)]
    fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

/// Splits a chunked byte stream into raw event strings.
#[derive(Debug, Default)]
pub struct EventStreamDecoder {
    utf8: Utf8Carry,
    buffer: String,
}

impl EventStreamDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one chunk; returns every event completed by it, in order.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        let text = self.utf8.decode(chunk);
        self.buffer.push_str(&text);
        if self.buffer.contains('\r') {
            self.buffer = self.buffer.replace("\r\n", "\n");
        }
        self.drain_complete()
    }

    /// End of stream: returns a trailing event that never got its delimiter.
    pub fn finish(mut self) -> Vec<String> {
        let tail = self.utf8.finish();
        self.buffer.push_str(&tail);
        let mut events = self.drain_complete();
        let rest = std::mem::take(&mut self.buffer);
        if !rest.trim().is_empty() {
            events.push(rest);
        }
        events
    }

    /// Bytes or text still waiting for more input.
    #[cfg(test)]
    fn is_idle(&self) -> bool {
        self.buffer.is_empty() && !self.utf8.has_pending()
    }

    fn drain_complete(&mut self) -> Vec<String> {
        let mut events = Vec::new();
        while let Some(pos) = self.buffer.find(EVENT_DELIMITER) {
            let event: String = self.buffer.drain(..pos + EVENT_DELIMITER.len()).collect();
            let event = &event[..pos];
            if !event.trim().is_empty() {
                events.push(event.to_string());
            }
        }
        events
    }
}

/// Counters reported once a stream finishes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreamSummary {
    pub fragments: usize,
    pub skipped: usize,
}

/// Drive a chunk stream to completion, calling `on_text` for every text
/// fragment in arrival order.
///
/// Each chunk is fully processed before the next one is pulled. Malformed
/// events are logged and skipped; a read error ends the stream with `Err`
/// after every fragment that arrived before it has been delivered.
pub async fn pump_stream<S, F>(mut chunks: S, mut on_text: F) -> Result<StreamSummary, ApiError>
where
    S: Stream<Item = Result<Vec<u8>, ApiError>> + Unpin,
    F: FnMut(&str),
{
    let mut decoder = EventStreamDecoder::new();
    let mut summary = StreamSummary::default();

    while let Some(chunk) = chunks.next().await {
        let chunk = chunk?;
        for raw in decoder.push(&chunk) {
            dispatch(&raw, &mut summary, &mut on_text);
        }
    }
    for raw in decoder.finish() {
        dispatch(&raw, &mut summary, &mut on_text);
    }

    tracing::debug!(
        "Chat stream finished: {} fragments, {} skipped events",
        summary.fragments,
        summary.skipped
    );
    Ok(summary)
}

fn dispatch<F: FnMut(&str)>(raw: &str, summary: &mut StreamSummary, on_text: &mut F) {
    match parse_event(raw) {
        Ok(Some(ChatFrame { text: Some(text) })) if !text.is_empty() => {
            summary.fragments += 1;
            on_text(&text);
        }
        Ok(_) => {}
        Err(e) => {
            summary.skipped += 1;
            tracing::warn!("Chat stream: skipping event: {} ({:?})", e, truncate(raw, 80));
        }
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(chunks: &[&[u8]]) -> Vec<String> {
        let mut decoder = EventStreamDecoder::new();
        let mut events = Vec::new();
        for chunk in chunks {
            events.extend(decoder.push(chunk));
        }
        events.extend(decoder.finish());
        events
    }

    #[test]
    fn test_parse_event_with_text() {
        let frame = parse_event(r#"data: {"text":"Hel"}"#).unwrap();
        assert_eq!(frame.and_then(|f| f.text).as_deref(), Some("Hel"));
    }

    #[test]
    fn test_parse_event_without_space_after_prefix() {
        let frame = parse_event(r#"data:{"text":"x"}"#).unwrap();
        assert_eq!(frame.and_then(|f| f.text).as_deref(), Some("x"));
    }

    #[test]
    fn test_parse_event_without_text_field() {
        let frame = parse_event(r#"data: {"done":true}"#).unwrap();
        assert_eq!(frame, Some(ChatFrame { text: None }));
    }

    #[test]
    fn test_parse_event_rejects_bad_json() {
        assert!(matches!(
            parse_event("data: not-json"),
            Err(FrameError::Json(_))
        ));
    }

    #[test]
    fn test_parse_event_rejects_missing_prefix() {
        assert_eq!(
            parse_event(r#"{"text":"x"}"#),
            Err(FrameError::MissingPrefix)
        );
    }

    #[test]
    fn test_parse_event_ignores_comments_and_blanks() {
        assert_eq!(parse_event(": keep-alive"), Ok(None));
        assert_eq!(parse_event("   "), Ok(None));
    }

    #[test]
    fn test_events_split_across_chunks_are_reassembled() {
        let events = collect(&[b"data: {\"te", b"xt\":\"Hel\"}\n", b"\ndata: {\"text\":\"lo\"}\n\n"]);
        assert_eq!(
            events,
            vec![
                r#"data: {"text":"Hel"}"#.to_string(),
                r#"data: {"text":"lo"}"#.to_string()
            ]
        );
    }

    #[test]
    fn test_multibyte_character_split_across_chunks() {
        let bytes = "data: {\"text\":\"caf\u{e9} \u{1f600}\"}\n\n".as_bytes();
        // Split inside both the 2-byte and the 4-byte sequence
        let e_acute = bytes.iter().position(|&b| b == 0xC3).unwrap();
        let emoji = bytes.iter().position(|&b| b == 0xF0).unwrap();
        let events = collect(&[
            &bytes[..e_acute + 1],
            &bytes[e_acute + 1..emoji + 2],
            &bytes[emoji + 2..],
        ]);
        let frame = parse_event(&events[0]).unwrap().unwrap();
        assert_eq!(frame.text.as_deref(), Some("caf\u{e9} \u{1f600}"));
    }

    #[test]
    fn test_every_single_byte_split_yields_same_events() {
        let bytes = "data: {\"text\":\"\u{4f60}\u{597d}\"}\n\ndata: {\"text\":\"!\"}\n\n".as_bytes();
        let whole = collect(&[bytes]);
        let singles: Vec<&[u8]> = bytes.chunks(1).collect();
        assert_eq!(collect(&singles), whole);
        assert_eq!(whole.len(), 2);
    }

    #[test]
    fn test_invalid_bytes_become_replacement_character() {
        let mut carry = Utf8Carry::default();
        assert_eq!(carry.decode(b"a\xFFb"), "a\u{fffd}b");
        assert!(!carry.has_pending());
    }

    #[test]
    fn test_dangling_partial_character_flushes_as_replacement() {
        let mut carry = Utf8Carry::default();
        assert_eq!(carry.decode(&[b'x', 0xE2, 0x82]), "x");
        assert!(carry.has_pending());
        assert_eq!(carry.finish(), "\u{fffd}");
        assert!(!carry.has_pending());
    }

    #[test]
    fn test_crlf_delimiters_are_normalized() {
        let events = collect(&[b"data: {\"text\":\"a\"}\r\n\r", b"\ndata: {\"text\":\"b\"}\r\n\r\n"]);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], r#"data: {"text":"b"}"#);
    }

    #[test]
    fn test_trailing_event_without_delimiter_is_flushed() {
        let mut decoder = EventStreamDecoder::new();
        assert!(decoder.push(br#"data: {"text":"tail"}"#).is_empty());
        assert!(!decoder.is_idle());
        assert_eq!(decoder.finish(), vec![r#"data: {"text":"tail"}"#.to_string()]);
    }

    #[test]
    fn test_pump_accumulates_in_order() {
        let chunks = futures::stream::iter(vec![
            Ok(b"data: {\"text\":\"Hel\"}\n\n".to_vec()),
            Ok(b"data: {\"text\":\"lo\"}\n\n".to_vec()),
        ]);
        let mut out = String::new();
        let summary = tokio_test::block_on(pump_stream(chunks, |t| out.push_str(t))).unwrap();
        assert_eq!(out, "Hello");
        assert_eq!(summary, StreamSummary { fragments: 2, skipped: 0 });
    }

    #[test]
    fn test_pump_skips_malformed_event_and_continues() {
        let chunks = futures::stream::iter(vec![
            Ok(b"data: {\"text\":\"a\"}\n\ndata: not-json\n\n".to_vec()),
            Ok(b"data: {\"text\":\"b\"}\n\n".to_vec()),
        ]);
        let mut out = String::new();
        let summary = tokio_test::block_on(pump_stream(chunks, |t| out.push_str(t))).unwrap();
        assert_eq!(out, "ab");
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_pump_read_error_keeps_earlier_fragments() {
        let chunks = futures::stream::iter(vec![
            Ok(b"data: {\"text\":\"partial\"}\n\n".to_vec()),
            Err(ApiError::Js("network reset".into())),
            Ok(b"data: {\"text\":\"never\"}\n\n".to_vec()),
        ]);
        let mut out = String::new();
        let result = tokio_test::block_on(pump_stream(chunks, |t| out.push_str(t)));
        assert_eq!(result, Err(ApiError::Js("network reset".into())));
        assert_eq!(out, "partial");
    }
}
