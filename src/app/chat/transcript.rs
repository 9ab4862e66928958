//! Chat message history as plain view state.
//!
//! Each submitted query opens a turn. The turn's typing indicator is tracked
//! by id so it can be removed precisely even when several turns overlap.

use super::markdown::render_markdown;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TurnId(pub u64);

impl TurnId {
    /// DOM id of this turn's typing indicator.
    pub fn loader_id(self) -> String {
        format!("loader-{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChatEntry {
    User { text: String },
    Typing { turn: TurnId },
    Assistant { turn: TurnId, text: String, html: String },
    Error { message: String },
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatTranscript {
    entries: Vec<ChatEntry>,
    next_turn: u64,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    /// Render the user's message and a typing indicator.
    ///
    /// Blank queries open no turn.
    pub fn begin_turn(&mut self, query: &str) -> Option<TurnId> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        self.next_turn += 1;
        let turn = TurnId(self.next_turn);
        self.entries.push(ChatEntry::User {
            text: query.to_string(),
        });
        self.entries.push(ChatEntry::Typing { turn });
        Some(turn)
    }

    /// Replace the typing indicator with an empty reply bubble.
    pub fn open_reply(&mut self, turn: TurnId) {
        self.remove_typing(turn);
        self.entries.push(ChatEntry::Assistant {
            turn,
            text: String::new(),
            html: String::new(),
        });
    }

    /// Append a streamed fragment and re-render the whole reply.
    ///
    /// Returns false if the turn has no open reply.
    pub fn append_reply(&mut self, turn: TurnId, fragment: &str) -> bool {
        let Some((text, html)) = self.entries.iter_mut().find_map(|entry| match entry {
            ChatEntry::Assistant {
                turn: t,
                text,
                html,
            } if *t == turn => Some((text, html)),
            _ => None,
        }) else {
            return false;
        };
        text.push_str(fragment);
        *html = render_markdown(text);
        true
    }

    /// Terminal failure for a turn: drop its indicator, show the error inline.
    pub fn fail_turn(&mut self, turn: TurnId, message: impl Into<String>) {
        self.remove_typing(turn);
        self.entries.push(ChatEntry::Error {
            message: message.into(),
        });
    }

    #[cfg(test)]
    pub(crate) fn is_typing(&self, turn: TurnId) -> bool {
        self.entries
            .iter()
            .any(|e| matches!(e, ChatEntry::Typing { turn: t } if *t == turn))
    }

    pub fn reply_text(&self, turn: TurnId) -> Option<&str> {
        self.entries.iter().find_map(|e| match e {
            ChatEntry::Assistant { turn: t, text, .. } if *t == turn => Some(text.as_str()),
            _ => None,
        })
    }

    fn remove_typing(&mut self, turn: TurnId) {
        self.entries
            .retain(|e| !matches!(e, ChatEntry::Typing { turn: t } if *t == turn));
    }
}
