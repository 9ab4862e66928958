//! Show/hide state for the floating chat window.
//!
//! Opening and closing are two-step CSS transitions: the window becomes
//! visible, then loses `scale-95 opacity-0` after a frame; on close it fades
//! first and gets `hidden` once the transition has run.

/// Delay before the opening transition starts.
pub const SHOW_DELAY_MS: u32 = 10;

/// Length of the closing transition before the window is hidden.
pub const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WindowPhase {
    #[default]
    Hidden,
    Opening,
    Open,
    Closing,
}

/// A pending timer the caller must run before calling [`ChatWindow::settle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub generation: u64,
    pub delay_ms: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChatWindow {
    phase: WindowPhase,
    generation: u64,
}

impl ChatWindow {
    #[cfg(test)]
    fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Start opening if hidden or closing, otherwise start closing.
    ///
    /// Reopening while a close is pending supersedes the pending hide.
    pub fn toggle(&mut self) -> Transition {
        self.generation += 1;
        let delay_ms = match self.phase {
            WindowPhase::Hidden | WindowPhase::Closing => {
                self.phase = WindowPhase::Opening;
                SHOW_DELAY_MS
            }
            WindowPhase::Opening | WindowPhase::Open => {
                self.phase = WindowPhase::Closing;
                HIDE_DELAY_MS
            }
        };
        Transition {
            generation: self.generation,
            delay_ms,
        }
    }

    /// Finish a transition once its timer fires. Stale timers are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = match self.phase {
            WindowPhase::Opening => WindowPhase::Open,
            WindowPhase::Closing => WindowPhase::Hidden,
            other => other,
        };
        true
    }

    /// Classes for `#ai-chat-window` on top of its base styling.
    pub fn window_class(&self) -> &'static str {
        match self.phase {
            WindowPhase::Hidden => "hidden scale-95 opacity-0",
            WindowPhase::Opening | WindowPhase::Closing => "scale-95 opacity-0",
            WindowPhase::Open => "scale-100 opacity-100",
        }
    }

    /// `#chat-bubble` pulses while the window is away.
    pub fn bubble_pulses(&self) -> bool {
        matches!(self.phase, WindowPhase::Hidden | WindowPhase::Closing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_settle() {
        let mut window = ChatWindow::default();
        assert!(window.bubble_pulses());
        let t = window.toggle();
        assert_eq!(t.delay_ms, SHOW_DELAY_MS);
        assert_eq!(window.window_class(), "scale-95 opacity-0");
        assert!(!window.bubble_pulses());
        assert!(window.settle(t.generation));
        assert_eq!(window.phase(), WindowPhase::Open);
    }

    #[test]
    fn test_close_hides_after_transition() {
        let mut window = ChatWindow::default();
        let open = window.toggle();
        window.settle(open.generation);
        let close = window.toggle();
        assert_eq!(close.delay_ms, HIDE_DELAY_MS);
        assert_eq!(window.phase(), WindowPhase::Closing);
        assert!(window.bubble_pulses());
        window.settle(close.generation);
        assert_eq!(window.phase(), WindowPhase::Hidden);
        assert!(window.window_class().starts_with("hidden"));
    }

    #[test]
    fn test_reopen_during_close_cancels_pending_hide() {
        let mut window = ChatWindow::default();
        let open = window.toggle();
        window.settle(open.generation);
        let close = window.toggle();
        let reopen = window.toggle();
        assert!(!window.settle(close.generation));
        assert_eq!(window.phase(), WindowPhase::Opening);
        window.settle(reopen.generation);
        assert_eq!(window.phase(), WindowPhase::Open);
    }
}
