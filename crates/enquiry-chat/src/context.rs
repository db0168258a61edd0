//! Conversation log.
//!
//! Keeps the messages shown to the user, oldest first, capped at a
//! configurable length.

use crate::response::CHAT_CLEARED;
use crate::types::{ChatMessage, ResolutionResult};

// =============================================================================
// ConversationLog
// =============================================================================

/// Append-only display log with a size cap.
#[derive(Debug, Clone)]
pub struct ConversationLog {
    messages: Vec<ChatMessage>,
    /// Maximum number of messages kept. Zero disables the cap.
    pub history_limit: usize,
}

impl ConversationLog {
    /// Create a log that starts with the bot's greeting.
    pub fn new(greeting: impl Into<String>, history_limit: usize) -> Self {
        Self {
            messages: vec![ChatMessage::bot(ResolutionResult::text(greeting))],
            history_limit,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) -> &ChatMessage {
        self.push(ChatMessage::user(text))
    }

    pub fn push_bot(&mut self, result: ResolutionResult) -> &ChatMessage {
        self.push(ChatMessage::bot(result))
    }

    /// Drop every message and start over with a single "chat cleared" reply.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.messages
            .push(ChatMessage::bot(ResolutionResult::text(CHAT_CLEARED)));
    }

    fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        if self.history_limit > 0 && self.messages.len() > self.history_limit {
            let excess = self.messages.len() - self.history_limit;
            self.messages.drain(..excess);
        }
        // The message was just pushed and the cap keeps at least one entry.
        &self.messages[self.messages.len() - 1]
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Sender;

    fn make_log() -> ConversationLog {
        ConversationLog::new("Hello!", 10)
    }

    #[test]
    fn test_new_log_has_greeting() {
        let log = make_log();
        assert_eq!(log.messages().len(), 1);
        let first = &log.messages()[0];
        assert_eq!(first.sender, Sender::Bot);
        assert_eq!(first.text, "Hello!");
    }

    #[test]
    fn test_push_keeps_order() {
        let mut log = make_log();
        log.push_user("bus 42");
        log.push_bot(ResolutionResult::text("Bus 42 – Poonachi"));
        let senders: Vec<Sender> = log.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(log.messages()[2].text, "Bus 42 – Poonachi");
    }

    #[test]
    fn test_push_bot_keeps_image() {
        let mut log = make_log();
        let msg = log.push_bot(ResolutionResult::with_image("Campus View", Some("u".into())));
        assert_eq!(msg.image.as_deref(), Some("u"));
    }

    #[test]
    fn test_history_limit_drops_oldest() {
        let mut log = ConversationLog::new("Hello!", 3);
        for i in 0..5 {
            log.push_user(format!("q{}", i));
        }
        assert_eq!(log.messages().len(), 3);
        assert_eq!(log.messages()[0].text, "q2");
        assert_eq!(log.messages()[2].text, "q4");
    }

    #[test]
    fn test_zero_limit_is_unbounded() {
        let mut log = ConversationLog::new("Hello!", 0);
        for i in 0..50 {
            log.push_user(format!("q{}", i));
        }
        assert_eq!(log.messages().len(), 51);
    }

    #[test]
    fn test_clear_leaves_single_notice() {
        let mut log = make_log();
        log.push_user("hi");
        log.push_bot(ResolutionResult::text("reply"));
        log.clear();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].text, CHAT_CLEARED);
        assert_eq!(log.messages()[0].sender, Sender::Bot);
    }
}
