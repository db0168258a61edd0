//! Chat session: wires the resolver, conversation log and voice together.
//!
//! The session owns the photo cursor, so every caller that shares a session
//! sees one rotation.

use std::sync::Arc;

use enquiry_core::config::ChatConfig;
use enquiry_core::types::{Dataset, PhotoCursor};
use tracing::{debug, info};

use crate::context::ConversationLog;
use crate::error::ChatError;
use crate::resolver::QueryResolver;
use crate::response;
use crate::types::ChatMessage;
use crate::voice::VoiceInterface;

/// One-tap shortcuts offered under the chat box, as `(label, query)`.
pub const QUICK_ACTIONS: &[(&str, &str)] = &[
    ("Campus Photos", "Show me a photo"),
    ("Medical Courses", "List medical courses"),
    ("Engineering", "List engineering courses"),
    ("Diploma", "List diploma courses"),
    ("Bus Routes", "Tell me about bus routes"),
    ("Placements", "Placement details"),
];

/// A single user's conversation with the bot.
#[derive(Debug)]
pub struct EnquirySession {
    resolver: QueryResolver,
    cursor: PhotoCursor,
    log: ConversationLog,
    voice: VoiceInterface,
    config: ChatConfig,
}

impl EnquirySession {
    pub fn new(dataset: Arc<Dataset>, config: ChatConfig, voice: VoiceInterface) -> Self {
        let greeting = response::greeting(&dataset.organization);
        let log = ConversationLog::new(greeting, config.history_limit);
        Self {
            resolver: QueryResolver::new(dataset),
            cursor: PhotoCursor::default(),
            log,
            voice,
            config,
        }
    }

    /// Speak the opening greeting. Called when the chat view opens.
    pub fn greet(&self) {
        self.voice
            .speak(&response::greeting(&self.resolver.dataset().organization));
    }

    /// Handle one submitted message and return the bot's reply.
    ///
    /// Blank input is rejected without touching the log. The resolver sees
    /// the message exactly as typed.
    pub fn submit(&mut self, input: &str) -> Result<ChatMessage, ChatError> {
        if input.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if input.chars().count() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        self.log.push_user(input);

        let (result, cursor) = self.resolver.resolve(input, self.cursor);
        self.cursor = cursor;
        debug!(cursor = cursor.index(), has_image = result.image.is_some(), "Reply resolved");

        let reply = self.log.push_bot(result).clone();
        self.voice.speak(&reply.text);
        Ok(reply)
    }

    /// Submit the query behind a quick-action label (case-insensitive).
    pub fn submit_quick_action(&mut self, label: &str) -> Result<ChatMessage, ChatError> {
        let query = QUICK_ACTIONS
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label.trim()))
            .map(|(_, q)| *q)
            .ok_or_else(|| ChatError::UnknownQuickAction(label.to_string()))?;
        self.submit(query)
    }

    pub fn clear(&mut self) {
        self.log.clear();
        info!("Chat cleared");
    }

    /// Flip the mute toggle. Returns whether voice is now enabled.
    pub fn toggle_voice(&mut self) -> bool {
        self.voice.toggle()
    }

    pub fn voice_enabled(&self) -> bool {
        self.voice.enabled
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.log.messages()
    }

    pub fn cursor(&self) -> PhotoCursor {
        self.cursor
    }

    pub fn resolver(&self) -> &QueryResolver {
        &self.resolver
    }
}

// =============================================================================
// Tests
// =============================================================================
