//! Conversational interface for the institutional enquiry bot.
//!
//! Provides keyword-based query resolution over a static dataset, the
//! conversation log, spoken replies, and the session that ties them together.

pub mod context;
pub mod error;
pub mod orchestrator;
pub mod resolver;
pub mod response;
pub mod rules;
pub mod types;
pub mod voice;

pub use context::ConversationLog;
pub use error::ChatError;
pub use orchestrator::{EnquirySession, QUICK_ACTIONS};
pub use resolver::QueryResolver;
pub use types::{Category, ChatMessage, ResolutionResult, Sender};
pub use voice::{Announcer, CommandAnnouncer, LogAnnouncer, SilentAnnouncer, VoiceInterface};
