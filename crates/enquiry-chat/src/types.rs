//! Shared types for the resolver and the chat session.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Resolution
// =============================================================================

/// Query classification. Checked in declaration order; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    DiplomaCourses,
    EngineeringCourses,
    MedicalCourses,
    Placements,
    CampusList,
    GeneralInfo,
    Photo,
    Fallback,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Transport => "transport",
            Category::DiplomaCourses => "diploma_courses",
            Category::EngineeringCourses => "engineering_courses",
            Category::MedicalCourses => "medical_courses",
            Category::Placements => "placements",
            Category::CampusList => "campus_list",
            Category::GeneralInfo => "general_info",
            Category::Photo => "photo",
            Category::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// What the resolver answers with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionResult {
    /// Reply text; `\n` separates display lines.
    pub text: String,
    /// Image URL, set only for photo replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ResolutionResult {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            image: None,
        }
    }

    pub fn with_image(text: impl Into<String>, image: Option<String>) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    /// Reply text split into display lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

// =============================================================================
// Conversation
// =============================================================================

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    Bot,
    User,
}

/// A single entry in the conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub timestamp: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ChatMessage {
    pub fn bot(result: ResolutionResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: result.text,
            sender: Sender::Bot,
            timestamp: Local::now(),
            image: result.image,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            timestamp: Local::now(),
            image: None,
        }
    }

    /// Display time, e.g. "09:05".
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serializes_without_image() {
        let json = serde_json::to_value(ResolutionResult::text("hello")).unwrap();
        assert_eq!(json, serde_json::json!({ "text": "hello" }));
    }

    #[test]
    fn test_result_serializes_with_image() {
        let r = ResolutionResult::with_image("Campus View", Some("https://x/1.jpg".into()));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["image"], "https://x/1.jpg");
    }

    #[test]
    fn test_result_lines() {
        let r = ResolutionResult::text("a\nb\nc");
        assert_eq!(r.lines().collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Transport.to_string(), "transport");
        assert_eq!(Category::Fallback.to_string(), "fallback");
    }

    #[test]
    fn test_bot_message_carries_image() {
        let msg = ChatMessage::bot(ResolutionResult::with_image("Campus View", Some("u".into())));
        assert_eq!(msg.sender, Sender::Bot);
        assert_eq!(msg.image.as_deref(), Some("u"));
    }

    #[test]
    fn test_user_messages_get_distinct_ids() {
        let a = ChatMessage::user("hi");
        let b = ChatMessage::user("hi");
        assert_ne!(a.id, b.id);
        assert_eq!(a.time_label().len(), 5);
    }
}
