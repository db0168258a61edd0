//! Error types for the chat session.

use enquiry_core::error::EnquiryError;

/// Errors from the chat session. The resolver itself never produces one.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("unknown quick action: {0}")]
    UnknownQuickAction(String),
    #[error("voice error: {0}")]
    VoiceError(String),
    #[error("core error: {0}")]
    Core(String),
}

impl From<EnquiryError> for ChatError {
    fn from(err: EnquiryError) -> Self {
        ChatError::Core(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(ChatError::EmptyMessage.to_string(), "message cannot be empty");
        assert_eq!(
            ChatError::MessageTooLong(2000).to_string(),
            "message exceeds maximum length of 2000 characters"
        );
        assert_eq!(
            ChatError::UnknownQuickAction("Hostel".into()).to_string(),
            "unknown quick action: Hostel"
        );
        assert_eq!(
            ChatError::VoiceError("no device".into()).to_string(),
            "voice error: no device"
        );
    }

    #[test]
    fn test_from_enquiry_error() {
        let core = EnquiryError::Dataset("routes missing".to_string());
        let err: ChatError = core.into();
        assert!(matches!(err, ChatError::Core(_)));
        assert_eq!(err.to_string(), "core error: Dataset error: routes missing");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&ChatError::EmptyMessage);
    }
}
