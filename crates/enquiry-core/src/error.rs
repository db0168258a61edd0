use thiserror::Error;

/// Top-level error type for the enquiry bot.
///
/// The query resolver itself never fails; these errors come from the edges
/// (config and dataset loading, front-end view transitions). Subsystem crates
/// implement `From<EnquiryError>` for their own error types so that `?`
/// works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EnquiryError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid view transition: {from} -> {to}")]
    InvalidTransition { from: String, to: String },
}

impl From<toml::de::Error> for EnquiryError {
    fn from(err: toml::de::Error) -> Self {
        EnquiryError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for EnquiryError {
    fn from(err: toml::ser::Error) -> Self {
        EnquiryError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for EnquiryError {
    fn from(err: serde_json::Error) -> Self {
        EnquiryError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for enquiry operations.
pub type Result<T> = std::result::Result<T, EnquiryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EnquiryError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_error_display_all_variants() {
        let cases: Vec<(EnquiryError, &str)> = vec![
            (
                EnquiryError::Config("bad key".to_string()),
                "Configuration error: bad key",
            ),
            (
                EnquiryError::Dataset("no routes".to_string()),
                "Dataset error: no routes",
            ),
            (
                EnquiryError::Serialization("invalid json".to_string()),
                "Serialization error: invalid json",
            ),
            (
                EnquiryError::InvalidTransition {
                    from: "Welcome".to_string(),
                    to: "Chat".to_string(),
                },
                "Invalid view transition: Welcome -> Chat",
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.to_string(), expected);
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EnquiryError = io_err.into();
        assert!(matches!(err, EnquiryError::Io(_)));
        assert!(err.to_string().starts_with("I/O error:"));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let err: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        let err: EnquiryError = err.unwrap_err().into();
        assert!(matches!(err, EnquiryError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let err: std::result::Result<serde_json::Value, _> = serde_json::from_str("{ nope }");
        let err: EnquiryError = err.unwrap_err().into();
        assert!(matches!(err, EnquiryError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let value = io_result?;
            Ok(value.to_string())
        }

        assert_eq!(inner().unwrap(), "42");
    }
}
