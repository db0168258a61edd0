use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{EnquiryError, Result};

/// Top-level configuration for the enquiry bot.
///
/// Loaded from `~/.enquiry/config.toml` by default. Every section is optional
/// and falls back to its defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnquiryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub voice: VoiceConfig,
    #[serde(default)]
    pub awakening: AwakeningConfig,
}

impl EnquiryConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EnquiryConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| EnquiryError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
    /// Dataset file (TOML or JSON). The built-in dataset is used when unset.
    pub dataset_path: Option<String>,
    /// Welcome-screen search terms that offer the institution (substring match).
    pub search_aliases: Vec<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            dataset_path: None,
            search_aliases: vec!["excel".to_string(), "exe".to_string()],
        }
    }
}

/// Chat session settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Simulated thinking delay before a reply is shown, in milliseconds.
    pub reply_delay_ms: u64,
    /// Maximum messages retained in the conversation log.
    pub history_limit: usize,
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 500,
            history_limit: 200,
            max_message_length: 2000,
        }
    }
}

/// Text-to-speech settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Whether replies are spoken.
    pub enabled: bool,
    /// External TTS program (e.g. "espeak"). Replies are only logged when unset.
    pub command: Option<String>,
    /// Speech rate multiplier (1.0 = normal).
    pub rate: f32,
    /// Pitch multiplier (1.0 = normal).
    pub pitch: f32,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: None,
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// Intro animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AwakeningConfig {
    /// Length of the awakening sequence in milliseconds.
    pub duration_ms: u64,
}

impl Default for AwakeningConfig {
    fn default() -> Self {
        Self { duration_ms: 7000 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = EnquiryConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert!(config.general.dataset_path.is_none());
        assert_eq!(config.general.search_aliases, vec!["excel", "exe"]);
        assert_eq!(config.chat.reply_delay_ms, 500);
        assert_eq!(config.chat.history_limit, 200);
        assert!(config.voice.enabled);
        assert_eq!(config.awakening.duration_ms, 7000);
    }

    #[test]
    fn test_partial_toml_uses_section_defaults() {
        let toml_str = r#"
[chat]
reply_delay_ms = 0

[voice]
enabled = false
command = "espeak"
"#;
        let config: EnquiryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.reply_delay_ms, 0);
        assert_eq!(config.chat.max_message_length, 2000);
        assert!(!config.voice.enabled);
        assert_eq!(config.voice.command.as_deref(), Some("espeak"));
        assert_eq!(config.voice.rate, 1.0);
        assert_eq!(config.awakening.duration_ms, 7000);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config: EnquiryConfig = toml::from_str("").unwrap();
        assert_eq!(config, EnquiryConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = EnquiryConfig::default();
        config.general.dataset_path = Some("/srv/college.toml".to_string());
        config.awakening.duration_ms = 1200;
        config.save(&path).unwrap();

        let loaded = EnquiryConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = EnquiryConfig::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, EnquiryError::Io(_)));
    }

    #[test]
    fn test_load_truncated_toml_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[chat\nreply_delay_ms = ").unwrap();
        assert!(matches!(
            EnquiryConfig::load(&path),
            Err(EnquiryError::Config(_))
        ));
    }

    #[test]
    fn test_load_invalid_toml_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "general = 5").unwrap();
        let err = EnquiryConfig::load(&path).unwrap_err();
        assert!(matches!(err, EnquiryError::Config(_)));
    }
}
