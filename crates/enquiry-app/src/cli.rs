//! CLI argument definitions for the enquiry bot.
//!
//! Uses `clap` with derive macros for ergonomic argument parsing.
//! Priority resolution: CLI args > env vars > config file > defaults.

use clap::Parser;
use enquiry_core::config::EnquiryConfig;
use std::path::PathBuf;

/// Enquiry bot: answers questions about the college from a static dataset.
#[derive(Parser, Debug)]
#[command(name = "enquiry", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Dataset file (TOML or JSON). Defaults to the built-in dataset.
    #[arg(short = 'd', long = "dataset")]
    pub dataset: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Do not speak replies.
    #[arg(long = "no-voice")]
    pub no_voice: bool,

    /// Go straight to the chat, skipping college search and the awakening sequence.
    #[arg(long = "skip-intro")]
    pub skip_intro: bool,

    /// Answer a single query and exit.
    #[arg(short = 'a', long = "ask")]
    pub ask: Option<String>,

    /// With --ask, print the reply as JSON.
    #[arg(long = "json", requires = "ask")]
    pub json: bool,

    /// Write the active dataset to this path (TOML, or JSON for .json) and exit.
    #[arg(long = "export-dataset")]
    pub export_dataset: Option<PathBuf>,
}

impl CliArgs {
    /// Resolve the configuration file path.
    ///
    /// Priority: --config flag > ENQUIRY_CONFIG env var > platform default (~/.enquiry/config.toml).
    pub fn resolve_config_path(&self) -> PathBuf {
        if let Some(ref p) = self.config {
            return p.clone();
        }
        if let Ok(p) = std::env::var("ENQUIRY_CONFIG") {
            return PathBuf::from(p);
        }
        default_config_path()
    }

    /// Resolve the log level.
    ///
    /// Priority: --log-level flag > config file value.
    pub fn resolve_log_level(&self, config: &EnquiryConfig) -> String {
        self.log_level
            .clone()
            .unwrap_or_else(|| config.general.log_level.clone())
    }

    /// Apply flag overrides on top of the loaded configuration.
    pub fn apply_overrides(&self, config: &mut EnquiryConfig) {
        if let Some(ref p) = self.dataset {
            config.general.dataset_path = Some(p.to_string_lossy().to_string());
        }
        if let Some(ref level) = self.log_level {
            config.general.log_level = level.clone();
        }
        if self.no_voice {
            config.voice.enabled = false;
        }
    }
}

/// Default config file path for the current platform.
fn default_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    if let Ok(home) = std::env::var("USERPROFILE") {
        return PathBuf::from(home).join(".enquiry").join("config.toml");
    }
    #[cfg(not(target_os = "windows"))]
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".enquiry").join("config.toml");
    }
    PathBuf::from("config.toml")
}
