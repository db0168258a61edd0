//! Spoken replies.
//!
//! An [`Announcer`] turns reply text into speech, fire-and-forget. Nothing it
//! does is reported back to the caller; failures are logged and dropped.

use std::process::{Child, Command, Stdio};
use std::sync::Mutex;

use tracing::{debug, info, warn};

/// Something that can speak reply text.
pub trait Announcer: Send + Sync {
    /// Speak `text`, replacing any utterance still playing. Must return
    /// promptly; playback may continue afterwards.
    fn announce(&self, text: &str);

    /// Stop any utterance still playing.
    fn cancel(&self) {}
}

/// Announcer that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&self, _text: &str) {}
}

/// Announcer that only records the utterance in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAnnouncer;

impl Announcer for LogAnnouncer {
    fn announce(&self, text: &str) {
        info!(chars = text.chars().count(), "Announcing reply");
        debug!(text, "Announcement text");
    }
}

/// Speaks through an external TTS program with espeak-style flags
/// (`-s <words per minute> -p <pitch 0-99> <text>`).
///
/// A new announcement kills the previous one if it is still running.
pub struct CommandAnnouncer {
    program: String,
    rate: f32,
    pitch: f32,
    current: Mutex<Option<Child>>,
}

impl CommandAnnouncer {
    /// espeak's default speed in words per minute.
    const BASE_WPM: f32 = 175.0;
    /// espeak's default pitch.
    const BASE_PITCH: f32 = 50.0;

    pub fn new(program: impl Into<String>, rate: f32, pitch: f32) -> Self {
        Self {
            program: program.into(),
            rate,
            pitch,
            current: Mutex::new(None),
        }
    }

    /// Arguments passed to the program for `text`.
    pub fn args(&self, text: &str) -> Vec<String> {
        let wpm = (Self::BASE_WPM * self.rate).round().max(1.0) as u32;
        let pitch = (Self::BASE_PITCH * self.pitch).round().clamp(0.0, 99.0) as u32;
        vec![
            "-s".to_string(),
            wpm.to_string(),
            "-p".to_string(),
            pitch.to_string(),
            text.to_string(),
        ]
    }

    fn stop_current(slot: &mut Option<Child>) {
        if let Some(mut child) = slot.take() {
            if let Ok(Some(_)) = child.try_wait() {
                return;
            }
            if let Err(e) = child.kill() {
                debug!(error = %e, "Previous utterance already gone");
            }
            let _ = child.wait();
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn announce(&self, text: &str) {
        let mut slot = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Self::stop_current(&mut slot);

        match Command::new(&self.program)
            .args(self.args(text))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(child) => *slot = Some(child),
            Err(e) => warn!(program = %self.program, error = %e, "Failed to start speech program"),
        }
    }

    fn cancel(&self) {
        let mut slot = match self.current.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Self::stop_current(&mut slot);
    }
}

impl Drop for CommandAnnouncer {
    fn drop(&mut self) {
        if let Ok(slot) = self.current.get_mut() {
            Self::stop_current(slot);
        }
    }
}

// =============================================================================
// VoiceInterface
// =============================================================================

/// An announcer plus the user's mute toggle.
pub struct VoiceInterface {
    announcer: Box<dyn Announcer>,
    /// Whether replies are spoken.
    pub enabled: bool,
}

impl VoiceInterface {
    pub fn new(announcer: Box<dyn Announcer>, enabled: bool) -> Self {
        Self { announcer, enabled }
    }

    /// A voice interface that never speaks.
    pub fn silent() -> Self {
        Self::new(Box::new(SilentAnnouncer), false)
    }

    /// Cancel whatever is playing, then speak `text` if enabled.
    pub fn speak(&self, text: &str) {
        if !self.enabled {
            return;
        }
        self.announcer.announce(text);
    }

    /// Flip mute. Muting stops the current utterance. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.enabled = !self.enabled;
        if !self.enabled {
            self.announcer.cancel();
        }
        info!(enabled = self.enabled, "Voice toggled");
        self.enabled
    }
}

impl std::fmt::Debug for VoiceInterface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VoiceInterface")
            .field("enabled", &self.enabled)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
