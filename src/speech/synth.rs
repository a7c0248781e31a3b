//! Speech synthesizer abstraction
//!
//! Provides a unified interface to the host platform's speech synthesis
//! capability: enumerate voices, get notified when the voice catalog
//! changes, and hand off playback requests. The program never owns
//! playback state; the host does.

use crate::Result;
use log::info;

/// A read-only snapshot record for one host voice
///
/// Owned copy of what the platform reported; `language` is the voice's
/// BCP-47 tag and is what the dispatcher matches against the selected
/// locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceInfo {
    /// Backend-specific stable identifier
    pub id: String,
    /// Human-readable voice name (e.g. "Samantha")
    pub name: String,
    /// BCP-47 locale tag (e.g. "en-US")
    pub language: String,
}

/// A single playback request, built per invocation and then discarded
///
/// Pitch, rate, and volume are multipliers with 1.0 as the unmodified
/// baseline. The voice starts out absent and is filled in by the
/// dispatcher once a catalog match is found.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeechRequest {
    /// Text to speak
    pub text: String,
    /// Locale tag the request was made for
    pub lang: String,
    /// Matched voice, if any
    pub voice: Option<VoiceInfo>,
    /// Pitch multiplier, 1.0 = platform default
    pub pitch: f32,
    /// Rate multiplier, 1.0 = platform default
    pub rate: f32,
    /// Volume multiplier, 1.0 = platform default
    pub volume: f32,
}

impl SpeechRequest {
    /// Create a request at the unmodified baseline with no voice yet
    pub fn new(text: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: lang.into(),
            voice: None,
            pitch: 1.0,
            rate: 1.0,
            volume: 1.0,
        }
    }
}

/// Callback invoked when the host's voice catalog changes
pub type VoicesChangedCallback = Box<dyn FnMut() + Send>;

/// Callback invoked when an utterance finishes playing
pub type UtteranceEndCallback = Box<dyn FnMut() + Send>;

/// Host speech synthesis contract
///
/// All backends implement this. The catalog is reached through a
/// subscribe/notify relationship: callers hold read-only snapshots from
/// `voices()` and re-fetch when the voices-changed callback fires.
pub trait Synth: Send {
    /// Fetch the current voice catalog
    ///
    /// An empty catalog is a normal state (the platform may not have
    /// loaded its voices yet, or may have none installed), not an error.
    fn voices(&self) -> Result<Vec<VoiceInfo>>;

    /// Hand a playback request to the platform, fire-and-forget
    fn speak(&mut self, request: &SpeechRequest) -> Result<()>;

    /// Subscribe (`Some`) or unsubscribe (`None`) to catalog changes
    ///
    /// Platforms without such a notification hold the callback and never
    /// invoke it; the initial `voices()` fetch covers them.
    fn set_voices_changed_callback(&mut self, cb: Option<VoicesChangedCallback>) -> Result<()>;

    /// Subscribe (`Some`) or unsubscribe (`None`) to utterance completion
    ///
    /// Diagnostic only. Backends without utterance callbacks accept and
    /// ignore the registration.
    fn set_utterance_end_callback(&mut self, cb: Option<UtteranceEndCallback>) -> Result<()>;
}

/// Create the platform speech synthesizer
///
/// Uses the `tts` crate's native bindings: Speech Dispatcher on Linux,
/// AVFoundation on macOS, WinRT on Windows.
pub fn create_synth() -> Result<Box<dyn Synth>> {
    let platform = std::env::consts::OS;
    info!("Creating speech synthesizer for platform: {}", platform);

    use super::backends::native::NativeSynth;

    match NativeSynth::new() {
        Ok(synth) => {
            info!("✓ Successfully initialized native TTS backend");
            Ok(Box::new(synth))
        }
        Err(e) if platform == "linux" => Err(crate::SayError::Speech(format!(
            "No speech backend available on Linux \
             (install: sudo apt install speech-dispatcher). Error: {}",
            e
        ))),
        Err(e) => Err(crate::SayError::Speech(format!(
            "Failed to initialize speech backend for platform '{}': {}",
            platform, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_baseline() {
        let request = SpeechRequest::new("hello", "en-US");
        assert_eq!(request.text, "hello");
        assert_eq!(request.lang, "en-US");
        assert!(request.voice.is_none());
        assert_eq!(request.pitch, 1.0);
        assert_eq!(request.rate, 1.0);
        assert_eq!(request.volume, 1.0);
    }
}
