//! Speech request controller
//!
//! Ties the three responsibilities together: keeping a local snapshot of
//! the host voice catalog current, holding the session's UI state, and
//! turning (text, locale, snapshot) into playback requests.

use crate::speech::{SpeechRequest, Synth, VoiceInfo};
use crate::state::UiState;
use crate::{Result, SayError};
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// Why a dispatch attempt produced no playback
///
/// `EmptyText` and `NoVoiceForLocale` are user notices: terminal for that
/// one invocation, leaving all state unchanged. Host failures pass
/// through untouched.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("please enter text")]
    EmptyText,

    #[error("no voice available for this language")]
    NoVoiceForLocale,

    #[error(transparent)]
    Speech(#[from] SayError),
}

impl DispatchError {
    /// Whether this is a user notice rather than a host failure
    pub fn is_notice(&self) -> bool {
        matches!(self, DispatchError::EmptyText | DispatchError::NoVoiceForLocale)
    }
}

/// Controller owning the UI state and the voice catalog snapshot
///
/// The catalog is reached via subscribe/notify: the voices-changed
/// callback only flips a shared flag (it may run outside the main
/// thread), and [`SpeechController::poll_catalog`] does the re-fetch and
/// wholesale snapshot replacement on the next turn.
pub struct SpeechController {
    /// Host speech synthesizer
    synth: Box<dyn Synth>,

    /// Read-only snapshot of the host voice catalog
    /// Replaced wholesale on refresh, never patched
    voices: Vec<VoiceInfo>,

    /// Set by the voices-changed callback, cleared by poll_catalog
    catalog_dirty: Arc<AtomicBool>,

    /// Session UI state (input text + selected locale)
    pub state: UiState,
}

impl SpeechController {
    /// Create a controller around a synthesizer
    ///
    /// Subscribes to catalog changes, wires the diagnostic utterance-end
    /// observer, and fetches the catalog once up front so platforms that
    /// pre-load their voices and never notify are covered.
    pub fn new(mut synth: Box<dyn Synth>) -> Result<Self> {
        let catalog_dirty = Arc::new(AtomicBool::new(false));

        let flag = Arc::clone(&catalog_dirty);
        synth.set_voices_changed_callback(Some(Box::new(move || {
            flag.store(true, Ordering::Relaxed);
        })))?;

        // Diagnostic only; no effect on state or control flow
        synth.set_utterance_end_callback(Some(Box::new(|| {
            debug!("Utterance finished");
        })))?;

        let voices = synth.voices()?;
        info!("Voice catalog loaded: {} voices", voices.len());

        Ok(Self {
            synth,
            voices,
            catalog_dirty,
            state: UiState::new(),
        })
    }

    /// Refresh the snapshot if a catalog change was signalled
    ///
    /// Returns whether a refresh happened. A catalog with zero voices is
    /// a normal state, not an error, and no retry is made.
    pub fn poll_catalog(&mut self) -> Result<bool> {
        if !self.catalog_dirty.swap(false, Ordering::Relaxed) {
            return Ok(false);
        }

        self.voices = self.synth.voices()?;
        info!("Voice catalog refreshed: {} voices", self.voices.len());
        Ok(true)
    }

    /// The current voice snapshot
    pub fn voices(&self) -> &[VoiceInfo] {
        &self.voices
    }

    /// Attempt to speak the current input text in the selected locale
    ///
    /// Each call is an independent, fully re-evaluated attempt: refresh
    /// the snapshot if needed, check the text, match a voice to the
    /// locale (first entry whose language equals the selected code
    /// exactly; no language-only fallback), and hand the request to the
    /// host without waiting for completion.
    pub fn dispatch(&mut self) -> std::result::Result<(), DispatchError> {
        self.poll_catalog()?;

        if self.state.input_text.is_empty() {
            return Err(DispatchError::EmptyText);
        }

        let locale = self.state.selected_locale();
        let mut request = SpeechRequest::new(self.state.input_text.clone(), locale);

        request.voice = self
            .voices
            .iter()
            .find(|voice| voice.language == locale)
            .cloned();

        if request.voice.is_none() {
            return Err(DispatchError::NoVoiceForLocale);
        }

        debug!(
            "Dispatching speech request: {} chars, locale {}, voice {:?}",
            request.text.len(),
            request.lang,
            request.voice.as_ref().map(|v| v.name.as_str())
        );

        self.synth.speak(&request)?;
        Ok(())
    }
}

impl Drop for SpeechController {
    fn drop(&mut self) {
        // Unsubscribe so the synthesizer holds no dangling callbacks
        let _ = self.synth.set_voices_changed_callback(None);
        let _ = self.synth.set_utterance_end_callback(None);
        debug!("Voice catalog subscription released");
    }
}
