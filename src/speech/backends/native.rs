//! Native TTS backend using the tts crate
//!
//! The `tts` crate provides a unified interface to:
//! - Speech Dispatcher on Linux (via native bindings)
//! - AVFoundation on macOS/iOS (via native bindings)
//! - WinRT on Windows
//!
//! None of these platforms emit a voice-catalog-changed notification, so
//! the registered callback is held but never fires; the caller's initial
//! catalog fetch covers the pre-loaded case.

use crate::speech::synth::{
    SpeechRequest, Synth, UtteranceEndCallback, VoiceInfo, VoicesChangedCallback,
};
use crate::{Result, SayError};
use log::{debug, error, warn};
use tts::Tts as TtsCrate;

/// Native TTS backend using the tts crate
pub struct NativeSynth {
    /// The tts crate's TTS instance
    tts: TtsCrate,

    /// Registered catalog-change callback (held, never invoked here)
    voices_changed: Option<VoicesChangedCallback>,
}

impl NativeSynth {
    /// Create a new native TTS synthesizer
    pub fn new() -> Result<Self> {
        debug!("Creating native TTS backend");

        let tts = TtsCrate::default()
            .map_err(|e| SayError::Speech(format!("Failed to initialize TTS: {}", e)))?;

        debug!("Native TTS backend created successfully");

        Ok(Self {
            tts,
            voices_changed: None,
        })
    }

    /// Map a baseline multiplier onto the platform's parameter range
    ///
    /// 1.0 maps to the platform default; 0.0 to the minimum; 2.0 to the
    /// maximum. Platforms use wildly different ranges (Speech Dispatcher
    /// rates run -100..100), so the factor interpolates rather than
    /// multiplies.
    fn convert(normal: f32, min: f32, max: f32, factor: f32) -> f32 {
        if factor >= 1.0 {
            normal + (max - normal) * (factor - 1.0).min(1.0)
        } else {
            min + (normal - min) * factor.max(0.0)
        }
    }

    /// Select the platform voice matching `info` by identifier
    fn apply_voice(&mut self, info: &VoiceInfo) -> Result<()> {
        let voices = self
            .tts
            .voices()
            .map_err(|e| SayError::Catalog(format!("Failed to get voices: {}", e)))?;

        match voices.iter().find(|v| v.id() == info.id) {
            Some(voice) => {
                debug!("Selecting voice: {} ({})", info.name, info.language);
                self.tts
                    .set_voice(voice)
                    .map_err(|e| SayError::Speech(format!("Failed to set voice: {}", e)))
            }
            None => Err(SayError::Speech(format!(
                "Voice no longer available: {}",
                info.name
            ))),
        }
    }
}

impl Synth for NativeSynth {
    fn voices(&self) -> Result<Vec<VoiceInfo>> {
        let features = self.tts.supported_features();
        if !features.voice {
            debug!("Voice enumeration not supported on this platform");
            return Ok(Vec::new());
        }

        let voices = self
            .tts
            .voices()
            .map_err(|e| SayError::Catalog(format!("Failed to get voices: {}", e)))?;

        Ok(voices
            .iter()
            .map(|v| VoiceInfo {
                id: v.id(),
                name: v.name(),
                language: v.language().to_string(),
            })
            .collect())
    }

    fn speak(&mut self, request: &SpeechRequest) -> Result<()> {
        let features = self.tts.supported_features();

        if features.pitch {
            let pitch = Self::convert(
                self.tts.normal_pitch(),
                self.tts.min_pitch(),
                self.tts.max_pitch(),
                request.pitch,
            );
            self.tts
                .set_pitch(pitch)
                .map_err(|e| SayError::Speech(format!("Failed to set pitch: {}", e)))?;
        } else if request.pitch != 1.0 {
            warn!("Pitch control not supported on this platform");
        }

        if features.rate {
            let rate = Self::convert(
                self.tts.normal_rate(),
                self.tts.min_rate(),
                self.tts.max_rate(),
                request.rate,
            );
            self.tts
                .set_rate(rate)
                .map_err(|e| SayError::Speech(format!("Failed to set rate: {}", e)))?;
        } else if request.rate != 1.0 {
            warn!("Rate control not supported on this platform");
        }

        if features.volume {
            let volume = Self::convert(
                self.tts.normal_volume(),
                self.tts.min_volume(),
                self.tts.max_volume(),
                request.volume,
            );
            self.tts
                .set_volume(volume)
                .map_err(|e| SayError::Speech(format!("Failed to set volume: {}", e)))?;
        } else if request.volume != 1.0 {
            warn!("Volume control not supported on this platform");
        }

        if let Some(voice) = &request.voice {
            if features.voice {
                self.apply_voice(voice)?;
            } else {
                warn!("Voice selection not supported on this platform");
            }
        }

        debug!("Speaking ({}): {}", request.lang, request.text);
        let utterance = self.tts.speak(request.text.as_str(), false).map_err(|e| {
            error!("Failed to speak: {}", e);
            SayError::Speech(format!("Speak failed: {}", e))
        })?;
        debug!("Queued utterance: {:?}", utterance);

        Ok(())
    }

    fn set_voices_changed_callback(&mut self, cb: Option<VoicesChangedCallback>) -> Result<()> {
        if cb.is_some() {
            debug!("Platform emits no voice catalog notifications; callback registered but dormant");
        }
        self.voices_changed = cb;
        Ok(())
    }

    fn set_utterance_end_callback(&mut self, cb: Option<UtteranceEndCallback>) -> Result<()> {
        let features = self.tts.supported_features();
        if !features.utterance_callbacks {
            debug!("Utterance callbacks not supported on this platform");
            return Ok(());
        }

        match cb {
            Some(mut cb) => self
                .tts
                .on_utterance_end(Some(Box::new(move |utterance| {
                    debug!("Utterance finished: {:?}", utterance);
                    cb();
                })))
                .map_err(|e| {
                    SayError::Speech(format!("Failed to set utterance callback: {}", e))
                }),
            None => self
                .tts
                .on_utterance_end(None)
                .map_err(|e| SayError::Speech(format!("Failed to clear utterance callback: {}", e))),
        }
    }
}
