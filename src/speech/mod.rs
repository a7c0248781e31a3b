//! Speech synthesis system

pub mod backends;
pub mod synth;

pub use synth::{
    create_synth, SpeechRequest, Synth, UtteranceEndCallback, VoiceInfo, VoicesChangedCallback,
};
