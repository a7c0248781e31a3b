//! Speech synthesis backends
//!
//! Backend implementations of the [`Synth`](super::synth::Synth) trait.

pub mod native;
