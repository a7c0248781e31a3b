//! Polysay - speak typed text in a chosen language
//!
//! A small interactive program that reads text aloud through the host
//! platform's speech synthesizer, matching a voice to a selected locale.

pub mod controller;
pub mod error;
pub mod locales;
pub mod speech;
pub mod state;

pub use error::{Result, SayError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "polysay";
