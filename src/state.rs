//! Per-session UI state
//!
//! Holds the two pieces of mutable state the program owns: the text the
//! user has typed and the language they have selected. Created on start,
//! discarded on exit; nothing here persists across runs.

use crate::locales;

/// Mutable UI state for one session
///
/// `input_text` changes with every typed line; the selected locale only
/// changes through [`UiState::set_locale`], which keeps the invariant
/// that it is always one of the listed locale codes.
#[derive(Debug)]
pub struct UiState {
    /// Text waiting to be spoken
    pub input_text: String,

    /// Currently selected locale code, always one of the table entries
    selected_locale: &'static str,
}

impl UiState {
    /// Create state with empty text and the default locale selected
    pub fn new() -> Self {
        Self {
            input_text: String::new(),
            selected_locale: locales::default_locale().code,
        }
    }

    /// Replace the input text
    pub fn set_text(&mut self, text: &str) {
        self.input_text = text.to_string();
    }

    /// Select a locale by code
    ///
    /// `code` must come from the locale table; the selection UI only
    /// offers listed values, so this is not validated defensively.
    pub fn set_locale(&mut self, code: &str) {
        debug_assert!(locales::is_listed(code), "unlisted locale code {}", code);

        // Borrow the 'static code from the table entry rather than the caller
        if let Some(opt) = locales::find(code) {
            self.selected_locale = opt.code;
        }
    }

    /// The currently selected locale code
    pub fn selected_locale(&self) -> &'static str {
        self.selected_locale
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = UiState::new();
        assert_eq!(state.input_text, "");
        assert_eq!(state.selected_locale(), locales::default_locale().code);
    }

    #[test]
    fn test_set_text() {
        let mut state = UiState::new();
        state.set_text("hello");
        assert_eq!(state.input_text, "hello");

        state.set_text("");
        assert_eq!(state.input_text, "");
    }

    #[test]
    fn test_set_locale() {
        let mut state = UiState::new();
        state.set_locale("en-US");
        assert_eq!(state.selected_locale(), "en-US");
    }

    #[test]
    fn test_locale_survives_text_changes() {
        let mut state = UiState::new();
        state.set_locale("fr-FR");
        state.set_text("bonjour");
        state.set_text("");
        assert_eq!(state.selected_locale(), "fr-FR");
    }
}
