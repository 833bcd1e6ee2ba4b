// SPDX-License-Identifier: MPL-2.0
//! Error display state sub-component.

use crate::error::Error;
use crate::i18n::fluent::I18n;

/// Error state for displaying user-friendly errors with optional details.
#[derive(Debug, Clone)]
pub struct State {
    /// i18n key for the friendly error message.
    friendly_key: &'static str,
    /// Translated friendly error message.
    friendly_text: String,
    /// Technical error details.
    details: String,
    /// Whether to show the technical details.
    show_details: bool,
}

/// Messages for the error state sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Toggle visibility of technical details.
    ToggleDetails,
}

impl State {
    /// Create a new error state from a lifecycle error.
    #[must_use]
    pub fn new(error: &Error, i18n: &I18n) -> Self {
        let friendly_key = error.i18n_key();
        Self {
            friendly_key,
            friendly_text: i18n.tr(friendly_key),
            details: error.to_string(),
            show_details: false,
        }
    }

    /// Handle an error state message.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ToggleDetails => self.show_details = !self.show_details,
        }
    }

    /// Refresh the translation when locale changes.
    pub fn refresh_translation(&mut self, i18n: &I18n) {
        self.friendly_text = i18n.tr(self.friendly_key);
    }

    /// Get the friendly error message.
    #[must_use]
    pub fn friendly_text(&self) -> &str {
        &self.friendly_text
    }

    /// Get the technical error details.
    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    /// Check if details are currently shown.
    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn toggle_details_flips_state() {
        let i18n = I18n::default();
        let mut state = State::new(&Error::Io("boom".into()), &i18n);
        assert!(!state.show_details());
        state.handle(Message::ToggleDetails);
        assert!(state.show_details());
        state.handle(Message::ToggleDetails);
        assert!(!state.show_details());
    }

    #[test]
    fn details_carry_the_technical_message() {
        let i18n = I18n::default();
        let state = State::new(&Error::Network(NetworkError::Status(404)), &i18n);
        assert!(state.details().contains("404"));
    }

    #[test]
    fn friendly_text_is_translated() {
        let i18n = I18n::default();
        let state = State::new(&Error::Io("disk".into()), &i18n);
        assert!(!state.friendly_text().starts_with("MISSING:"));
    }
}
