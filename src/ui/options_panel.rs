// SPDX-License-Identifier: MPL-2.0
//! Sanitization options panel.
//!
//! A bag of independent controls: a checkbox per cleaning action, a radio
//! group for redaction depth, a stepper for cleaning passes (clamped at
//! zero), a preview toggle and a profile dropdown. None of these are
//! wired to a cleaning backend yet; the panel only records selections so
//! the rest of the workflow can be demonstrated. No control constrains
//! any other.

use crate::config::defaults::{DEFAULT_CLEANING_PASSES, MAX_CLEANING_PASSES, MIN_CLEANING_PASSES};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, checkbox, container, pick_list, radio, text, toggler, Column, Row};
use iced::{alignment, Element, Length};
use std::collections::HashMap;
use std::fmt;

/// Cleaning actions offered as checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SanitizeOption {
    StripMetadata,
    RemoveNotes,
    RedactHidden,
    FlattenEmbeds,
}

impl SanitizeOption {
    pub const ALL: [SanitizeOption; 4] = [
        SanitizeOption::StripMetadata,
        SanitizeOption::RemoveNotes,
        SanitizeOption::RedactHidden,
        SanitizeOption::FlattenEmbeds,
    ];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SanitizeOption::StripMetadata => "options-strip-metadata",
            SanitizeOption::RemoveNotes => "options-remove-notes",
            SanitizeOption::RedactHidden => "options-redact-hidden",
            SanitizeOption::FlattenEmbeds => "options-flatten-embeds",
        }
    }
}

/// Radio choice for how far redaction reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RedactionDepth {
    #[default]
    Marked,
    Aggressive,
}

impl RedactionDepth {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            RedactionDepth::Marked => "options-depth-marked",
            RedactionDepth::Aggressive => "options-depth-aggressive",
        }
    }
}

/// Named option presets for the dropdown. Selecting one does not (yet)
/// rewrite the other controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    #[default]
    Standard,
    Strict,
    Custom,
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Standard, Profile::Strict, Profile::Custom];
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Profile::Standard => "Standard",
            Profile::Strict => "Strict",
            Profile::Custom => "Custom",
        };
        write!(f, "{}", name)
    }
}

/// Options panel state.
#[derive(Debug, Clone)]
pub struct State {
    selected: HashMap<SanitizeOption, bool>,
    depth: RedactionDepth,
    passes: u32,
    preview: bool,
    profile: Profile,
}

impl Default for State {
    fn default() -> Self {
        let mut selected = HashMap::new();
        for option in SanitizeOption::ALL {
            selected.insert(option, false);
        }
        // Stripping metadata is the one action everyone wants
        selected.insert(SanitizeOption::StripMetadata, true);

        Self {
            selected,
            depth: RedactionDepth::default(),
            passes: DEFAULT_CLEANING_PASSES,
            preview: false,
            profile: Profile::default(),
        }
    }
}

/// Messages for the options panel.
#[derive(Debug, Clone)]
pub enum Message {
    OptionToggled(SanitizeOption, bool),
    DepthSelected(RedactionDepth),
    PassesIncremented,
    PassesDecremented,
    PreviewToggled(bool),
    ProfileSelected(Profile),
}

impl State {
    /// Handle a panel message. Selections are recorded and nothing else
    /// happens; the cleaning backend this feeds is not implemented.
    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::OptionToggled(option, value) => {
                self.selected.insert(option, value);
            }
            Message::DepthSelected(depth) => self.depth = depth,
            Message::PassesIncremented => {
                self.passes = (self.passes + 1).min(MAX_CLEANING_PASSES);
            }
            Message::PassesDecremented => {
                self.passes = self.passes.saturating_sub(1).max(MIN_CLEANING_PASSES);
            }
            Message::PreviewToggled(value) => self.preview = value,
            Message::ProfileSelected(profile) => self.profile = profile,
        }
    }

    /// Whether a cleaning action is currently ticked.
    #[must_use]
    pub fn is_selected(&self, option: SanitizeOption) -> bool {
        self.selected.get(&option).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn depth(&self) -> RedactionDepth {
        self.depth
    }

    #[must_use]
    pub fn passes(&self) -> u32 {
        self.passes
    }

    #[must_use]
    pub fn preview(&self) -> bool {
        self.preview
    }

    #[must_use]
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Renders the sidebar panel.
    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        let mut column = Column::new()
            .spacing(spacing::SM)
            .push(text(i18n.tr("options-title")).size(typography::TITLE_SM));

        for option in SanitizeOption::ALL {
            column = column.push(
                checkbox(self.is_selected(option))
                    .label(i18n.tr(option.i18n_key()))
                    .on_toggle(move |value| Message::OptionToggled(option, value))
                    .text_size(typography::BODY_SM),
            );
        }

        column = column.push(
            text(i18n.tr("options-depth-label"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
        for depth in [RedactionDepth::Marked, RedactionDepth::Aggressive] {
            column = column.push(
                radio(
                    i18n.tr(depth.i18n_key()),
                    depth,
                    Some(self.depth),
                    Message::DepthSelected,
                )
                .size(typography::BODY)
                .text_size(typography::BODY_SM),
            );
        }

        let stepper = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr("options-passes-label"))
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(
                button(text("−").size(typography::BODY))
                    .style(styles::button::secondary)
                    .padding([spacing::XXS, spacing::XS])
                    .on_press(Message::PassesDecremented),
            )
            .push(text(self.passes.to_string()).size(typography::BODY))
            .push(
                button(text("+").size(typography::BODY))
                    .style(styles::button::secondary)
                    .padding([spacing::XXS, spacing::XS])
                    .on_press(Message::PassesIncremented),
            );
        column = column.push(stepper);

        column = column.push(
            toggler(self.preview)
                .label(i18n.tr("options-preview-toggle"))
                .on_toggle(Message::PreviewToggled)
                .text_size(typography::BODY_SM),
        );

        let profiles = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr("options-profile-label"))
                    .size(typography::BODY_SM)
                    .width(Length::Fill),
            )
            .push(pick_list(
                Profile::ALL,
                Some(self.profile),
                Message::ProfileSelected,
            ));
        column = column.push(profiles);

        column = column.push(
            text(i18n.tr("options-unwired-note"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );

        container(column)
            .padding(spacing::MD)
            .width(Length::Fill)
            .style(styles::container::panel)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_preselects_metadata_stripping_only() {
        let state = State::default();
        assert!(state.is_selected(SanitizeOption::StripMetadata));
        assert!(!state.is_selected(SanitizeOption::RemoveNotes));
        assert!(!state.is_selected(SanitizeOption::RedactHidden));
        assert!(!state.is_selected(SanitizeOption::FlattenEmbeds));
    }

    #[test]
    fn toggling_an_option_records_the_value() {
        let mut state = State::default();
        state.handle(Message::OptionToggled(SanitizeOption::RemoveNotes, true));
        assert!(state.is_selected(SanitizeOption::RemoveNotes));

        state.handle(Message::OptionToggled(SanitizeOption::RemoveNotes, false));
        assert!(!state.is_selected(SanitizeOption::RemoveNotes));
    }

    #[test]
    fn options_are_independent() {
        let mut state = State::default();
        state.handle(Message::OptionToggled(SanitizeOption::RedactHidden, true));
        // No other selection moves
        assert!(state.is_selected(SanitizeOption::StripMetadata));
        assert!(!state.is_selected(SanitizeOption::FlattenEmbeds));
        assert_eq!(state.depth(), RedactionDepth::Marked);
    }

    #[test]
    fn stepper_never_goes_below_zero() {
        let mut state = State::default();
        for _ in 0..20 {
            state.handle(Message::PassesDecremented);
        }
        assert_eq!(state.passes(), 0);

        state.handle(Message::PassesDecremented);
        assert_eq!(state.passes(), 0);
    }

    #[test]
    fn stepper_increments_by_one_up_to_the_cap() {
        let mut state = State::default();
        let start = state.passes();
        state.handle(Message::PassesIncremented);
        assert_eq!(state.passes(), start + 1);

        for _ in 0..50 {
            state.handle(Message::PassesIncremented);
        }
        assert_eq!(state.passes(), MAX_CLEANING_PASSES);
    }

    #[test]
    fn depth_radio_switches_between_choices() {
        let mut state = State::default();
        state.handle(Message::DepthSelected(RedactionDepth::Aggressive));
        assert_eq!(state.depth(), RedactionDepth::Aggressive);

        state.handle(Message::DepthSelected(RedactionDepth::Marked));
        assert_eq!(state.depth(), RedactionDepth::Marked);
    }

    #[test]
    fn preview_toggle_flips_display_state() {
        let mut state = State::default();
        state.handle(Message::PreviewToggled(true));
        assert!(state.preview());
        state.handle(Message::PreviewToggled(false));
        assert!(!state.preview());
    }

    #[test]
    fn profile_selection_is_recorded_verbatim() {
        let mut state = State::default();
        state.handle(Message::ProfileSelected(Profile::Strict));
        assert_eq!(state.profile(), Profile::Strict);
    }
}
