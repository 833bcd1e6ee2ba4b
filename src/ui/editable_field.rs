// SPDX-License-Identifier: MPL-2.0
//! Click-to-edit text field with draft state and revert-on-cancel.
//!
//! The field shows its committed value as a flat button. Activating it
//! switches to a text input whose draft starts from the committed value;
//! Enter (or another field taking over) commits the draft, Escape throws
//! it away. Values live only in this state and are never persisted.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{alignment, Color, Element};

/// Cosmetic classification tag rendered next to a field. Tags carry no
/// validation rules; they exist so reviewers can see at a glance which
/// fields the cleaning pipeline will care about later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Financial,
    Confidential,
    Internal,
}

impl Classification {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Classification::Financial => "tag-financial",
            Classification::Confidential => "tag-confidential",
            Classification::Internal => "tag-internal",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Classification::Financial => palette::TAG_FINANCIAL,
            Classification::Confidential => palette::TAG_CONFIDENTIAL,
            Classification::Internal => palette::TAG_INTERNAL,
        }
    }
}

/// Editable field state.
#[derive(Debug, Clone)]
pub struct State {
    input_id: text_input::Id,
    label_key: &'static str,
    committed: String,
    draft: String,
    editing: bool,
    classification: Option<Classification>,
}

/// Messages for one editable field.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer activation on the display surface.
    EditRequested,
    /// Draft text changed while editing.
    DraftChanged(String),
    /// Enter pressed (or editing handed off): promote the draft.
    Committed,
    /// Escape pressed: discard the draft.
    Cancelled,
}

/// Effects produced by field transitions.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// Edit mode was entered; the orchestrator should focus the input and
    /// select its full content.
    FocusInput(text_input::Id),
}

impl State {
    #[must_use]
    pub fn new(
        label_key: &'static str,
        initial: &str,
        classification: Option<Classification>,
    ) -> Self {
        Self {
            input_id: text_input::Id::unique(),
            label_key,
            committed: initial.to_string(),
            draft: String::new(),
            editing: false,
            classification,
        }
    }

    /// Handle a field message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::EditRequested => {
                if !self.editing {
                    self.draft = self.committed.clone();
                    self.editing = true;
                    return Effect::FocusInput(self.input_id.clone());
                }
                Effect::None
            }
            Message::DraftChanged(value) => {
                if self.editing {
                    self.draft = value;
                }
                Effect::None
            }
            Message::Committed => {
                if self.editing {
                    self.committed = self.draft.clone();
                    self.editing = false;
                }
                Effect::None
            }
            Message::Cancelled => {
                if self.editing {
                    self.draft.clear();
                    self.editing = false;
                }
                Effect::None
            }
        }
    }

    /// Current committed value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.committed
    }

    /// Check if the field is in edit mode.
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    #[must_use]
    pub fn classification(&self) -> Option<Classification> {
        self.classification
    }

    /// Renders the field with its label and optional classification tag.
    pub fn view(&self, i18n: &I18n) -> Element<'_, Message> {
        let mut header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr(self.label_key))
                    .size(typography::CAPTION)
                    .color(palette::GRAY_400),
            );

        if let Some(classification) = self.classification {
            header = header.push(
                container(text(i18n.tr(classification.i18n_key())).size(typography::CAPTION))
                    .padding([2.0, spacing::XS])
                    .style(styles::container::tag(classification.color())),
            );
        }

        let body: Element<'_, Message> = if self.editing {
            text_input("", &self.draft)
                .id(self.input_id.clone())
                .on_input(Message::DraftChanged)
                .on_submit(Message::Committed)
                .size(typography::BODY_LG)
                .into()
        } else {
            let display = if self.committed.is_empty() {
                text("—").size(typography::BODY_LG).color(palette::GRAY_400)
            } else {
                text(&self.committed).size(typography::BODY_LG)
            };

            button(display)
                .style(styles::button::text)
                .padding(spacing::XXS)
                .on_press(Message::EditRequested)
                .into()
        };

        Column::new()
            .spacing(spacing::XXS)
            .push(header)
            .push(body)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> State {
        State::new("outline-field-title", "Q3 Results", None)
    }

    #[test]
    fn edit_requested_enters_editing_and_requests_focus() {
        let mut state = field();
        let effect = state.handle(Message::EditRequested);

        assert!(state.is_editing());
        assert!(matches!(effect, Effect::FocusInput(_)));
        assert_eq!(state.draft, "Q3 Results");
    }

    #[test]
    fn edit_requested_while_editing_is_ignored() {
        let mut state = field();
        state.handle(Message::EditRequested);
        state.handle(Message::DraftChanged("changed".into()));

        let effect = state.handle(Message::EditRequested);
        assert!(matches!(effect, Effect::None));
        assert_eq!(state.draft, "changed");
    }

    #[test]
    fn commit_promotes_the_draft() {
        let mut state = field();
        state.handle(Message::EditRequested);
        state.handle(Message::DraftChanged("Q4 Results".into()));
        state.handle(Message::Committed);

        assert!(!state.is_editing());
        assert_eq!(state.value(), "Q4 Results");
    }

    #[test]
    fn commit_promotes_an_empty_draft() {
        let mut state = field();
        state.handle(Message::EditRequested);
        state.handle(Message::DraftChanged(String::new()));
        state.handle(Message::Committed);

        assert_eq!(state.value(), "");
    }

    #[test]
    fn cancel_restores_the_pre_edit_value() {
        let mut state = field();
        state.handle(Message::EditRequested);
        state.handle(Message::DraftChanged("scrambled beyond recognition".into()));
        state.handle(Message::Cancelled);

        assert!(!state.is_editing());
        assert_eq!(state.value(), "Q3 Results");
    }

    #[test]
    fn cancel_then_reedit_starts_from_committed_value() {
        let mut state = field();
        state.handle(Message::EditRequested);
        state.handle(Message::DraftChanged("draft".into()));
        state.handle(Message::Cancelled);

        state.handle(Message::EditRequested);
        assert_eq!(state.draft, "Q3 Results");
    }

    #[test]
    fn draft_changes_outside_editing_are_ignored() {
        let mut state = field();
        state.handle(Message::DraftChanged("sneaky".into()));
        assert_eq!(state.value(), "Q3 Results");
        assert!(state.draft.is_empty());
    }

    #[test]
    fn classification_is_cosmetic_metadata() {
        let state = State::new(
            "outline-field-subtitle",
            "internal only",
            Some(Classification::Confidential),
        );
        assert_eq!(state.classification(), Some(Classification::Confidential));
        // No validation hangs off the tag; any value commits.
    }
}
