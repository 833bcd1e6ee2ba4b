// SPDX-License-Identifier: MPL-2.0
//! Custom lightweight slide renderer.
//!
//! Draws a slide-shaped card from local state instead of the engine
//! surface. The text on it is a set of editable fields so reviewers can
//! stage replacement values; the fields are purely local and feed nothing
//! downstream yet.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::editable_field::{self, Classification};
use crate::ui::styles;
use iced::widget::{container, text, Column};
use iced::{alignment, Element, Length};

/// Identity of one editable field on the slide card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Title,
    Subtitle,
    Presenter,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Title, FieldId::Subtitle, FieldId::Presenter];
}

/// The slide card's editable fields.
#[derive(Debug, Clone)]
pub struct Fields {
    pub title: editable_field::State,
    pub subtitle: editable_field::State,
    pub presenter: editable_field::State,
}

impl Fields {
    /// Fresh fields for a newly mounted document. The title starts from
    /// the document's display name; the rest are staged placeholders.
    #[must_use]
    pub fn new(document_name: &str) -> Self {
        let title = document_name
            .rsplit_once('.')
            .map(|(stem, _)| stem)
            .unwrap_or(document_name);

        Self {
            title: editable_field::State::new("outline-field-title", title, None),
            subtitle: editable_field::State::new(
                "outline-field-subtitle",
                "Internal figures — do not distribute",
                Some(Classification::Confidential),
            ),
            presenter: editable_field::State::new(
                "outline-field-presenter",
                "",
                Some(Classification::Internal),
            ),
        }
    }

    #[must_use]
    pub fn get(&self, id: FieldId) -> &editable_field::State {
        match id {
            FieldId::Title => &self.title,
            FieldId::Subtitle => &self.subtitle,
            FieldId::Presenter => &self.presenter,
        }
    }

    pub fn get_mut(&mut self, id: FieldId) -> &mut editable_field::State {
        match id {
            FieldId::Title => &mut self.title,
            FieldId::Subtitle => &mut self.subtitle,
            FieldId::Presenter => &mut self.presenter,
        }
    }
}

/// Renders the slide card with its editable fields.
pub fn view<'a>(fields: &'a Fields, i18n: &I18n) -> Element<'a, Message> {
    let mut card = Column::new().spacing(spacing::MD).width(Length::Fill);

    for id in FieldId::ALL {
        card = card.push(
            fields
                .get(id)
                .view(i18n)
                .map(move |msg| Message::Field(id, msg)),
        );
    }

    card = card.push(
        text(i18n.tr("outline-hint-click-to-edit"))
            .size(typography::CAPTION)
            .color(palette::GRAY_400),
    );

    container(card)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::panel)
        .into()
}
