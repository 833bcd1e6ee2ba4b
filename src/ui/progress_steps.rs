// SPDX-License-Identifier: MPL-2.0
//! Step progress display for the sanitization workflow.
//!
//! Pure rendering of a fixed 5-stage pipeline: stages before the current
//! index are completed, the current one is highlighted, later ones are
//! pending. The display holds no state and emits no messages of its own.

use crate::config::defaults::WORKFLOW_STAGE_COUNT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use iced::widget::{container, text, Column, Row};
use iced::{alignment, Background, Border, Element, Length};

/// i18n keys of the workflow stages, in pipeline order.
pub const STAGE_KEYS: [&str; WORKFLOW_STAGE_COUNT] = [
    "step-upload",
    "step-review",
    "step-configure",
    "step-sanitize",
    "step-export",
];

/// First stage index (stages are 1-based in the UI).
pub const FIRST_STAGE: usize = 1;

/// Last stage index.
pub const LAST_STAGE: usize = WORKFLOW_STAGE_COUNT;

/// Render status of one stage relative to the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    Pending,
}

/// Status of `stage` when the workflow is at `current` (both 1-based).
#[must_use]
pub fn status_of(stage: usize, current: usize) -> StageStatus {
    use std::cmp::Ordering;

    match stage.cmp(&current) {
        Ordering::Less => StageStatus::Completed,
        Ordering::Equal => StageStatus::Current,
        Ordering::Greater => StageStatus::Pending,
    }
}

/// Clamps a stage index into the valid 1..=5 range.
#[must_use]
pub fn clamp_stage(stage: usize) -> usize {
    stage.clamp(FIRST_STAGE, LAST_STAGE)
}

fn dot_style(status: StageStatus) -> impl Fn(&iced::Theme) -> container::Style {
    move |theme: &iced::Theme| {
        let extended = theme.extended_palette();
        let (background, text_color) = match status {
            StageStatus::Completed => (palette::PRIMARY_600, palette::WHITE),
            StageStatus::Current => (palette::PRIMARY_400, palette::WHITE),
            StageStatus::Pending => (
                extended.background.weak.color,
                extended.background.base.text,
            ),
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Renders the stage row for the given current stage (1-based, clamped).
pub fn view<Message: 'static>(current: usize, i18n: &I18n) -> Element<'static, Message> {
    let current = clamp_stage(current);
    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    for (index, key) in STAGE_KEYS.iter().enumerate() {
        let stage = index + 1;
        let status = status_of(stage, current);

        let dot = container(text(stage.to_string()).size(typography::BODY_SM))
            .width(Length::Fixed(sizing::STEP_DOT))
            .height(Length::Fixed(sizing::STEP_DOT))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(dot_style(status));

        let label = text(i18n.tr(key)).size(typography::BODY_SM);

        let cell = Column::new()
            .spacing(spacing::XXS)
            .align_x(alignment::Horizontal::Center)
            .push(dot)
            .push(label);

        if index > 0 {
            row = row.push(
                container(text(""))
                    .width(Length::Fixed(sizing::STEP_CONNECTOR))
                    .height(Length::Fixed(2.0))
                    .style(dot_style(if stage <= current {
                        StageStatus::Completed
                    } else {
                        StageStatus::Pending
                    })),
            );
        }
        row = row.push(cell);
    }

    container(row)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .padding(spacing::SM)
        .into()
}
