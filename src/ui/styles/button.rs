// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Theme};

/// Primary action button (open file, retry, next step).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_400)),
            text_color: palette::GRAY_200,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary button (mode toggle, back, unselected choices).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let base = extended.background.weak.color;

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(extended.background.strong.color)),
            text_color: extended.background.base.text,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(base)),
            text_color: palette::GRAY_400,
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(base)),
            text_color: extended.background.base.text,
            border: Border {
                color: palette::GRAY_400,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Borderless text-like button (show/hide details, inline actions).
pub fn text(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();

    button::Style {
        background: None,
        text_color: match status {
            button::Status::Hovered => palette::PRIMARY_400,
            _ => extended.background.base.text,
        },
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}
