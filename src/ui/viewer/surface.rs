// SPDX-License-Identifier: MPL-2.0
//! Engine render surface.
//!
//! Draws what the mounted render session exposes: the document identity,
//! its content fingerprint, and the session's fixed capabilities. A real
//! SDK would paint slides here; the surface only ever reads from the
//! session handle, never mutates it.

use super::component::Message;
use crate::engine::{SessionHandle, SurfaceTheme};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{container, text, Column, Row};
use iced::{alignment, Background, Border, Element, Length};

/// Formats a byte count the way file managers do.
#[must_use]
pub fn human_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = 1024.0 * 1024.0;

    let bytes_f = bytes as f64;
    if bytes_f >= MIB {
        format!("{:.1} MiB", bytes_f / MIB)
    } else if bytes_f >= KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{} B", bytes)
    }
}

fn surface_style(theme: SurfaceTheme) -> impl Fn(&iced::Theme) -> container::Style {
    move |_theme: &iced::Theme| {
        let (background, text_color) = match theme {
            SurfaceTheme::Dark => (palette::GRAY_900, palette::GRAY_100),
            SurfaceTheme::Light => (palette::GRAY_100, palette::GRAY_900),
        };

        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text_color),
            border: Border {
                radius: radius::LG.into(),
                ..Border::default()
            },
            ..Default::default()
        }
    }
}

/// Renders the mounted session.
pub fn view<'a>(session: &'a SessionHandle, i18n: &I18n) -> Element<'a, Message> {
    let info = session.info();

    let mut toolbar = Row::new().spacing(spacing::XS);
    for item in &info.toolbar_items {
        toolbar = toolbar.push(
            container(text(item.as_str()).size(typography::CAPTION))
                .padding([2.0, spacing::XS])
                .style(styles::container::tag(palette::PRIMARY_400)),
        );
    }

    let container_note = if info.container_recognized {
        text(i18n.tr("viewer-surface-container-ok"))
            .size(typography::CAPTION)
            .color(palette::SUCCESS_500)
    } else {
        text(i18n.tr("viewer-surface-container-unknown"))
            .size(typography::CAPTION)
            .color(palette::WARNING_500)
    };

    let facts = Column::new()
        .spacing(spacing::XXS)
        .push(
            text(format!(
                "{}: {}",
                i18n.tr("viewer-surface-size"),
                human_size(info.byte_len)
            ))
            .size(typography::BODY_SM),
        )
        .push(
            text(format!(
                "{}: {}",
                i18n.tr("viewer-surface-fingerprint"),
                info.fingerprint
            ))
            .size(typography::BODY_SM),
        )
        .push(container_note);

    let mut capabilities = Row::new().spacing(spacing::SM);
    if info.text_selection {
        capabilities = capabilities.push(
            text(i18n.tr("viewer-surface-text-selection"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }
    if !info.annotations_enabled {
        capabilities = capabilities.push(
            text(i18n.tr("viewer-surface-annotations-off"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        );
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(
            text(i18n.tr("viewer-surface-title"))
                .size(typography::CAPTION)
                .color(palette::GRAY_400),
        )
        .push(text(&info.document_name).size(typography::TITLE_MD))
        .push(facts)
        .push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(
                    text(i18n.tr("viewer-surface-toolbar"))
                        .size(typography::CAPTION)
                        .color(palette::GRAY_400),
                )
                .push(toolbar),
        )
        .push(capabilities);

    container(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(surface_style(info.theme))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_formats_bytes() {
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn human_size_formats_kibibytes() {
        assert_eq!(human_size(2048), "2.0 KiB");
    }

    #[test]
    fn human_size_formats_mebibytes() {
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MiB");
    }
}
