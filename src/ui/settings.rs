// SPDX-License-Identifier: MPL-2.0
//! Settings view: display language and theme mode.
//!
//! Both preferences are persisted to the config file when changed; nothing
//! else on this screen touches disk.

use crate::app::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Row},
    Element, Length,
};

pub fn view_settings(i18n: &I18n, theme_mode: ThemeMode) -> Element<'_, Message> {
    let title = text(i18n.tr("settings-title")).size(typography::TITLE_LG);

    let mut language_column = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("select-language-label")).size(typography::BODY));

    for locale in &i18n.available_locales {
        let display_name = locale.to_string();

        // Check for a translated language name, e.g. "language-name-en-US"
        let translated_name = i18n.tr(&format!("language-name-{}", locale));
        let button_text = if translated_name.starts_with("MISSING:") {
            display_name.clone()
        } else {
            format!("{} ({})", translated_name, display_name)
        };

        let style = if i18n.current_locale() == locale {
            styles::button::primary
        } else {
            styles::button::secondary
        };

        language_column = language_column.push(
            button(text(button_text))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::LanguageSelected(locale.clone())),
        );
    }

    let mut theme_row = Row::new().spacing(spacing::XS);
    for mode in ThemeMode::ALL {
        let style = if mode == theme_mode {
            styles::button::primary
        } else {
            styles::button::secondary
        };
        theme_row = theme_row.push(
            button(text(i18n.tr(mode.i18n_key())))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::ThemeSelected(mode)),
        );
    }

    let theme_column = Column::new()
        .spacing(spacing::XS)
        .push(text(i18n.tr("settings-theme-label")).size(typography::BODY))
        .push(theme_row);

    Column::new()
        .push(title)
        .push(language_column)
        .push(theme_column)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}
