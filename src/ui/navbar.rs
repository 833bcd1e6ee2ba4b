// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar: app title plus screen switching.

use crate::app::{Message, Screen};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, container, text, Row};
use iced::{alignment, Element, Length};

pub fn view(i18n: &I18n, screen: Screen) -> Element<'_, Message> {
    let (label_key, target) = match screen {
        Screen::Workbench => ("navbar-settings", Screen::Settings),
        Screen::Settings => ("navbar-back", Screen::Workbench),
    };

    let row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(text(i18n.tr("app-title")).size(typography::TITLE_MD))
        .push(
            container(
                button(text(i18n.tr(label_key)).size(typography::BODY_SM))
                    .style(styles::button::secondary)
                    .padding([spacing::XXS, spacing::SM])
                    .on_press(Message::SwitchScreen(target)),
            )
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
        );

    container(row)
        .width(Length::Fill)
        .padding([spacing::XS, spacing::MD])
        .into()
}
