// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Renders the current screen based on application state: the workbench
//! (progress row, viewer pane, options sidebar, stage navigation) or the
//! settings screen.

use super::{App, Message, Screen};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::progress_steps;
use crate::ui::styles;
use crate::ui::{navbar, settings};
use iced::widget::{button, container, text, Column, Row};
use iced::{alignment, Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let current: Element<'_, Message> = match self.screen {
            Screen::Workbench => self.view_workbench(),
            Screen::Settings => self.view_settings(),
        };

        let column = Column::new()
            .push(navbar::view(&self.i18n, self.screen))
            .push(
                container(current)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::MD),
            );

        container(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn view_workbench(&self) -> Element<'_, Message> {
        let steps = progress_steps::view(self.stage, &self.i18n);

        let viewer = container(self.viewer.view(&self.i18n).map(Message::Viewer))
            .width(Length::Fill)
            .height(Length::Fill);

        let sidebar = container(self.options.view(&self.i18n).map(Message::Options))
            .width(Length::Fixed(sizing::SIDEBAR_WIDTH));

        let main = Row::new()
            .spacing(spacing::MD)
            .push(viewer)
            .push(sidebar)
            .height(Length::Fill);

        let back_enabled = self.stage > progress_steps::FIRST_STAGE;
        let forward_enabled = self.stage < progress_steps::LAST_STAGE;

        let stage_nav = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(self.i18n.tr("steps-back")))
                    .style(styles::button::secondary)
                    .padding([spacing::XXS, spacing::LG])
                    .on_press_maybe(back_enabled.then_some(Message::StepBack)),
            )
            .push(
                button(text(self.i18n.tr("steps-next")))
                    .style(styles::button::primary)
                    .padding([spacing::XXS, spacing::LG])
                    .on_press_maybe(forward_enabled.then_some(Message::StepForward)),
            );

        Column::new()
            .spacing(spacing::MD)
            .push(steps)
            .push(main)
            .push(
                container(stage_nav)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            )
            .into()
    }

    fn view_settings(&self) -> Element<'_, Message> {
        settings::view_settings(&self.i18n, self.theme_mode)
    }
}
