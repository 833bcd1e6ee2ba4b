// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the workbench and
//! settings views.
//!
//! The `App` struct wires together the domains (viewer, options,
//! localization) and translates messages into side effects like config
//! persistence or document loading. Policy decisions (window sizing,
//! persistence format, locale switching) stay close to the main update
//! loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::document::DocumentSource;
use crate::engine::preview::PreviewEngine;
use crate::i18n::fluent::I18n;
use crate::ui::options_panel;
use crate::ui::progress_steps;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::{window, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Workbench,
    Settings,
}

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    viewer: component::State,
    options: options_panel::State,
    /// Current workflow stage (1-based, clamped to the pipeline length).
    stage: usize,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("stage", &self.stage)
            .field("viewer_has_document", &self.viewer.has_document())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 800;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        // The session is torn down explicitly before the window closes.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Workbench,
            viewer: component::State::new(Arc::new(PreviewEngine::new()), false),
            options: options_panel::State::default(),
            stage: progress_steps::FIRST_STAGE,
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and optionally kicks off loading of
    /// a document named on the command line.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|error| {
            eprintln!("Failed to load config: {:?}", error);
            config::Config::default()
        });
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };
        app.theme_mode = config.theme.unwrap_or_default();

        let prefer_outline = config.prefer_outline.unwrap_or(false);
        app.viewer = component::State::new(Arc::new(PreviewEngine::new()), prefer_outline);

        let task = match flags.document.as_deref() {
            Some(argument) => {
                let source = DocumentSource::from_argument(argument);
                match &source {
                    DocumentSource::File(path) if !crate::document::has_supported_extension(path) => {
                        eprintln!("Rejected input file: {}", path.display());
                        Task::none()
                    }
                    _ => app.open_document(source),
                }
            }
            None => Task::none(),
        };

        (app, task)
    }

    /// Window title: the app name, joined with the mounted document.
    fn title(&self) -> String {
        match self.viewer.lifecycle.holder.document_name() {
            Some(name) => format!("{} — DeckScrub", name),
            None => "DeckScrub".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Hands a document reference to the viewer lifecycle.
    fn open_document(&mut self, source: DocumentSource) -> Task<Message> {
        self.viewer
            .open_source(source, &self.i18n)
            .map(Message::Viewer)
    }

    /// Writes the current preferences to the config file. Failures are
    /// logged; preferences are never worth interrupting the user for.
    fn persist_config(&self) {
        let config = config::Config {
            language: Some(self.i18n.current_locale().to_string()),
            theme: Some(self.theme_mode),
            prefer_outline: Some(self.viewer.prefers_outline()),
        };
        if let Err(error) = config::save(&config) {
            eprintln!("Failed to save config: {:?}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_the_workbench_upload_stage() {
        let app = App::default();
        assert_eq!(app.screen, Screen::Workbench);
        assert_eq!(app.stage, progress_steps::FIRST_STAGE);
        assert!(!app.viewer.has_document());
    }

    #[test]
    fn title_is_plain_without_a_document() {
        let app = App::default();
        assert_eq!(app.title(), "DeckScrub");
    }
}
