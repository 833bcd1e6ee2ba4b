// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::options_panel;
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::component;
use iced::window;
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

use super::Screen;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    Options(options_panel::Message),
    SwitchScreen(Screen),
    LanguageSelected(LanguageIdentifier),
    ThemeSelected(ThemeMode),
    /// Workflow stage navigation.
    StepBack,
    StepForward,
    /// Result from the open file dialog.
    OpenFileDialogResult(Option<PathBuf>),
    /// A file was dropped on the window.
    FileDropped(PathBuf),
    /// The invalid-file alert was dismissed.
    InvalidFileAcknowledged,
    /// Periodic tick driving the loading spinner.
    SpinnerTick,
    /// Window close was requested; the render session is torn down first.
    WindowCloseRequested(window::Id),
    /// Teardown before close finished; the window can actually close now.
    CloseTeardownFinished(window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional document to preload on startup: a `.pptx` path or an
    /// http(s) locator.
    pub document: Option<String>,
}
