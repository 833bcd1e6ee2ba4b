// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.

use super::{App, Message, Screen};
use crate::document::{self, DocumentSource};
use crate::i18n::fluent::I18n;
use crate::ui::progress_steps;
use crate::ui::viewer::{component, lifecycle};
use iced::{window, Task};
use std::path::PathBuf;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                let (effect, task) = self.viewer.handle_message(msg, &self.i18n);
                let task = task.map(Message::Viewer);

                match effect {
                    component::Effect::None => task,
                    component::Effect::OpenFileDialog => {
                        Task::batch(vec![task, open_file_dialog()])
                    }
                    component::Effect::PersistPreferences => {
                        self.persist_config();
                        task
                    }
                    component::Effect::DocumentMounted => {
                        // A mounted document moves the workflow out of the
                        // upload stage, but never backwards.
                        self.stage = self.stage.max(progress_steps::FIRST_STAGE + 1);
                        task
                    }
                }
            }

            Message::Options(msg) => {
                self.options.handle(msg);
                Task::none()
            }

            Message::SwitchScreen(screen) => {
                self.screen = screen;
                Task::none()
            }

            Message::LanguageSelected(locale) => {
                self.i18n.set_locale(locale);
                self.persist_config();
                let (_, task) = self.viewer.handle_message(
                    component::Message::Lifecycle(lifecycle::Message::RefreshTranslations),
                    &self.i18n,
                );
                task.map(Message::Viewer)
            }

            Message::ThemeSelected(mode) => {
                self.theme_mode = mode;
                self.persist_config();
                Task::none()
            }

            Message::StepBack => {
                self.stage = progress_steps::clamp_stage(self.stage.saturating_sub(1));
                Task::none()
            }

            Message::StepForward => {
                self.stage = progress_steps::clamp_stage(self.stage + 1);
                Task::none()
            }

            Message::OpenFileDialogResult(None) => Task::none(),
            Message::OpenFileDialogResult(Some(path)) => self.handle_picked_file(path),
            Message::FileDropped(path) => self.handle_picked_file(path),

            Message::InvalidFileAcknowledged => Task::none(),

            Message::SpinnerTick => {
                let (_, task) = self.viewer.handle_message(
                    component::Message::Lifecycle(lifecycle::Message::SpinnerTick),
                    &self.i18n,
                );
                task.map(Message::Viewer)
            }

            Message::WindowCloseRequested(id) => {
                // Tear the render session down before the window goes away;
                // a disposal failure must not keep the window open.
                match self.viewer.take_session() {
                    Some(session) => Task::perform(
                        async move {
                            if let Err(error) = session.dispose().await {
                                eprintln!("[WARN] Render session teardown failed: {}", error);
                            }
                        },
                        move |()| Message::CloseTeardownFinished(id),
                    ),
                    None => window::close(id),
                }
            }

            Message::CloseTeardownFinished(id) => window::close(id),
        }
    }

    /// Validates a picked or dropped file before it enters the lifecycle.
    /// Rejected files surface a blocking alert and change no state.
    fn handle_picked_file(&mut self, path: PathBuf) -> Task<Message> {
        match document::check_input_file(&path) {
            Ok(()) => self.open_document(DocumentSource::File(path)),
            Err(error) => {
                eprintln!("Rejected input file: {}", error);
                invalid_file_alert(&self.i18n)
            }
        }
    }
}

fn open_file_dialog() -> Task<Message> {
    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("PowerPoint", &document::SUPPORTED_EXTENSIONS)
                .pick_file()
                .await
                .map(|file| file.path().to_path_buf())
        },
        Message::OpenFileDialogResult,
    )
}

fn invalid_file_alert(i18n: &I18n) -> Task<Message> {
    let title = i18n.tr("alert-invalid-extension-title");
    let description = i18n.tr("alert-invalid-extension-body");

    Task::perform(
        async move {
            rfd::AsyncMessageDialog::new()
                .set_level(rfd::MessageLevel::Error)
                .set_title(&title)
                .set_description(&description)
                .set_buttons(rfd::MessageButtons::Ok)
                .show()
                .await;
        },
        |()| Message::InvalidFileAcknowledged,
    )
}
