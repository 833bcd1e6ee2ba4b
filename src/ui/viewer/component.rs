// SPDX-License-Identifier: MPL-2.0
//! Slide display shell.
//!
//! Orchestrates the document lifecycle cluster, the render-mode toggle
//! (outline renderer vs engine surface) and the slide card's editable
//! fields. Lifecycle effects are translated into `iced::Task`s here; the
//! cluster itself stays synchronous and testable.

use super::{empty_state, lifecycle, outline, surface};
use crate::document::DocumentSource;
use crate::engine::{RenderEngine, SessionConfig, SurfaceId};
use crate::error::{EngineError, Error};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::editable_field;
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{alignment, Element, Length, Task};
use std::sync::Arc;

/// Which renderer fills the viewer pane when a document is ready.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The custom lightweight slide renderer.
    Outline,
    /// The external engine's surface.
    Engine,
}

/// Slide display shell state.
pub struct State {
    engine: Arc<dyn RenderEngine>,
    pub lifecycle: lifecycle::State,
    mode: RenderMode,
    fields: Option<outline::Fields>,
    editing: Option<outline::FieldId>,
}

/// Messages for the slide display shell.
#[derive(Debug, Clone)]
pub enum Message {
    Lifecycle(lifecycle::Message),
    SetMode(RenderMode),
    Field(outline::FieldId, editable_field::Message),
    /// Open the file dialog (from the empty state or the header).
    OpenFileRequested,
    /// A disposal task finished; failures are logged only.
    SessionDisposed(Result<(), EngineError>),
    /// Escape was pressed while a field was being edited.
    EscapePressed,
}

/// Effects bubbled up to the application shell.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// The user asked for the file dialog.
    OpenFileDialog,
    /// The render-mode preference changed and should be persisted.
    PersistPreferences,
    /// A document finished mounting; the workflow can advance.
    DocumentMounted,
}

impl State {
    #[must_use]
    pub fn new(engine: Arc<dyn RenderEngine>, prefer_outline: bool) -> Self {
        Self {
            engine,
            lifecycle: lifecycle::State::default(),
            mode: if prefer_outline {
                RenderMode::Outline
            } else {
                RenderMode::Engine
            },
            fields: None,
            editing: None,
        }
    }

    /// Supplies a new document reference to the lifecycle.
    pub fn open_source(&mut self, source: DocumentSource, i18n: &I18n) -> Task<Message> {
        self.run_lifecycle(lifecycle::Message::SourceSelected(source), i18n)
    }

    /// Handle a shell message.
    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> (Effect, Task<Message>) {
        match message {
            Message::Lifecycle(msg) => {
                let was_ready = self.lifecycle.has_session();
                let task = self.run_lifecycle(msg, i18n);

                if self.lifecycle.has_session() && !was_ready {
                    // A fresh mount: rebuild the slide card for the new
                    // document and drop any stale edit mode.
                    let name = self
                        .lifecycle
                        .holder
                        .document_name()
                        .unwrap_or_default()
                        .to_string();
                    self.fields = Some(outline::Fields::new(&name));
                    self.editing = None;
                    return (Effect::DocumentMounted, task);
                }
                (Effect::None, task)
            }

            Message::SetMode(mode) => {
                if self.mode != mode {
                    self.mode = mode;
                    return (Effect::PersistPreferences, Task::none());
                }
                (Effect::None, Task::none())
            }

            Message::Field(id, msg) => {
                let task = self.handle_field(id, msg);
                (Effect::None, task)
            }

            Message::OpenFileRequested => (Effect::OpenFileDialog, Task::none()),

            Message::SessionDisposed(result) => {
                if let Err(error) = result {
                    eprintln!("[WARN] Render session teardown failed: {}", error);
                }
                (Effect::None, Task::none())
            }

            Message::EscapePressed => {
                if let (Some(id), Some(fields)) = (self.editing.take(), self.fields.as_mut()) {
                    fields.get_mut(id).handle(editable_field::Message::Cancelled);
                }
                (Effect::None, Task::none())
            }
        }
    }

    /// Runs a lifecycle message and turns its effects into tasks.
    fn run_lifecycle(&mut self, msg: lifecycle::Message, i18n: &I18n) -> Task<Message> {
        let effects = self.lifecycle.handle(msg, i18n);
        let mut tasks = Vec::new();

        for effect in effects {
            match effect {
                lifecycle::Effect::Resolve { request, source } => {
                    tasks.push(Task::perform(source.resolve(), move |result| {
                        Message::Lifecycle(lifecycle::Message::Resolved { request, result })
                    }));
                }
                lifecycle::Effect::Initialize {
                    request,
                    document_name,
                    bytes,
                } => {
                    let config =
                        SessionConfig::for_surface(SurfaceId::PRIMARY, document_name, bytes);
                    let future = self.engine.initialize(config);
                    tasks.push(Task::perform(future, move |result| {
                        Message::Lifecycle(lifecycle::Message::SessionEstablished {
                            request,
                            result: result.map_err(Error::from),
                        })
                    }));
                }
                lifecycle::Effect::Dispose(session) => {
                    tasks.push(Task::perform(
                        async move { session.dispose().await },
                        Message::SessionDisposed,
                    ));
                }
                lifecycle::Effect::LoadingTimedOut => {
                    eprintln!("[WARN] Document load exceeded the stuck threshold");
                }
            }
        }

        Task::batch(tasks)
    }

    fn handle_field(&mut self, id: outline::FieldId, msg: editable_field::Message) -> Task<Message> {
        let Some(fields) = self.fields.as_mut() else {
            return Task::none();
        };

        // Starting to edit one field commits whatever was being edited
        // before; this is the "loss of focus" commit path.
        if matches!(msg, editable_field::Message::EditRequested) {
            if let Some(previous) = self.editing.take() {
                if previous != id {
                    fields
                        .get_mut(previous)
                        .handle(editable_field::Message::Committed);
                }
            }
        }

        let effect = fields.get_mut(id).handle(msg);

        self.editing = outline::FieldId::ALL
            .into_iter()
            .find(|candidate| fields.get(*candidate).is_editing());

        match effect {
            editable_field::Effect::FocusInput(input_id) => Task::batch(vec![
                text_input::focus(input_id.clone()),
                text_input::select_all(input_id),
            ]),
            editable_field::Effect::None => Task::none(),
        }
    }

    /// Takes the live session for teardown on window close.
    #[must_use]
    pub fn take_session(&mut self) -> Option<crate::engine::SessionHandle> {
        self.lifecycle.take_session()
    }

    /// Whether the spinner subscription should be running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.lifecycle.loading.is_loading()
    }

    /// Whether a field edit is in progress (drives the Escape listener).
    #[must_use]
    pub fn is_editing_field(&self) -> bool {
        self.editing.is_some()
    }

    /// Whether any document is mounted.
    #[must_use]
    pub fn has_document(&self) -> bool {
        self.lifecycle.has_session()
    }

    /// The outline preference for config persistence.
    #[must_use]
    pub fn prefers_outline(&self) -> bool {
        self.mode == RenderMode::Outline
    }

    /// Renders the viewer pane for the current lifecycle phase.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        match self.lifecycle.phase() {
            lifecycle::Phase::Idle => empty_state::view(i18n),
            lifecycle::Phase::Loading => self.view_loading(i18n),
            lifecycle::Phase::Errored => self.view_error(i18n),
            lifecycle::Phase::Ready => self.view_ready(i18n),
        }
    }

    fn view_loading(&self, i18n: &I18n) -> Element<'_, Message> {
        let spinner = AnimatedSpinner::new(
            palette::PRIMARY_400,
            self.lifecycle.loading.spinner_rotation(),
        )
        .into_element();

        let label = self
            .lifecycle
            .loading
            .phase()
            .map(|phase| i18n.tr(phase.i18n_key()))
            .unwrap_or_default();

        let content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(spinner)
            .push(text(label).size(typography::BODY).color(palette::GRAY_400));

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn view_error<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let Some(error) = self.lifecycle.error() else {
            return empty_state::view(i18n);
        };

        let mut content = Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(
                text(error.friendly_text())
                    .size(typography::TITLE_SM)
                    .color(palette::ERROR_500),
            );

        let details_label = if error.show_details() {
            i18n.tr("error-details-hide")
        } else {
            i18n.tr("error-details-show")
        };
        content = content.push(
            button(text(details_label).size(typography::BODY_SM))
                .style(styles::button::text)
                .on_press(Message::Lifecycle(lifecycle::Message::ToggleErrorDetails)),
        );

        if error.show_details() {
            content = content.push(
                container(text(error.details()).size(typography::BODY_SM))
                    .padding(spacing::SM)
                    .style(styles::container::inset),
            );
        }

        let actions = Row::new()
            .spacing(spacing::SM)
            .push(
                button(text(i18n.tr("error-retry")))
                    .style(styles::button::primary)
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::Lifecycle(lifecycle::Message::Retry)),
            )
            .push(
                button(text(i18n.tr("viewer-choose-another")))
                    .style(styles::button::secondary)
                    .padding([spacing::XS, spacing::LG])
                    .on_press(Message::OpenFileRequested),
            );
        content = content.push(actions);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn view_ready<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let mode_button = |label: String, mode: RenderMode, current: RenderMode| {
            let style = if mode == current {
                styles::button::primary
            } else {
                styles::button::secondary
            };
            button(text(label).size(typography::BODY_SM))
                .style(style)
                .padding([spacing::XXS, spacing::SM])
                .on_press(Message::SetMode(mode))
        };

        let header = Row::new()
            .spacing(spacing::XS)
            .align_y(alignment::Vertical::Center)
            .push(
                text(i18n.tr("viewer-mode-label"))
                    .size(typography::BODY_SM)
                    .color(palette::GRAY_400),
            )
            .push(mode_button(
                i18n.tr("viewer-mode-outline"),
                RenderMode::Outline,
                self.mode,
            ))
            .push(mode_button(
                i18n.tr("viewer-mode-engine"),
                RenderMode::Engine,
                self.mode,
            ))
            .push(
                container(
                    button(text(i18n.tr("viewer-choose-another")).size(typography::BODY_SM))
                        .style(styles::button::text)
                        .on_press(Message::OpenFileRequested),
                )
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Right),
            );

        let body: Element<'a, Message> = match (self.mode, &self.fields, self.lifecycle.session()) {
            (RenderMode::Outline, Some(fields), _) => outline::view(fields, i18n),
            (_, _, Some(session)) => surface::view(session, i18n),
            // Ready without a session cannot happen; fall back to empty.
            _ => empty_state::view(i18n),
        };

        Column::new()
            .spacing(spacing::SM)
            .push(header)
            .push(body)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::FakeEngine;
    use crate::ui::viewer::outline::FieldId;

    fn i18n() -> I18n {
        I18n::default()
    }

    fn shell() -> State {
        State::new(Arc::new(FakeEngine::new()), false)
    }

    fn mounted_shell() -> State {
        let mut state = shell();
        state.fields = Some(outline::Fields::new("deck.pptx"));
        state
    }

    #[test]
    fn defaults_to_engine_mode_unless_configured() {
        assert_eq!(shell().mode, RenderMode::Engine);
        let outline = State::new(Arc::new(FakeEngine::new()), true);
        assert_eq!(outline.mode, RenderMode::Outline);
    }

    #[test]
    fn set_mode_persists_preference_once() {
        let mut state = shell();
        let (effect, _) = state.handle_message(Message::SetMode(RenderMode::Outline), &i18n());
        assert!(matches!(effect, Effect::PersistPreferences));
        assert!(state.prefers_outline());

        let (effect, _) = state.handle_message(Message::SetMode(RenderMode::Outline), &i18n());
        assert!(matches!(effect, Effect::None));
    }

    #[test]
    fn open_file_request_bubbles_to_the_shell() {
        let mut state = shell();
        let (effect, _) = state.handle_message(Message::OpenFileRequested, &i18n());
        assert!(matches!(effect, Effect::OpenFileDialog));
    }

    #[test]
    fn starting_an_edit_tracks_the_editing_field() {
        let mut state = mounted_shell();
        state.handle_message(
            Message::Field(FieldId::Title, editable_field::Message::EditRequested),
            &i18n(),
        );
        assert!(state.is_editing_field());
    }

    #[test]
    fn switching_fields_commits_the_previous_draft() {
        let mut state = mounted_shell();
        state.handle_message(
            Message::Field(FieldId::Title, editable_field::Message::EditRequested),
            &i18n(),
        );
        state.handle_message(
            Message::Field(
                FieldId::Title,
                editable_field::Message::DraftChanged("Renamed deck".into()),
            ),
            &i18n(),
        );

        // Clicking another field hands focus over and commits the first.
        state.handle_message(
            Message::Field(FieldId::Presenter, editable_field::Message::EditRequested),
            &i18n(),
        );

        let fields = state.fields.as_ref().unwrap();
        assert_eq!(fields.get(FieldId::Title).value(), "Renamed deck");
        assert!(fields.get(FieldId::Presenter).is_editing());
    }

    #[test]
    fn escape_cancels_the_current_edit() {
        let mut state = mounted_shell();
        state.handle_message(
            Message::Field(FieldId::Title, editable_field::Message::EditRequested),
            &i18n(),
        );
        state.handle_message(
            Message::Field(
                FieldId::Title,
                editable_field::Message::DraftChanged("garbage".into()),
            ),
            &i18n(),
        );

        state.handle_message(Message::EscapePressed, &i18n());

        let fields = state.fields.as_ref().unwrap();
        assert_eq!(fields.get(FieldId::Title).value(), "deck");
        assert!(!state.is_editing_field());
    }

    #[test]
    fn disposal_failures_are_swallowed() {
        let mut state = shell();
        let (effect, _) = state.handle_message(
            Message::SessionDisposed(Err(EngineError::Rejected("teardown warning".into()))),
            &i18n(),
        );
        assert!(matches!(effect, Effect::None));
    }
}
