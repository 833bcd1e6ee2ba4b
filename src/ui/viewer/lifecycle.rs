// SPDX-License-Identifier: MPL-2.0
//! Document lifecycle cluster - loading, session holder, and errors
//! managed together.
//!
//! This cluster owns the acquire → initialize → dispose sequence for one
//! render session:
//! - Loading state (spinner, phase, timeout)
//! - Session holder (the one live session)
//! - Error state (friendly message with details)
//!
//! Every in-flight attempt is tagged with a [`RequestId`]. Completion
//! messages carry the id they were issued under; results from superseded
//! requests are discarded, and a superseded attempt that still produced a
//! session has that session disposed so it cannot leak. Disposal itself
//! is asynchronous, so teardown surfaces as [`Effect::Dispose`] for the
//! orchestrator to run; its failures are logged, never shown.

use crate::document::DocumentSource;
use crate::engine::SessionHandle;
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::ui::viewer::subcomponents::{error_state, loading, session_holder};

/// Identity of one resolution + initialization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Observable lifecycle phase, as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No document reference; the surface shows the empty state.
    Idle,
    /// Resolving bytes or waiting for the engine.
    Loading,
    /// A session is live.
    Ready,
    /// The last attempt failed; a message is set.
    Errored,
}

/// Document lifecycle cluster state.
#[derive(Debug, Default)]
pub struct State {
    /// Loading state (spinner, phase, timeout detection).
    pub loading: loading::State,

    /// The one live render session.
    pub holder: session_holder::State,

    /// Error state (only present when the last attempt failed).
    pub error: Option<error_state::State>,

    /// The current document reference, retained so retry can re-attempt it.
    source: Option<DocumentSource>,

    /// Id of the attempt whose results are still welcome.
    active_request: Option<RequestId>,

    /// Monotonic counter backing request ids.
    next_request: u64,
}

/// Messages for the document lifecycle cluster.
#[derive(Debug, Clone)]
pub enum Message {
    /// A new document reference was supplied.
    SourceSelected(DocumentSource),
    /// The document reference was withdrawn.
    SourceCleared,
    /// Re-attempt the retained reference after an error.
    Retry,
    /// Byte acquisition finished for the given request.
    Resolved {
        request: RequestId,
        result: Result<Vec<u8>, Error>,
    },
    /// Engine initialization finished for the given request.
    SessionEstablished {
        request: RequestId,
        result: Result<SessionHandle, Error>,
    },
    /// Animate the loading spinner.
    SpinnerTick,
    /// Toggle error details visibility.
    ToggleErrorDetails,
    /// Refresh translations when the locale changes.
    RefreshTranslations,
}

/// Effects the orchestrator must run. A single message can demand both a
/// disposal and a fresh resolution, so effects come back as a list.
#[derive(Debug)]
pub enum Effect {
    /// Resolve the source's bytes asynchronously and report back with
    /// [`Message::Resolved`] under the same request id.
    Resolve {
        request: RequestId,
        source: DocumentSource,
    },
    /// Ask the engine for a session and report back with
    /// [`Message::SessionEstablished`] under the same request id.
    Initialize {
        request: RequestId,
        document_name: String,
        bytes: Vec<u8>,
    },
    /// Release a session. Failures are logged, never surfaced, and must
    /// not block anything.
    Dispose(SessionHandle),
    /// Loading exceeded the stuck threshold (diagnostic only).
    LoadingTimedOut,
}

impl State {
    /// Handle a cluster message.
    pub fn handle(&mut self, msg: Message, i18n: &I18n) -> Vec<Effect> {
        match msg {
            Message::SourceSelected(source) => {
                self.source = Some(source.clone());
                self.begin_attempt(source)
            }

            Message::SourceCleared => {
                let mut effects = Vec::new();
                if let Some(session) = self.holder.take_session() {
                    effects.push(Effect::Dispose(session));
                }
                self.source = None;
                self.active_request = None;
                self.error = None;
                self.loading.handle(loading::Message::Stop);
                effects
            }

            Message::Retry => {
                // Retry re-attempts the same retained reference. Without
                // one there is nothing to re-run; just drop the error.
                self.error = None;
                match self.source.clone() {
                    Some(source) => self.begin_attempt(source),
                    None => Vec::new(),
                }
            }

            Message::Resolved { request, result } => {
                if !self.is_current(request) {
                    // Superseded attempt; nothing was allocated yet.
                    return Vec::new();
                }
                match result {
                    Ok(bytes) => {
                        self.loading
                            .handle(loading::Message::SetPhase(loading::LoadPhase::Initializing));
                        let document_name = self
                            .source
                            .as_ref()
                            .map(DocumentSource::display_name)
                            .unwrap_or_default();
                        vec![Effect::Initialize {
                            request,
                            document_name,
                            bytes,
                        }]
                    }
                    Err(error) => {
                        self.fail_attempt(&error, i18n);
                        Vec::new()
                    }
                }
            }

            Message::SessionEstablished { request, result } => {
                if !self.is_current(request) {
                    // A late session from a superseded attempt must still
                    // be released.
                    return match result {
                        Ok(session) => vec![Effect::Dispose(session)],
                        Err(_) => Vec::new(),
                    };
                }
                match result {
                    Ok(session) => {
                        self.loading.handle(loading::Message::Stop);
                        self.error = None;
                        self.active_request = None;
                        let document_name = self
                            .source
                            .as_ref()
                            .map(DocumentSource::display_name)
                            .unwrap_or_default();
                        self.holder.handle(session_holder::Message::SetSession {
                            session,
                            document_name,
                        });
                        Vec::new()
                    }
                    Err(error) => {
                        self.fail_attempt(&error, i18n);
                        Vec::new()
                    }
                }
            }

            Message::SpinnerTick => match self.loading.handle(loading::Message::SpinnerTick) {
                loading::Effect::LoadingTimedOut => vec![Effect::LoadingTimedOut],
                loading::Effect::None => Vec::new(),
            },

            Message::ToggleErrorDetails => {
                if let Some(error) = &mut self.error {
                    error.handle(error_state::Message::ToggleDetails);
                }
                Vec::new()
            }

            Message::RefreshTranslations => {
                if let Some(error) = &mut self.error {
                    error.refresh_translation(i18n);
                }
                Vec::new()
            }
        }
    }

    /// Starts a fresh attempt for `source`: disposes any live session,
    /// supersedes any in-flight attempt, and enters the resolving phase.
    fn begin_attempt(&mut self, source: DocumentSource) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Some(session) = self.holder.take_session() {
            effects.push(Effect::Dispose(session));
        }

        self.error = None;
        self.next_request += 1;
        let request = RequestId(self.next_request);
        self.active_request = Some(request);
        self.loading
            .handle(loading::Message::Start(loading::LoadPhase::Resolving));

        effects.push(Effect::Resolve { request, source });
        effects
    }

    fn fail_attempt(&mut self, error: &Error, i18n: &I18n) {
        self.loading.handle(loading::Message::Stop);
        self.active_request = None;
        self.error = Some(error_state::State::new(error, i18n));
    }

    fn is_current(&self, request: RequestId) -> bool {
        self.active_request == Some(request)
    }

    // ═══════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════

    /// Observable phase derived from the composed sub-states.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Errored
        } else if self.loading.is_loading() {
            Phase::Loading
        } else if self.holder.has_session() {
            Phase::Ready
        } else {
            Phase::Idle
        }
    }

    /// The retained document reference, if any.
    #[must_use]
    pub fn source(&self) -> Option<&DocumentSource> {
        self.source.as_ref()
    }

    /// Check if a session is live.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.holder.has_session()
    }

    /// The live session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&SessionHandle> {
        self.holder.session()
    }

    /// Takes the live session for teardown (e.g. on window close).
    #[must_use]
    pub fn take_session(&mut self) -> Option<SessionHandle> {
        self.holder.take_session()
    }

    /// Current error state, if any.
    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        self.error.as_ref()
    }
}
