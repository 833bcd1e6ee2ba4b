// SPDX-License-Identifier: MPL-2.0
//! Session holder sub-component for the current render session.

use crate::engine::SessionHandle;

/// Holds the one live render session, if any, together with the display
/// name of the document it renders.
#[derive(Debug, Default)]
pub struct State {
    session: Option<SessionHandle>,
    document_name: Option<String>,
}

/// Messages for the session holder sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Store a freshly established session.
    SetSession {
        session: SessionHandle,
        document_name: String,
    },
    /// Drop the session reference (the caller owns disposal).
    Clear,
}

/// Effects produced by session holder changes.
#[derive(Debug, Clone)]
pub enum Effect {
    /// No effect.
    None,
    /// A new session is mounted.
    SessionChanged,
    /// The surface should show the empty state.
    SessionCleared,
}

impl State {
    /// Handle a session holder message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::SetSession {
                session,
                document_name,
            } => {
                self.session = Some(session);
                self.document_name = Some(document_name);
                Effect::SessionChanged
            }
            Message::Clear => {
                self.session = None;
                self.document_name = None;
                Effect::SessionCleared
            }
        }
    }

    /// Takes the session out of the holder, leaving it empty. Used on
    /// every teardown path so the old session can be disposed.
    #[must_use]
    pub fn take_session(&mut self) -> Option<SessionHandle> {
        self.document_name = None;
        self.session.take()
    }

    /// Get the current session.
    #[must_use]
    pub fn session(&self) -> Option<&SessionHandle> {
        self.session.as_ref()
    }

    /// Check if a session is mounted.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }

    /// Display name of the mounted document.
    #[must_use]
    pub fn document_name(&self) -> Option<&str> {
        self.document_name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{RenderEngine, SessionConfig, SurfaceId};
    use crate::test_utils::FakeEngine;

    async fn sample_session() -> SessionHandle {
        FakeEngine::new()
            .initialize(SessionConfig::for_surface(
                SurfaceId::PRIMARY,
                "deck.pptx".into(),
                vec![0; 4],
            ))
            .await
            .expect("fake engine initializes")
    }

    #[tokio::test]
    async fn set_session_stores_handle_and_name() {
        let mut state = State::default();
        let effect = state.handle(Message::SetSession {
            session: sample_session().await,
            document_name: "deck.pptx".into(),
        });

        assert!(matches!(effect, Effect::SessionChanged));
        assert!(state.has_session());
        assert_eq!(state.document_name(), Some("deck.pptx"));
    }

    #[tokio::test]
    async fn take_session_empties_the_holder() {
        let mut state = State::default();
        state.handle(Message::SetSession {
            session: sample_session().await,
            document_name: "deck.pptx".into(),
        });

        let taken = state.take_session();
        assert!(taken.is_some());
        assert!(!state.has_session());
        assert!(state.document_name().is_none());
    }

    #[test]
    fn default_state_is_empty() {
        let state = State::default();
        assert!(!state.has_session());
        assert!(state.session().is_none());
    }
}
