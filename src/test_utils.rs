// SPDX-License-Identifier: MPL-2.0
//! Test utilities shared by unit and integration tests.
//!
//! The main helper is [`FakeEngine`], a [`RenderEngine`] that records how
//! many sessions were created and disposed so tests can assert the
//! one-live-session invariant without a real rendering SDK.

use crate::engine::{RenderEngine, RenderSession, SessionConfig, SessionHandle, SessionInfo};
use crate::error::EngineError;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

/// Counting fake for the engine boundary.
#[derive(Debug, Default)]
pub struct FakeEngine {
    created: Arc<AtomicUsize>,
    disposed: Arc<AtomicUsize>,
    /// When set, `initialize` fails with this message instead of
    /// producing a session.
    fail_init: Option<String>,
    /// When true, sessions report a disposal failure (but still count as
    /// released, matching an engine that tears down with a warning).
    fail_dispose: bool,
}

impl FakeEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An engine whose `initialize` always fails.
    #[must_use]
    pub fn failing(reason: &str) -> Self {
        Self {
            fail_init: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// An engine whose sessions fail on disposal.
    #[must_use]
    pub fn with_failing_dispose() -> Self {
        Self {
            fail_dispose: true,
            ..Self::default()
        }
    }

    /// Sessions created so far.
    #[must_use]
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Sessions released so far.
    #[must_use]
    pub fn disposed(&self) -> usize {
        self.disposed.load(Ordering::SeqCst)
    }

    /// Sessions currently alive. The viewer invariant is that this never
    /// exceeds one.
    #[must_use]
    pub fn live_sessions(&self) -> usize {
        self.created() - self.disposed()
    }
}

impl RenderEngine for FakeEngine {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn initialize(
        &self,
        config: SessionConfig,
    ) -> BoxFuture<'static, Result<SessionHandle, EngineError>> {
        let created = self.created.clone();
        let disposed = self.disposed.clone();
        let fail_init = self.fail_init.clone();
        let fail_dispose = self.fail_dispose;

        Box::pin(async move {
            if let Some(reason) = fail_init {
                return Err(EngineError::Rejected(reason));
            }

            created.fetch_add(1, Ordering::SeqCst);
            let info = SessionInfo {
                document_name: config.document_name,
                byte_len: config.document.len(),
                fingerprint: format!("fake-{:04}", config.document.len()),
                container_recognized: true,
                theme: config.theme,
                toolbar_items: config.toolbar_items,
                annotations_enabled: config.annotations_enabled,
                text_selection: config.text_selection,
            };

            Ok(SessionHandle::new(FakeSession {
                info,
                released: AtomicBool::new(false),
                disposed,
                fail_dispose,
            }))
        })
    }
}

struct FakeSession {
    info: SessionInfo,
    released: AtomicBool,
    disposed: Arc<AtomicUsize>,
    fail_dispose: bool,
}

impl RenderSession for FakeSession {
    fn info(&self) -> &SessionInfo {
        &self.info
    }

    fn dispose(&self) -> BoxFuture<'static, Result<(), EngineError>> {
        let already = self.released.swap(true, Ordering::SeqCst);
        let disposed = self.disposed.clone();
        let fail_dispose = self.fail_dispose;
        Box::pin(async move {
            if already {
                return Err(EngineError::Disposed);
            }
            disposed.fetch_add(1, Ordering::SeqCst);
            if fail_dispose {
                return Err(EngineError::Rejected("teardown warning".into()));
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SurfaceId;

    fn config() -> SessionConfig {
        SessionConfig::for_surface(SurfaceId::PRIMARY, "deck.pptx".into(), vec![0; 8])
    }

    #[tokio::test]
    async fn fake_engine_counts_created_and_disposed() {
        let engine = FakeEngine::new();
        let session = engine.initialize(config()).await.unwrap();
        assert_eq!(engine.live_sessions(), 1);

        session.dispose().await.unwrap();
        assert_eq!(engine.live_sessions(), 0);
        assert_eq!(engine.created(), 1);
        assert_eq!(engine.disposed(), 1);
    }

    #[tokio::test]
    async fn failing_engine_never_creates_sessions() {
        let engine = FakeEngine::failing("nope");
        let err = engine.initialize(config()).await.unwrap_err();
        assert!(matches!(err, EngineError::Rejected(_)));
        assert_eq!(engine.created(), 0);
    }

    #[tokio::test]
    async fn double_dispose_is_an_error_but_counts_once() {
        let engine = FakeEngine::new();
        let session = engine.initialize(config()).await.unwrap();
        session.dispose().await.unwrap();
        assert!(session.dispose().await.is_err());
        assert_eq!(engine.disposed(), 1);
    }

    #[tokio::test]
    async fn failing_dispose_still_releases_the_session() {
        let engine = FakeEngine::with_failing_dispose();
        let session = engine.initialize(config()).await.unwrap();
        assert!(session.dispose().await.is_err());
        assert_eq!(engine.live_sessions(), 0);
    }
}
