// SPDX-License-Identifier: MPL-2.0
//! Built-in preview engine.
//!
//! Stands in where a proprietary viewing SDK would normally be mounted.
//! It does not parse deck content; it fingerprints the buffer, sniffs the
//! container signature, and exposes a summary surface. The lifecycle it
//! goes through (initialize, hold resources, dispose exactly once) is the
//! real contract the viewer is written against.

use super::{RenderEngine, RenderSession, SessionConfig, SessionHandle, SessionInfo};
use crate::error::EngineError;
use futures_util::future::BoxFuture;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Leading bytes of a ZIP archive, which is what a `.pptx` container is.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Characters of the blake3 hex digest shown on the surface.
const FINGERPRINT_LEN: usize = 16;

#[derive(Debug, Default)]
pub struct PreviewEngine;

impl PreviewEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl RenderEngine for PreviewEngine {
    fn name(&self) -> &'static str {
        "preview"
    }

    fn initialize(
        &self,
        config: SessionConfig,
    ) -> BoxFuture<'static, Result<SessionHandle, EngineError>> {
        Box::pin(async move {
            if config.document.is_empty() {
                return Err(EngineError::EmptyDocument);
            }

            let digest = blake3::hash(&config.document);
            let mut fingerprint = digest.to_hex().to_string();
            fingerprint.truncate(FINGERPRINT_LEN);

            let info = SessionInfo {
                document_name: config.document_name,
                byte_len: config.document.len(),
                fingerprint,
                container_recognized: config.document.starts_with(&ZIP_MAGIC),
                theme: config.theme,
                toolbar_items: config.toolbar_items,
                annotations_enabled: config.annotations_enabled,
                text_selection: config.text_selection,
            };

            Ok(SessionHandle::new(PreviewSession {
                info,
                disposed: Arc::new(AtomicBool::new(false)),
            }))
        })
    }
}

struct PreviewSession {
    info: SessionInfo,
    disposed: Arc<AtomicBool>,
}

impl RenderSession for PreviewSession {
    fn info(&self) -> &SessionInfo {
        &self.info
    }

    fn dispose(&self) -> BoxFuture<'static, Result<(), EngineError>> {
        let disposed = self.disposed.clone();
        Box::pin(async move {
            if disposed.swap(true, Ordering::SeqCst) {
                return Err(EngineError::Disposed);
            }
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SurfaceId;

    fn config(bytes: Vec<u8>) -> SessionConfig {
        SessionConfig::for_surface(SurfaceId::PRIMARY, "deck.pptx".into(), bytes)
    }

    #[tokio::test]
    async fn initialize_produces_session_with_fingerprint() {
        let engine = PreviewEngine::new();
        let session = engine
            .initialize(config(b"PK\x03\x04deck bytes".to_vec()))
            .await
            .expect("initialize should succeed");

        let info = session.info();
        assert_eq!(info.document_name, "deck.pptx");
        assert_eq!(info.fingerprint.len(), FINGERPRINT_LEN);
        assert!(info.container_recognized);
    }

    #[tokio::test]
    async fn identical_bytes_produce_identical_fingerprints() {
        let engine = PreviewEngine::new();
        let a = engine.initialize(config(vec![7; 64])).await.unwrap();
        let b = engine.initialize(config(vec![7; 64])).await.unwrap();
        assert_eq!(a.info().fingerprint, b.info().fingerprint);
    }

    #[tokio::test]
    async fn empty_buffer_is_rejected() {
        let engine = PreviewEngine::new();
        let err = engine.initialize(config(Vec::new())).await.unwrap_err();
        assert!(matches!(err, EngineError::EmptyDocument));
    }

    #[tokio::test]
    async fn non_zip_buffer_is_flagged_unrecognized() {
        let engine = PreviewEngine::new();
        let session = engine.initialize(config(vec![0x00, 0x01])).await.unwrap();
        assert!(!session.info().container_recognized);
    }

    #[tokio::test]
    async fn dispose_succeeds_once_then_errors() {
        let engine = PreviewEngine::new();
        let session = engine.initialize(config(vec![1, 2, 3])).await.unwrap();

        session.dispose().await.expect("first dispose succeeds");
        let err = session.dispose().await.unwrap_err();
        assert!(matches!(err, EngineError::Disposed));
    }
}
