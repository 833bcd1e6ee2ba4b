// SPDX-License-Identifier: MPL-2.0
//! Rendering engine boundary.
//!
//! The viewer never talks to a concrete rendering SDK directly. It sees a
//! narrow capability interface: [`RenderEngine::initialize`] turns a
//! [`SessionConfig`] into a live [`SessionHandle`], and the handle's
//! `dispose` releases whatever the engine allocated. The engine's internal
//! rendering logic is out of scope here; what it exposes for drawing is
//! the [`SessionInfo`] snapshot.

pub mod preview;

use crate::error::EngineError;
use futures_util::future::BoxFuture;
use std::fmt;
use std::sync::Arc;

/// Visual theme applied to the engine surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceTheme {
    Light,
    #[default]
    Dark,
}

/// Toolbar items requested from the engine when a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    SidebarToggle,
    Pager,
    Zoom,
    Search,
    ExportPdf,
}

impl ToolbarItem {
    /// Stable identifier, also used as the display label on the
    /// placeholder surface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ToolbarItem::SidebarToggle => "sidebar-toggle",
            ToolbarItem::Pager => "pager",
            ToolbarItem::Zoom => "zoom",
            ToolbarItem::Search => "search",
            ToolbarItem::ExportPdf => "export-pdf",
        }
    }
}

/// Toolbar layout requested for every session.
pub const DEFAULT_TOOLBAR: [ToolbarItem; 4] = [
    ToolbarItem::SidebarToggle,
    ToolbarItem::Pager,
    ToolbarItem::Zoom,
    ToolbarItem::Search,
];

/// Identity of the visual surface a session is mounted into. The
/// workbench has a single viewer pane, but the id keeps sessions
/// traceable if more panes are added.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceId(pub u64);

impl SurfaceId {
    /// The workbench's single viewer pane.
    pub const PRIMARY: SurfaceId = SurfaceId(0);
}

/// Configuration handed to [`RenderEngine::initialize`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub surface: SurfaceId,
    pub document: Vec<u8>,
    pub document_name: String,
    /// Base locator for engines that resolve relative assets.
    pub base_url: Option<String>,
    pub theme: SurfaceTheme,
    pub toolbar_items: Vec<ToolbarItem>,
    pub annotations_enabled: bool,
    pub text_selection: bool,
}

impl SessionConfig {
    /// The fixed configuration used by the viewer: dark surface, default
    /// toolbar, annotations off, text selection on.
    #[must_use]
    pub fn for_surface(surface: SurfaceId, document_name: String, document: Vec<u8>) -> Self {
        Self {
            surface,
            document,
            document_name,
            base_url: None,
            theme: SurfaceTheme::Dark,
            toolbar_items: DEFAULT_TOOLBAR.to_vec(),
            annotations_enabled: false,
            text_selection: true,
        }
    }
}

/// Snapshot of a live session that the surface can draw from.
#[derive(Debug, Clone)]
pub struct SessionInfo {
    pub document_name: String,
    pub byte_len: usize,
    /// Short content fingerprint, stable for identical bytes.
    pub fingerprint: String,
    /// Whether the buffer carried the expected container signature.
    pub container_recognized: bool,
    pub theme: SurfaceTheme,
    pub toolbar_items: Vec<ToolbarItem>,
    pub annotations_enabled: bool,
    pub text_selection: bool,
}

/// A live render session owned by exactly one viewer.
pub trait RenderSession: Send + Sync {
    /// What the surface needs in order to draw this session.
    fn info(&self) -> &SessionInfo;

    /// Releases the engine's resources. Must be called before a
    /// replacement session exists and on teardown. Calling it twice is an
    /// engine error.
    fn dispose(&self) -> BoxFuture<'static, Result<(), EngineError>>;
}

/// Narrow capability interface over an external rendering engine.
pub trait RenderEngine: Send + Sync {
    /// Engine identifier for logs.
    fn name(&self) -> &'static str;

    /// Opens a session for the configured document.
    fn initialize(&self, config: SessionConfig)
        -> BoxFuture<'static, Result<SessionHandle, EngineError>>;
}

/// Cloneable handle to a [`RenderSession`] so sessions can travel through
/// the message loop. Cloning shares the same underlying session; the
/// viewer still treats it as exclusively owned.
#[derive(Clone)]
pub struct SessionHandle(Arc<dyn RenderSession>);

impl SessionHandle {
    pub fn new(session: impl RenderSession + 'static) -> Self {
        Self(Arc::new(session))
    }

    #[must_use]
    pub fn info(&self) -> &SessionInfo {
        self.0.info()
    }

    pub fn dispose(&self) -> BoxFuture<'static, Result<(), EngineError>> {
        self.0.dispose()
    }
}

impl fmt::Debug for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionHandle")
            .field("document", &self.info().document_name)
            .field("bytes", &self.info().byte_len)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_config_disables_annotations_and_enables_selection() {
        let config =
            SessionConfig::for_surface(SurfaceId::PRIMARY, "deck.pptx".into(), vec![1, 2, 3]);
        assert!(!config.annotations_enabled);
        assert!(config.text_selection);
        assert_eq!(config.theme, SurfaceTheme::Dark);
        assert_eq!(config.toolbar_items, DEFAULT_TOOLBAR.to_vec());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn toolbar_items_have_stable_identifiers() {
        assert_eq!(ToolbarItem::SidebarToggle.as_str(), "sidebar-toggle");
        assert_eq!(ToolbarItem::ExportPdf.as_str(), "export-pdf");
    }
}
