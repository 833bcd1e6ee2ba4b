// SPDX-License-Identifier: MPL-2.0
//! Document references and binary acquisition.
//!
//! A [`DocumentSource`] describes where a deck's bytes come from: a local
//! file, a remote locator, or an in-memory buffer. Sources are immutable;
//! swapping the source starts a new viewer lifecycle. Resolution is the
//! only asynchronous step before the engine takes over.

use crate::error::{Error, NetworkError, Result};
use std::path::{Path, PathBuf};

/// File extensions accepted by the file picker and drop target.
///
/// This is a client-side convenience check only. Content is never
/// inspected here; the rendering engine is the authority on whether a
/// document can actually be opened.
pub const SUPPORTED_EXTENSIONS: [&str; 1] = ["pptx"];

const USER_AGENT: &str = concat!("DeckScrub/", env!("CARGO_PKG_VERSION"));

/// Where a document's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A file on the local filesystem.
    File(PathBuf),
    /// An http(s) locator for a remote document.
    Remote(String),
    /// Bytes already held in memory, with a display name.
    Buffer { name: String, bytes: Vec<u8> },
}

impl DocumentSource {
    /// Builds a source from a CLI argument or dropped text: http(s)
    /// locators become [`DocumentSource::Remote`], everything else is
    /// treated as a path.
    #[must_use]
    pub fn from_argument(arg: &str) -> Self {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            DocumentSource::Remote(arg.to_string())
        } else {
            DocumentSource::File(PathBuf::from(arg))
        }
    }

    /// Short human-readable name for titles and the session surface.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            DocumentSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            DocumentSource::Remote(url) => url
                .rsplit('/')
                .find(|part| !part.is_empty())
                .unwrap_or(url)
                .to_string(),
            DocumentSource::Buffer { name, .. } => name.clone(),
        }
    }

    /// Resolves the source to its binary content.
    ///
    /// Local files are read fully into memory, remote locators are
    /// fetched with a hard failure on any non-success status, and
    /// buffers pass through unchanged.
    pub async fn resolve(self) -> Result<Vec<u8>> {
        match self {
            DocumentSource::File(path) => Ok(tokio::fs::read(&path).await?),
            DocumentSource::Remote(url) => fetch_remote(&url).await,
            DocumentSource::Buffer { bytes, .. } => Ok(bytes),
        }
    }
}

async fn fetch_remote(url: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Network(NetworkError::Status(status.as_u16())));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Client-side extension check used before a file enters the lifecycle.
#[must_use]
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Validates a picked or dropped file, producing the error shown in the
/// rejection alert. The lifecycle is never entered for rejected files.
pub fn check_input_file(path: &Path) -> Result<()> {
    if has_supported_extension(path) {
        Ok(())
    } else {
        Err(Error::InvalidInputFile(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        ))
    }
}
