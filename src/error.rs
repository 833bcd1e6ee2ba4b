// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// File rejected before entering the load lifecycle (wrong extension).
    InvalidInputFile(String),
    /// Remote document could not be fetched.
    Network(NetworkError),
    /// The rendering engine rejected or failed during session setup.
    EngineInit(EngineError),
    Io(String),
    Config(String),
}

impl Error {
    /// Returns the i18n message key for the user-facing description of
    /// this error. Technical details are carried separately.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::InvalidInputFile(_) => "error-invalid-input-file",
            Error::Network(_) => "error-network",
            Error::EngineInit(_) => "error-engine-init",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
        }
    }
}

/// Failures while fetching a remote document.
#[derive(Debug, Clone)]
pub enum NetworkError {
    /// The server answered with a non-success status code.
    Status(u16),
    /// The request never produced a usable response (DNS, TLS, timeout...).
    Transport(String),
}

impl fmt::Display for NetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkError::Status(code) => write!(f, "server returned status {}", code),
            NetworkError::Transport(msg) => write!(f, "request failed: {}", msg),
        }
    }
}

/// Failures reported by a rendering engine while opening or closing a
/// session. Engines are external collaborators, so the variants stay
/// coarse and carry the engine's own wording in `Rejected`.
#[derive(Debug, Clone)]
pub enum EngineError {
    /// The supplied buffer was empty.
    EmptyDocument,
    /// The engine refused the configuration or the document.
    Rejected(String),
    /// An operation was attempted on a session that was already disposed.
    Disposed,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::EmptyDocument => write!(f, "document buffer is empty"),
            EngineError::Rejected(msg) => write!(f, "engine rejected the document: {}", msg),
            EngineError::Disposed => write!(f, "session already disposed"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInputFile(name) => write!(f, "Unsupported input file: {}", name),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::EngineInit(e) => write!(f, "Engine Error: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<NetworkError> for Error {
    fn from(err: NetworkError) -> Self {
        Error::Network(err)
    }
}

impl From<EngineError> for Error {
    fn from(err: EngineError) -> Self {
        Error::EngineInit(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::Transport(err.to_string()))
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn network_status_error_mentions_code() {
        let err = Error::Network(NetworkError::Status(404));
        assert!(format!("{}", err).contains("404"));
    }

    #[test]
    fn engine_error_wraps_into_engine_init() {
        let err: Error = EngineError::EmptyDocument.into();
        assert!(matches!(err, Error::EngineInit(EngineError::EmptyDocument)));
    }

    #[test]
    fn invalid_input_file_keeps_file_name() {
        let err = Error::InvalidInputFile("notes.txt".to_string());
        assert!(format!("{}", err).contains("notes.txt"));
    }

    #[test]
    fn i18n_keys_cover_all_variants() {
        assert_eq!(
            Error::InvalidInputFile(String::new()).i18n_key(),
            "error-invalid-input-file"
        );
        assert_eq!(
            Error::Network(NetworkError::Status(500)).i18n_key(),
            "error-network"
        );
        assert_eq!(
            Error::EngineInit(EngineError::Disposed).i18n_key(),
            "error-engine-init"
        );
        assert_eq!(Error::Io(String::new()).i18n_key(), "error-io");
        assert_eq!(Error::Config(String::new()).i18n_key(), "error-config");
    }

    #[test]
    fn engine_rejected_display_carries_reason() {
        let err = EngineError::Rejected("unsupported revision".into());
        assert!(format!("{}", err).contains("unsupported revision"));
    }
}
