//! Error types for hub-changelog.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for composite changelog operations.
#[derive(Error, Debug)]
pub enum CompositeError {
    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Network/API errors
    #[error("Network request to {url} failed: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Lookup failed for {repo}: {message}")]
    LookupError { repo: String, message: String },

    // Subprocess errors
    #[error("Changelog generation failed for {dependency}: {message}")]
    GenerationError { dependency: String, message: String },

    // Filesystem errors
    #[error("File operation on {} failed: {source}", path.display())]
    FileIOError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using CompositeError
pub type Result<T> = std::result::Result<T, CompositeError>;

impl CompositeError {
    /// Create a network error for the url that failed
    pub fn network(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::NetworkError {
            url: url.into(),
            source,
        }
    }

    /// Create a lookup error with the repository it occurred against
    pub fn lookup(repo: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::LookupError {
            repo: repo.into(),
            message: msg.into(),
        }
    }

    /// Create a generation error for a dependency
    pub fn generation(
        dependency: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::GenerationError {
            dependency: dependency.into(),
            message: msg.into(),
        }
    }

    /// Create a file error for the given path
    pub fn file_io(path: &Path, source: std::io::Error) -> Self {
        Self::FileIOError {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
