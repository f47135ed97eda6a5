// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum LinesError {
    /// A name pattern supplied by the caller does not compile.
    #[error("Invalid {flag} pattern '{pattern}': {details}")]
    InvalidPattern {
        flag: String,
        pattern: String,
        details: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Invalid configuration: {reason}")]
    InvalidConfiguration { reason: String },

    #[error("Failed to list directory '{path}': {source}")]
    Traversal {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open file '{path}': {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A comment pattern in the language table does not compile.
    #[error("Invalid comment pattern '{pattern}' for {language}: {details}")]
    LanguagePattern {
        language: String,
        pattern: String,
        details: String,
    },

    #[error("Thread pool creation failed: {details}")]
    ThreadPool { details: String },
}

pub type Result<T> = std::result::Result<T, LinesError>;

/// Coarse classification of [`LinesError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad caller input, detected before any traversal.
    Configuration,
    /// A directory could not be listed; ends the scan.
    Traversal,
    /// A single file could not be opened or read; the file is skipped.
    FileOpen,
    /// A language comment pattern failed to compile; the file is skipped.
    Pattern,
}

impl LinesError {
    pub fn invalid_pattern<E>(flag: impl Into<String>, pattern: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        let details = err.to_string();
        Self::InvalidPattern {
            flag: flag.into(),
            pattern: pattern.into(),
            details,
            source: Some(Box::new(err)),
        }
    }

    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidPattern { .. } | Self::InvalidConfiguration { .. } | Self::ThreadPool { .. } => {
                ErrorKind::Configuration
            }
            Self::Traversal { .. } => ErrorKind::Traversal,
            Self::FileOpen { .. } | Self::FileRead { .. } => ErrorKind::FileOpen,
            Self::LanguagePattern { .. } => ErrorKind::Pattern,
        }
    }

    /// Fatal errors are surfaced to the caller; the others are absorbed per file.
    pub const fn is_fatal(&self) -> bool {
        matches!(self.kind(), ErrorKind::Configuration | ErrorKind::Traversal)
    }
}
