// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use crate::trie::TrieError;

/// Whiplace error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Pattern set rejected while building the trie
    #[error("{0}")]
    Trie(#[from] TrieError),

    /// Pattern line without a separator
    #[error("{}:{line}: separator {separator:?} not found", .path.display())]
    MissingSeparator {
        path: PathBuf,
        line: usize,
        separator: char,
    },

    /// Pattern file is not valid UTF-8
    #[error("{}: pattern file is not valid UTF-8", .path.display())]
    InvalidUtf8 { path: PathBuf },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },
}

/// Result type using whiplace Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Input substituted (or patterns validated)
    Success = 0,
    /// Pattern set is invalid; nothing was written
    PatternError = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// I/O failure or unexpected error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Trie(_) | Error::MissingSeparator { .. } | Error::InvalidUtf8 { .. } => {
                ExitCode::PatternError
            }
            Error::FileTooLarge { .. } => ExitCode::PatternError,
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::Io { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
