//! Errors surfaced while rewriting an HTML file on disk.

use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors that can occur while rewriting an HTML file in place.
///
/// Every variant carries the path it refers to so the message names the file
/// without callers having to add their own context. A document that contains
/// no matching asset reference is a normal no-op, not an error.
#[derive(Debug)]
pub enum RewriteError {
    /// Failed to read the target file from disk.
    Read {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// The target file's contents are not valid UTF-8 text.
    Encoding {
        /// Path that caused the error.
        path: PathBuf,
        /// Source decoding error.
        source: FromUtf8Error,
    },
    /// Failed to overwrite the target file with the rewritten document.
    Write {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
}

impl std::fmt::Display for RewriteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read {}: {}", path.display(), source)
            }
            Self::Encoding { path, source } => {
                write!(f, "{} is not valid UTF-8: {}", path.display(), source)
            }
            Self::Write { path, source } => {
                write!(f, "failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RewriteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Encoding { source, .. } => Some(source),
        }
    }
}
