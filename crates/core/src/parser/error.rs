//! Error types for registry parsing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while parsing a registry index file.
#[derive(Error, Debug)]
pub enum ParserError {
    /// The index file could not be opened.
    #[error("Failed to open registry file at {path}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The index file is not a well-formed YAML document.
    #[error("Failed to decode registry file at {path}: {source}")]
    Decode {
        path: PathBuf,
        source: serde_yaml::Error,
    },
}

/// Type alias for Result with ParserError.
pub type ParserResult<T> = Result<T, ParserError>;

/// Per-subtree errors reported by document normalization.
///
/// No variant is currently constructed: normalization of the decoded
/// variant set cannot fail, and the empty enum lets the compiler prove it.
/// [`normalize`](super::normalize::normalize) still returns a list of these
/// alongside the rebuilt document.
#[derive(Error, Debug)]
pub enum NormalizeError {}
