//! Error types for Skillpath operations.
//!
//! This module provides the main error type [`SkillpathError`]. The
//! engine itself never fails - malformed patterns come back as data in a
//! [`ValidationResult`](skillpath_parser::ValidationResult) - but callers
//! that treat an invalid pattern as fatal (the CLI does) need the
//! diagnostics in error form, together with the pattern they index.

use std::io;

use thiserror::Error;

use skillpath_parser::ParseError;

/// The main error type for Skillpath operations.
///
/// The `Parse` variant carries structured diagnostics with spans into the
/// normalized pattern, enabling rich error reporting.
#[derive(Debug, Error)]
pub enum SkillpathError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },
}

impl SkillpathError {
    /// Create a new `Parse` error with the normalized pattern it indexes.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
