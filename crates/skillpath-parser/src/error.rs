//! Error and diagnostic system for the Skillpath parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the normalized pattern
//! - Severity levels
//! - A [`ValidationResult`] carrying errors and warnings as plain data
//!
//! # Overview
//!
//! The system is built around the [`Diagnostic`] type, a single error or
//! warning with optional error code, source labels, and help text.
//! Validation never fails with an `Err`: the whole outcome is collected in
//! a [`ValidationResult`] so malformed input stays a representable value.
//! [`ParseError`] exists for callers that need the diagnostics as a
//! `std::error::Error` (e.g. to render them through a reporting facade).
//!
//! # Example
//!
//! ```
//! # use skillpath_parser::{Diagnostic, ErrorCode, Span};
//!
//! let span = Span::new(4..5);
//!
//! let diag = Diagnostic::error("bracket group holds fewer than two picks")
//!     .with_code(ErrorCode::E201)
//!     .with_label(span, "closed here")
//!     .with_help("a parallel pair needs exactly two slot digits: `[12]`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;
mod validation;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
pub use validation::ValidationResult;
