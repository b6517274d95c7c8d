//! # Skillpath Parser
//!
//! Parser and validator for the Skillpath build-order notation. This
//! crate provides the pipeline from a raw pattern string to the ordered
//! build-event list plus a structured validation outcome.
//!
//! The notation encodes a recommended per-level skill upgrade sequence:
//! slot digits `0`-`3`, `[..]` for a parallel pair, `(..)` for a delayed
//! pick, `-` for a negative-effect pick. Malformed input is always a
//! normal, representable outcome; nothing in this crate panics on it.
//!
//! ## Usage
//!
//! ```
//! use skillpath_parser::{PatternLimits, parse};
//!
//! let parsed = parse("(0)1[23]", &PatternLimits::default());
//!
//! assert!(parsed.validation().is_valid());
//! assert_eq!(parsed.events().len(), 4);
//! ```

pub mod error;

mod lexer;
mod parser;
mod preprocess;
mod span;
mod tokens;
mod validate;

pub use error::{Diagnostic, ErrorCode, Label, ParseError, Severity, ValidationResult};
pub use preprocess::normalize;
pub use span::Span;

use log::{debug, trace};

use skillpath_core::event::BuildEvent;

/// Defensive bounds applied before any parsing work.
///
/// The engine scans short strings; a generous fixed length bound is the
/// only protection pathological input needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternLimits {
    max_len: usize,
}

impl PatternLimits {
    /// Default maximum pattern length in bytes.
    ///
    /// A real build order covers some fifty character levels at no more
    /// than four bytes per pick; 256 leaves ample headroom.
    pub const DEFAULT_MAX_LEN: usize = 256;

    /// Create limits with a custom maximum length.
    pub fn new(max_len: usize) -> Self {
        Self { max_len }
    }

    /// The maximum accepted pattern length in bytes.
    pub fn max_len(&self) -> usize {
        self.max_len
    }
}

impl Default for PatternLimits {
    fn default() -> Self {
        Self {
            max_len: Self::DEFAULT_MAX_LEN,
        }
    }
}

/// The complete outcome of parsing one pattern.
///
/// Every position anywhere in the outcome (event source indexes,
/// diagnostic labels) is a byte offset into [`Self::normalized`], the
/// pattern after leading-pair rewriting.
#[derive(Debug, Clone)]
pub struct ParsedPattern {
    normalized: String,
    events: Vec<BuildEvent>,
    validation: ValidationResult,
}

impl ParsedPattern {
    /// The normalized pattern all positions refer to.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    /// The best-effort event list, in pattern order.
    pub fn events(&self) -> &[BuildEvent] {
        &self.events
    }

    /// The validation outcome.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Decompose into normalized pattern, events, and validation.
    pub fn into_parts(self) -> (String, Vec<BuildEvent>, ValidationResult) {
        (self.normalized, self.events, self.validation)
    }
}

/// Parse a build-order pattern into events and a validation outcome.
///
/// This is the main entry point of the crate. It orchestrates the
/// pipeline:
///
/// 1. **Bound** - reject patterns beyond the configured length
/// 2. **Normalize** - rewrite an implicit leading pair ([`normalize`])
/// 3. **Tokenize** - scan the normalized pattern into tokens
/// 4. **Validate** - collect structural errors and warnings
/// 5. **Parse** - build the best-effort event list
///
/// The function is total and pure: it never fails, never panics, and the
/// same pattern always yields the same outcome.
///
/// # Example
///
/// ```
/// use skillpath_parser::{PatternLimits, parse};
///
/// let parsed = parse("[1]", &PatternLimits::default());
///
/// assert!(!parsed.validation().is_valid());
/// assert_eq!(parsed.validation().first_error().unwrap().position(), Some(2));
/// ```
pub fn parse(pattern: &str, limits: &PatternLimits) -> ParsedPattern {
    debug!(pattern_len = pattern.len(); "Parsing build-order pattern");

    // Step 1: Bound
    if pattern.len() > limits.max_len() {
        let cut = (limits.max_len()..pattern.len())
            .find(|&i| pattern.is_char_boundary(i))
            .unwrap_or(pattern.len());
        let mut validation = ValidationResult::new();
        validation.push(
            Diagnostic::error(format!(
                "pattern exceeds the maximum length of {} bytes",
                limits.max_len()
            ))
            .with_code(ErrorCode::E101)
            .with_label(Span::new(cut..pattern.len()), "rejected before parsing")
            .with_help("build orders are short; check the input source"),
        );
        return ParsedPattern {
            normalized: pattern.to_string(),
            events: Vec::new(),
            validation,
        };
    }

    // Step 2: Normalize
    let normalized = normalize(pattern).into_owned();

    // Step 3: Tokenize
    let tokens = lexer::tokenize(&normalized);

    // Step 4: Validate
    let validation = validate::validate_tokens(&tokens);

    // Step 5: Parse (best-effort even when invalid)
    let events = parser::build_events(&tokens);

    trace!(
        events = events.len(),
        errors = validation.errors().len(),
        warnings = validation.warnings().len();
        "Pattern parsed"
    );

    ParsedPattern {
        normalized,
        events,
        validation,
    }
}
