//! The validation outcome: errors and warnings as plain data.
//!
//! Validation never fails with an `Err` and never panics; whatever it
//! finds is collected here. The caller decides whether to render the
//! diagram (`is_valid`) or surface the first error with its position.

use serde::Serialize;

use crate::error::{Diagnostic, Severity};

/// All diagnostics produced for one pattern.
///
/// A pattern is valid iff no error-severity diagnostics were collected;
/// warnings alone do not prevent rendering a best-effort diagram.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    errors: Vec<Diagnostic>,
    warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Create an empty result (a valid pattern).
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the pattern is well-formed.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The collected errors, in pattern order.
    pub fn errors(&self) -> &[Diagnostic] {
        &self.errors
    }

    /// The collected warnings, in pattern order.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// The first error, the one an error-display surface shows.
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.errors.first()
    }

    /// Add a diagnostic, routed to errors or warnings by its severity.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::ErrorCode, span::Span};

    #[test]
    fn test_empty_result_is_valid() {
        let result = ValidationResult::new();

        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
        assert!(result.first_error().is_none());
    }

    #[test]
    fn test_error_invalidates() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error("unmatched `]`").with_code(ErrorCode::E200));

        assert!(!result.is_valid());
        assert_eq!(result.errors().len(), 1);
    }

    #[test]
    fn test_warnings_do_not_invalidate() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::warning("unterminated bracket group"));

        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 1);
    }

    #[test]
    fn test_first_error_in_pattern_order() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error("first").with_label(Span::new(1..2), "here"));
        result.push(Diagnostic::error("second").with_label(Span::new(5..6), "here"));

        assert_eq!(result.first_error().map(Diagnostic::message), Some("first"));
    }
}
