//! Labeled spans for diagnostic messages.
//!
//! A label associates a message with a span in the normalized pattern,
//! providing context for where an error or warning occurred.

use serde::Serialize;

use crate::span::Span;

/// A labeled span in the normalized pattern.
///
/// # Primary vs Secondary Labels
///
/// - **Primary labels** mark the main location of an error or warning.
///   There should typically be one primary label per diagnostic.
/// - **Secondary labels** provide additional context, such as "group
///   opened here".
#[derive(Debug, Clone, Serialize)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    ///
    /// Primary labels mark the main location of an error or warning.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    ///
    /// Secondary labels provide additional context for the diagnostic.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    /// The labeled span.
    pub fn span(&self) -> Span {
        self.span
    }

    /// The label message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is a primary label.
    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// Whether this is a secondary label.
    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
