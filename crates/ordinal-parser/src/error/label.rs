//! Labeled spans for directive diagnostics.

use crate::span::Span;

/// A message attached to a span of a directive string.
///
/// A diagnostic has one primary label marking the offending text and may
/// carry secondary labels for surrounding context:
///
/// ```text
/// warning[E004]: unexpected trailing input
///  1 | before header 12 later
///    | ----------------^^^^^^
///    | |               |
///    | |               not part of a directive
///    | complete directive
/// ```
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
