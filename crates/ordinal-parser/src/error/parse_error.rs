//! The error returned by strict parsing.

use std::fmt;

use crate::error::Diagnostic;

/// A type alias for `Result<T, Diagnostic>`.
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// A directive rejected by [`parse`](crate::parse).
///
/// A directive is a single short token sequence, so parsing stops at the
/// first problem and the error carries exactly one error-severity
/// [`Diagnostic`].
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.diagnostic, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.diagnostic)
    }
}

/// The diagnostic is raised to error severity.
impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic: diagnostic.into_error(),
        }
    }
}
