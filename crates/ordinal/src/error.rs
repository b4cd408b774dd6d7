//! Error types for Ordinal operations.
//!
//! This module provides the main error type [`OrdinalError`] and the
//! [`MalformedDirective`] report produced when a position directive cannot
//! be parsed and the item falls back to the default placement.

use std::io;

use thiserror::Error;

use ordinal_parser::error::{Diagnostic, ParseError};

/// The main error type for Ordinal operations.
///
/// Sorting itself never fails; these errors come from the surrounding
/// layers: reading input, loading configuration, evaluating sub-elements
/// and enforcing strict directives.
#[derive(Debug, Error)]
pub enum OrdinalError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A malformed directive while malformed directives are denied.
    #[error("invalid position of `{key}`: {err}")]
    Directive {
        key: String,
        err: ParseError,
        src: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// An [`Evaluator`](crate::Evaluator) failed while rendering.
    #[error("evaluation failed: {0}")]
    Evaluation(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A directive that could not be parsed.
///
/// The item it belongs to is placed as if it had no directive.
#[derive(Debug, Clone)]
pub struct MalformedDirective {
    key: String,
    source: String,
    diagnostic: Diagnostic,
}

impl MalformedDirective {
    pub(crate) fn new(
        key: impl Into<String>,
        source: impl Into<String>,
        diagnostic: Diagnostic,
    ) -> Self {
        Self {
            key: key.into(),
            source: source.into(),
            diagnostic,
        }
    }

    /// Key of the item carrying the directive.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The raw directive text. Diagnostic spans index into it.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Warning describing the problem.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }
}

impl From<MalformedDirective> for OrdinalError {
    fn from(malformed: MalformedDirective) -> Self {
        Self::Directive {
            key: malformed.key,
            err: ParseError::from(malformed.diagnostic),
            src: malformed.source,
        }
    }
}
