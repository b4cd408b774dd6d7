//! # Ordinal Parser
//!
//! Parser for position directive strings such as `"start"`, `"end 17"`,
//! `"before header"`, `"after first 12"` or `"5"`.
//!
//! ## Usage
//!
//! ```
//! # use ordinal_core::directive::Directive;
//! # use ordinal_parser::{parse, parse_lenient, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     assert_eq!(parse("before second 12")?, Directive::Before("second".into(), 12));
//!     assert_eq!(parse("")?, Directive::Unspecified);
//!
//!     // Lenient parsing never fails
//!     let (directive, warning) = parse_lenient("somewhere");
//!     assert_eq!(directive, Directive::Unspecified);
//!     assert!(warning.is_some());
//!     Ok(())
//! }
//! ```

pub mod error;

mod parser;
#[cfg(test)]
mod parser_tests;
mod span;

pub use span::Span;

use log::{debug, trace};

use ordinal_core::directive::Directive;

use error::{Diagnostic, ParseError};

/// Parse a directive string strictly.
///
/// Empty or whitespace-only input yields [`Directive::Unspecified`].
///
/// # Errors
///
/// Returns a [`ParseError`] with a single error-severity [`Diagnostic`]
/// when the text is not a valid directive.
pub fn parse(source: &str) -> Result<Directive, ParseError> {
    let directive = parser::parse_directive(source)?;
    trace!(source, directive:% = directive; "Parsed position directive");
    Ok(directive)
}

/// Parse a directive string, falling back to [`Directive::Unspecified`].
///
/// Malformed input is never an error: the fallback directive is returned
/// together with a warning-severity [`Diagnostic`] describing the problem.
pub fn parse_lenient(source: &str) -> (Directive, Option<Diagnostic>) {
    match parser::parse_directive(source) {
        Ok(directive) => (directive, None),
        Err(diag) => {
            debug!(source, code:? = diag.code(); "Malformed position directive");
            (Directive::Unspecified, Some(diag.into_warning()))
        }
    }
}
