//! Error and diagnostic system for directive parsing.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans into the directive string
//! - Severity levels
//!
//! # Example
//!
//! ```
//! # use ordinal_parser::error::{Diagnostic, ErrorCode};
//! # use ordinal_parser::Span;
//!
//! let diag = Diagnostic::error("missing reference name")
//!     .with_code(ErrorCode::E002)
//!     .with_label(Span::new(6..6), "expected a name here")
//!     .with_help("write `before <name>` or `after <name>`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
