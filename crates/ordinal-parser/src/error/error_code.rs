//! Error codes for the directive diagnostic system.
//!
//! All directive problems share the `E0xx` range.

use std::fmt;

/// Error codes for categorizing directive diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Unrecognized directive.
    ///
    /// The text is neither a keyword directive (`start`, `end`, `before`,
    /// `after`) nor a number.
    E001,

    /// Missing reference name.
    ///
    /// `before` and `after` must be followed by the name of another item.
    E002,

    /// Invalid priority.
    ///
    /// The priority following a directive is not an integer, or does not
    /// fit in 64 bits.
    E003,

    /// Unexpected trailing input.
    ///
    /// A complete directive was followed by more text.
    E004,

    /// Invalid number.
    ///
    /// A numeric position has no digits or is too large to represent.
    E005,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E005 => "E005",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unrecognized directive",
            ErrorCode::E002 => "missing reference name",
            ErrorCode::E003 => "invalid priority",
            ErrorCode::E004 => "unexpected trailing input",
            ErrorCode::E005 => "invalid number",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
