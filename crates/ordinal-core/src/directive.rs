//! Position directives attached to named sub-elements.
//!
//! A [`Directive`] is the typed form of a position string such as `"start"`,
//! `"end 17"`, `"before header"` or `"5"`. Parsing the string form lives in
//! the `ordinal-parser` crate; this module only describes the result.

use std::fmt;

use crate::weight::Weight;

/// Fine-grained ordering weight among items sharing a positional kind.
///
/// Omitted priorities are `0`.
pub type Priority = i64;

/// A position directive.
///
/// The [`Display`](fmt::Display) form is the canonical directive string. It
/// parses back to the same directive only when every reference name is a
/// single non-empty token: a name containing whitespace, or an empty name,
/// cannot be written as directive text.
///
/// # Examples
///
/// ```
/// use ordinal_core::directive::Directive;
///
/// let directive = Directive::Before("footer".to_string(), 12);
/// assert_eq!(directive.to_string(), "before footer 12");
/// assert_eq!(directive.reference(), Some("footer"));
///
/// assert_eq!(Directive::Start(0).to_string(), "start");
/// assert_eq!(Directive::default(), Directive::Unspecified);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Directive {
    /// Placed in the start block; higher priority is closer to the front.
    Start(Priority),
    /// Placed in the end block; higher priority is closer to the tail.
    End(Priority),
    /// Placed immediately before the named item.
    Before(String, Priority),
    /// Placed immediately after the named item.
    After(String, Priority),
    /// Placed in the middle region, ascending by value.
    Numeric(Weight),
    /// No directive. Behaves as `Numeric(0)`.
    #[default]
    Unspecified,
}

/// Discriminant of a [`Directive`] without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    Start,
    End,
    Before,
    After,
    Middle,
}

impl Directive {
    /// Returns the kind of this directive.
    ///
    /// Both [`Directive::Numeric`] and [`Directive::Unspecified`] map to
    /// [`DirectiveKind::Middle`].
    pub fn kind(&self) -> DirectiveKind {
        match self {
            Directive::Start(_) => DirectiveKind::Start,
            Directive::End(_) => DirectiveKind::End,
            Directive::Before(..) => DirectiveKind::Before,
            Directive::After(..) => DirectiveKind::After,
            Directive::Numeric(_) | Directive::Unspecified => DirectiveKind::Middle,
        }
    }

    /// Returns the priority of this directive, `0` for middle placements.
    pub fn priority(&self) -> Priority {
        match self {
            Directive::Start(priority)
            | Directive::End(priority)
            | Directive::Before(_, priority)
            | Directive::After(_, priority) => *priority,
            Directive::Numeric(_) | Directive::Unspecified => 0,
        }
    }

    /// Returns the sort key inside the middle region, if this is a middle placement.
    pub fn middle_value(&self) -> Option<Weight> {
        match self {
            Directive::Numeric(value) => Some(*value),
            Directive::Unspecified => Some(Weight::ZERO),
            _ => None,
        }
    }

    /// Returns the name of the referenced item for `before`/`after` directives.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Directive::Before(name, _) | Directive::After(name, _) => Some(name),
            _ => None,
        }
    }

    /// Returns `true` for `before`/`after` directives.
    pub fn is_relative(&self) -> bool {
        matches!(self, Directive::Before(..) | Directive::After(..))
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Start(priority) => write_keyword(f, "start", None, *priority),
            Directive::End(priority) => write_keyword(f, "end", None, *priority),
            Directive::Before(name, priority) => {
                write_keyword(f, "before", Some(name.as_str()), *priority)
            }
            Directive::After(name, priority) => {
                write_keyword(f, "after", Some(name.as_str()), *priority)
            }
            Directive::Numeric(value) => write!(f, "{value}"),
            Directive::Unspecified => Ok(()),
        }
    }
}

fn write_keyword(
    f: &mut fmt::Formatter<'_>,
    keyword: &str,
    reference: Option<&str>,
    priority: Priority,
) -> fmt::Result {
    write!(f, "{keyword}")?;
    if let Some(name) = reference {
        write!(f, " {name}")?;
    }
    if priority != 0 {
        write!(f, " {priority}")?;
    }
    Ok(())
}

impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DirectiveKind::Start => "start",
            DirectiveKind::End => "end",
            DirectiveKind::Before => "before",
            DirectiveKind::After => "after",
            DirectiveKind::Middle => "middle",
        };
        write!(f, "{name}")
    }
}
