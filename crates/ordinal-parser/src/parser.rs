//! Parser for position directive strings.
//!
//! Grammar, with tokens separated by spaces or tabs:
//!
//! ```text
//! directive := "start" [priority]
//!            | "end" [priority]
//!            | "before" name [priority]
//!            | "after" name [priority]
//!            | number
//! priority  := integer
//! number    := ["+" | "-"] digits ["." digits]
//! name      := any run of non-whitespace characters
//! ```
//!
//! The public entry point is [`parse_directive`].

use winnow::{
    Parser as _,
    ascii::{dec_int, digit1, space1},
    combinator::{alt, cut_err, eof, opt, peek, preceded, terminated},
    error::{ContextError, ErrMode},
    stream::Stream,
    token::{literal, one_of, take_till},
};

use ordinal_core::{
    directive::{Directive, Priority},
    weight::Weight,
};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    span::Span,
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Expectation {
    code: ErrorCode,
    message: &'static str,
    label: &'static str,
    help: Option<&'static str>,
}

const UNRECOGNIZED: Expectation = Expectation {
    code: ErrorCode::E001,
    message: "unrecognized position directive",
    label: "not a directive",
    help: Some("use `start`, `end`, `before <name>`, `after <name>` or a number"),
};

const MISSING_REFERENCE: Expectation = Expectation {
    code: ErrorCode::E002,
    message: "missing reference name",
    label: "expected the name of another item",
    help: Some("write `before <name>` or `after <name>`"),
};

const INVALID_PRIORITY: Expectation = Expectation {
    code: ErrorCode::E003,
    message: "invalid priority",
    label: "expected an integer",
    help: Some("priorities are integers, e.g. `start 10`"),
};

const TRAILING_INPUT: Expectation = Expectation {
    code: ErrorCode::E004,
    message: "unexpected trailing input",
    label: "not part of a directive",
    help: None,
};

const INVALID_NUMBER: Expectation = Expectation {
    code: ErrorCode::E005,
    message: "invalid numeric position",
    label: "expected a finite number",
    help: Some("numeric positions look like `5`, `-3` or `17.5`"),
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Expectation>>>;

/// Match `word` only when it is a whole token.
fn keyword<'src>(word: &'static str) -> impl FnMut(&mut Input<'src>) -> IResult<&'src str> {
    move |input: &mut Input<'src>| {
        terminated(literal(word), peek(alt((space1, eof)))).parse_next(input)
    }
}

/// Parse ` <integer>` after a directive keyword or reference.
///
/// Backtracks when there is no separator, commits once one is found.
fn priority(input: &mut Input<'_>) -> IResult<Priority> {
    preceded(
        space1,
        cut_err(dec_int::<_, Priority, _>.context(INVALID_PRIORITY)),
    )
    .parse_next(input)
}

fn reference<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    cut_err(preceded(space1, take_till(1.., |c: char| c.is_whitespace())))
        .context(MISSING_REFERENCE)
        .parse_next(input)
}

fn start(input: &mut Input<'_>) -> IResult<Directive> {
    preceded(keyword("start"), opt(priority))
        .map(|priority| Directive::Start(priority.unwrap_or_default()))
        .parse_next(input)
}

fn end(input: &mut Input<'_>) -> IResult<Directive> {
    preceded(keyword("end"), opt(priority))
        .map(|priority| Directive::End(priority.unwrap_or_default()))
        .parse_next(input)
}

fn before(input: &mut Input<'_>) -> IResult<Directive> {
    preceded(keyword("before"), (reference, opt(priority)))
        .map(|(name, priority)| {
            Directive::Before(name.to_string(), priority.unwrap_or_default())
        })
        .parse_next(input)
}

fn after(input: &mut Input<'_>) -> IResult<Directive> {
    preceded(keyword("after"), (reference, opt(priority)))
        .map(|(name, priority)| {
            Directive::After(name.to_string(), priority.unwrap_or_default())
        })
        .parse_next(input)
}

/// Parse a bare number, keeping its fractional part.
///
/// Only numbers too large to represent are rejected.
fn numeric(input: &mut Input<'_>) -> IResult<Directive> {
    peek(one_of(|c: char| c.is_ascii_digit() || c == '-' || c == '+')).parse_next(input)?;

    cut_err(
        (opt(one_of(['+', '-'])), digit1, opt(('.', digit1)))
            .take()
            .verify_map(|text: &str| text.parse::<f64>().ok().and_then(Weight::new)),
    )
    .context(INVALID_NUMBER)
    .map(Directive::Numeric)
    .parse_next(input)
}

fn directive(input: &mut Input<'_>) -> IResult<Directive> {
    let directive = alt((start, end, before, after, numeric))
        .context(UNRECOGNIZED)
        .parse_next(input)?;

    cut_err(eof).context(TRAILING_INPUT).parse_next(input)?;

    Ok(directive)
}

/// Parse a directive string.
///
/// Leading and trailing whitespace is ignored and an empty string yields
/// [`Directive::Unspecified`]. Spans in the returned diagnostic index into
/// the untrimmed `source`.
pub fn parse_directive(source: &str) -> Result<Directive> {
    let trimmed = source.trim();
    if trimmed.is_empty() {
        return Ok(Directive::Unspecified);
    }

    let offset = source.len() - source.trim_start().len();
    let source_end = offset + trimmed.len();

    let mut input = trimmed;
    directive.parse_next(&mut input).map_err(|err| {
        let error_pos = source_end - input.eof_offset();
        convert_err_mode(err, offset..error_pos, error_pos..source_end)
    })
}

/// Convert a winnow error to a [`Diagnostic`].
///
/// `parsed` covers the text consumed before the failure and `rest` the text
/// from the failure to the end of the directive. Falls back to
/// [`ErrorCode::E001`] when no context is attached.
fn convert_err_mode(
    err: ErrMode<ContextError<Expectation>>,
    parsed: std::ops::Range<usize>,
    rest: std::ops::Range<usize>,
) -> Diagnostic {
    let context_error = match err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
        ErrMode::Incomplete(_) => ContextError::new(),
    };

    let expectation = context_error
        .context()
        .next()
        .cloned()
        .unwrap_or(UNRECOGNIZED);

    // An unrecognized directive is reported over its whole text.
    let span = if expectation.code == ErrorCode::E001 {
        Span::new(parsed.start..rest.end)
    } else {
        Span::new(rest)
    };

    let mut diag = Diagnostic::error(expectation.message)
        .with_code(expectation.code)
        .with_label(span, expectation.label);

    if expectation.code == ErrorCode::E004 && !parsed.is_empty() {
        diag = diag.with_secondary_label(Span::new(parsed), "complete directive");
    }
    if let Some(help) = expectation.help {
        diag = diag.with_help(help);
    }
    diag
}
