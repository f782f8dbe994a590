use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_error::EXPR;
use crate::tokenizer::TokenKind;

/// The end of the formula was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of formula",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the formula was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of formula",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "there is no implicit multiplication; use `*` between factors",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected `{}`", found),
    labels = [format!("expected {} here", expected)],
)]
pub struct UnexpectedToken {
    /// A description of what was expected, starting with "a" or "an".
    pub expected: &'static str,

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// The formula nests expressions more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "formula is nested too deeply",
    labels = ["this expression is nested too deeply"],
    help = format!("{}s can be nested at most {} levels deep", "expression".fg(EXPR), max),
)]
pub struct TooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
