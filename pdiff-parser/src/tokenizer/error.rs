use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_error::{Error, EXPR};
use std::ops::Range;
use super::token::Func;

/// A character that cannot appear anywhere in a formula.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown character `{}`", character),
    labels = ["this character"],
    help = format!(
        "formulas can only contain numbers, {}, {}, the operators {}, parentheses, and function names",
        "x".fg(EXPR),
        "y".fg(EXPR),
        "+ - * / ^".fg(EXPR),
    ),
)]
pub struct UnknownCharacter {
    /// The character that was found.
    pub character: char,

    /// The region of the source code containing the character.
    pub span: Range<usize>,
}

/// A name that is neither a variable nor a known function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown name `{}`", name),
    labels = ["this name"],
    help = if suggestions.is_empty() {
        format!(
            "the only variables are {} and {}, and the available functions are: {}",
            "x".fg(EXPR),
            "y".fg(EXPR),
            Func::ALL.iter().map(|func| format!("`{}`", func.name().fg(EXPR))).collect::<Vec<_>>().join(", "),
        )
    } else {
        format!(
            "did you mean {}?",
            suggestions.iter().map(|s| format!("`{}`", s.fg(EXPR))).collect::<Vec<_>>().join(" or "),
        )
    },
)]
pub struct UnknownIdentifier {
    /// The name that was found.
    pub name: String,

    /// Known names that are spelled similarly.
    pub suggestions: Vec<&'static str>,

    /// The region of the source code containing the name.
    pub span: Range<usize>,
}

/// Represents an error that can occur while lexing a formula.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character that is not part of any token.
    UnknownCharacter(UnknownCharacter),

    /// A run of letters that is not `x`, `y`, or a function name.
    UnknownIdentifier(UnknownIdentifier),
}

impl LexError {
    /// Returns the region of the source code that caused the error.
    pub fn span(&self) -> Range<usize> {
        match self {
            LexError::UnknownCharacter(e) => e.span.clone(),
            LexError::UnknownIdentifier(e) => e.span.clone(),
        }
    }
}

impl From<UnknownCharacter> for LexError {
    fn from(e: UnknownCharacter) -> Self {
        LexError::UnknownCharacter(e)
    }
}

impl From<UnknownIdentifier> for LexError {
    fn from(e: UnknownIdentifier) -> Self {
        LexError::UnknownIdentifier(e)
    }
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        let spans = vec![e.span()];
        match e {
            LexError::UnknownCharacter(e) => Error::new(spans, e),
            LexError::UnknownIdentifier(e) => Error::new(spans, e),
        }
    }
}
