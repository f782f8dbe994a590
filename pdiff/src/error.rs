use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_compute::EvalError;
use pdiff_error::EXPR;
use pdiff_parser::tokenizer::LexError;
use std::io;

/// A coordinate of the point could not be read as a finite number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("could not read the {} coordinate", name),
    labels = ["expected a finite number here"],
    help = format!("the point must be two numbers separated by whitespace, such as {}", "3 4".fg(EXPR)),
)]
pub struct InvalidCoordinate {
    /// The name of the coordinate, `x` or `y`.
    pub name: &'static str,
}

/// The point is missing a coordinate.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing the {} coordinate", name),
    labels = [format!("add the {} coordinate here", name)],
    help = format!("the point must be two numbers separated by whitespace, such as {}", "3 4".fg(EXPR)),
)]
pub struct MissingCoordinate {
    /// The name of the coordinate, `x` or `y`.
    pub name: &'static str,
}

/// There is more input after the two coordinates of the point.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected input after the point",
    labels = ["remove this"],
)]
pub struct TrailingInput;

/// A piece of input was not given at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing {}", what),
    help = "the first line of input is the formula, and the second line is the point",
)]
pub struct MissingInput {
    /// What is missing, such as `"the formula"`.
    pub what: &'static str,
}

/// A command-line option that does not exist.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown option `{}`", option),
    labels = ["this option"],
    help = format!("run {} to see the available options", "pdiff --help".fg(EXPR)),
)]
pub struct UnknownOption {
    /// The option as it was given.
    pub option: String,
}

/// A command-line option that takes a value was given without one.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing value for `{}`", option),
    labels = ["this option"],
    help = format!("write the value after the option, such as {} {}", option.fg(EXPR), example.fg(EXPR)),
)]
pub struct MissingOptionValue {
    /// The option as it was given.
    pub option: String,

    /// An example of a valid value.
    pub example: &'static str,
}

/// A command-line option was given a value it does not accept.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid value for `{}`", option),
    labels = [format!("expected {}", expected)],
)]
pub struct InvalidOptionValue {
    /// The option the value was given to.
    pub option: &'static str,

    /// A description of the values the option accepts.
    pub expected: &'static str,
}

/// The wrong number of positional arguments was given.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("expected a formula and a point, but {} argument(s) were given", given),
    help = format!("usage: {}", "pdiff [OPTIONS] <FORMULA> <X> <Y>".fg(EXPR)),
)]
pub struct WrongArgumentCount {
    /// The number of positional arguments that were given.
    pub given: usize,
}

/// Utility enum to package errors that can occur while reading input or evaluating a formula.
#[derive(Debug)]
pub enum Error {
    /// The formula could not be lexed, parsed, or evaluated.
    Formula(pdiff_error::Error),

    /// Some other piece of input was invalid. The error is reported against that input.
    Input {
        /// The name of the input, shown in the report.
        src_id: &'static str,

        /// The invalid input.
        input: String,

        /// The error.
        error: pdiff_error::Error,
    },
}

impl Error {
    /// Creates an error to be reported against the given input.
    pub fn input(src_id: &'static str, input: impl Into<String>, error: pdiff_error::Error) -> Self {
        Self::Input { src_id, input: input.into(), error }
    }

    /// Report this error to stderr. Errors in the formula are reported against the given source.
    ///
    /// The `ariadne` crate's [`Report`] type actually does not have a `Display` implementation, so
    /// we can only use its `eprint` method to print to stderr.
    ///
    /// [`Report`]: https://docs.rs/ariadne/latest/ariadne/struct.Report.html
    pub fn report_to_stderr(&self, formula: &str) -> io::Result<()> {
        match self {
            Self::Formula(err) => err.report_to_stderr("formula", formula),
            Self::Input { src_id, input, error } => error.report_to_stderr(src_id, input),
        }
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Self::Formula(err.into())
    }
}

impl From<EvalError> for Error {
    fn from(err: EvalError) -> Self {
        Self::Formula(err.into())
    }
}
