pub mod kind;

use pdiff_error::Error;
use std::ops::Range;

pub use kind::{DivisionByZero, DomainError, InvalidStep};

/// Represents an error that can occur while evaluating or differentiating a formula.
///
/// The variants can be matched on directly. To render the error with a source listing, convert it
/// into an [`Error`].
#[derive(Debug)]
pub enum EvalError {
    /// A division by zero was attempted.
    DivisionByZero(DivisionByZero),

    /// A function or operator was applied outside of its domain.
    DomainError(DomainError),

    /// The tokens do not form a single well-formed expression. Contains the parse error.
    MalformedExpression(Error),

    /// The step size given to the differentiator is not usable.
    InvalidStep(InvalidStep),
}

impl EvalError {
    /// Returns the regions of the source code that caused the error.
    pub fn spans(&self) -> Vec<Range<usize>> {
        match self {
            EvalError::DivisionByZero(e) => e.regions.clone(),
            EvalError::DomainError(e) => e.regions.clone(),
            EvalError::MalformedExpression(e) => e.spans.clone(),
            EvalError::InvalidStep(_) => Vec::new(),
        }
    }
}

impl From<DivisionByZero> for EvalError {
    fn from(e: DivisionByZero) -> Self {
        EvalError::DivisionByZero(e)
    }
}

impl From<DomainError> for EvalError {
    fn from(e: DomainError) -> Self {
        EvalError::DomainError(e)
    }
}

impl From<InvalidStep> for EvalError {
    fn from(e: InvalidStep) -> Self {
        EvalError::InvalidStep(e)
    }
}

impl From<EvalError> for Error {
    fn from(e: EvalError) -> Self {
        let spans = e.spans();
        match e {
            EvalError::DivisionByZero(e) => Error::new(spans, e),
            EvalError::DomainError(e) => Error::new(spans, e),
            EvalError::MalformedExpression(e) => e,
            EvalError::InvalidStep(e) => Error::new(spans, e),
        }
    }
}
