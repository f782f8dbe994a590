use ariadne::Fmt;
use pdiff_attrs::ErrorKind;
use pdiff_error::EXPR;
use std::ops::Range;

/// A division by zero was attempted, either directly with `/`, or by raising zero to a negative
/// power.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    labels = [
        "this operator".to_string(),
        format!("this {} evaluates to zero", operand),
    ],
    help = if *operand == "base" {
        format!("zero cannot be raised to a {} power", "negative".fg(EXPR))
    } else {
        format!("make sure the {} is never zero at the chosen point", operand.fg(EXPR))
    },
)]
pub struct DivisionByZero {
    /// The name of the operand that evaluated to zero, either `"divisor"` or `"base"`.
    pub operand: &'static str,

    /// The regions of the source code containing the operator and the zero operand, in that
    /// order.
    pub regions: Vec<Range<usize>>,
}

/// An operation was applied to a value outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined for {}", operation, value),
    labels = [format!("this evaluates to {}", value)],
    help = format!("`{}` is only defined for {}", operation.fg(EXPR), domain),
)]
pub struct DomainError {
    /// The function or operator that was applied.
    pub operation: &'static str,

    /// The offending value.
    pub value: f64,

    /// A description of the values the operation accepts.
    pub domain: &'static str,

    /// The region of the source code containing the offending operand.
    pub regions: Vec<Range<usize>>,
}

/// The step size of a finite difference is not a finite number greater than zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid step size `{}`", step),
    help = format!("the step size must be a {} number greater than zero", "finite".fg(EXPR)),
)]
pub struct InvalidStep {
    /// The step size that was given.
    pub step: f64,
}
