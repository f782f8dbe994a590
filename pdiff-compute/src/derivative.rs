//! Numerical partial derivatives using forward finite differences.
//!
//! The partial derivative of `f` with respect to `x` at `(x, y)` is estimated as
//!
//! ```text
//! (f(x + h, y) - f(x, y)) / h
//! ```
//!
//! and symmetrically for `y`. The truncation error of this estimate is proportional to `h`.

use log::debug;
use pdiff_parser::{
    parser::{ast::expr::Expr, parse},
    tokenizer::{Token, Var},
};
use crate::{
    ctxt::Ctxt,
    error::{kind::{DomainError, InvalidStep}, EvalError},
    eval::Eval,
};

/// The default step size used for finite differences.
pub const DEFAULT_STEP: f64 = 1e-4;

/// Returns an error if the step size is not a finite number greater than zero.
fn check_step(step: f64) -> Result<(), EvalError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(InvalidStep { step }.into())
    }
}

/// Estimates the partial derivative of the expression with respect to `var`, given the value of
/// the expression at `ctxt`.
fn partial(expr: &Expr, ctxt: Ctxt, base: f64, var: Var, step: f64) -> Result<f64, EvalError> {
    let shifted = ctxt.with_var(var, ctxt.get_var(var) + step);
    let value = expr.eval(&shifted)?;
    let derivative = (value - base) / step;

    // both values are the same infinity
    if derivative.is_nan() {
        return Err(DomainError {
            operation: match var {
                Var::X => "∂f/∂x",
                Var::Y => "∂f/∂y",
            },
            value: base,
            domain: "points where the formula is finite",
            regions: vec![expr.span()],
        }.into());
    }

    debug!("∂f/∂{} at ({}, {}) = {}", var, ctxt.x, ctxt.y, derivative);
    Ok(derivative)
}

/// Estimates both partial derivatives of an already parsed expression at `ctxt`, returning the
/// value of the expression at `ctxt` along with the gradient.
///
/// The expression is evaluated at `ctxt` exactly once.
pub fn value_and_gradient(expr: &Expr, ctxt: Ctxt, step: f64) -> Result<(f64, (f64, f64)), EvalError> {
    check_step(step)?;
    let base = expr.eval(&ctxt)?;
    let dx = partial(expr, ctxt, base, Var::X, step)?;
    let dy = partial(expr, ctxt, base, Var::Y, step)?;
    Ok((base, (dx, dy)))
}

/// Parses the tokens and estimates the partial derivative with respect to `var`.
fn partial_of(tokens: &[Token], ctxt: Ctxt, var: Var, step: f64) -> Result<f64, EvalError> {
    let expr = parse(tokens).map_err(EvalError::MalformedExpression)?;
    check_step(step)?;
    let base = expr.eval(&ctxt)?;
    partial(&expr, ctxt, base, var, step)
}

/// Estimates `∂f/∂x` at `(x, y)` with step size `step`.
pub fn partial_x(tokens: &[Token], x: f64, y: f64, step: f64) -> Result<f64, EvalError> {
    partial_of(tokens, Ctxt::new(x, y), Var::X, step)
}

/// Estimates `∂f/∂y` at `(x, y)` with step size `step`.
pub fn partial_y(tokens: &[Token], x: f64, y: f64, step: f64) -> Result<f64, EvalError> {
    partial_of(tokens, Ctxt::new(x, y), Var::Y, step)
}

/// Estimates the gradient `(∂f/∂x, ∂f/∂y)` at `(x, y)` with step size `step`.
///
/// The formula is parsed once, and its value at `(x, y)` is shared by both estimates. If any of
/// the three evaluations fails, the first failure is returned.
pub fn gradient(tokens: &[Token], x: f64, y: f64, step: f64) -> Result<(f64, f64), EvalError> {
    let expr = parse(tokens).map_err(EvalError::MalformedExpression)?;
    value_and_gradient(&expr, Ctxt::new(x, y), step).map(|(_, gradient)| gradient)
}

#[cfg(test)]
mod tests {
    use pdiff_parser::tokenizer::lex;
    use crate::error::kind::{DivisionByZero, DomainError};
    use super::*;

    /// Asserts that `actual` is within `tolerance` of `expected`.
    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {} to be within {} of {}",
            actual,
            tolerance,
            expected,
        );
    }

    #[test]
    fn gradient_of_paraboloid() {
        let tokens = lex("x^2+y^2").unwrap();
        let (dx, dy) = gradient(&tokens, 3.0, 4.0, 1e-4).unwrap();
        assert_close(dx, 6.0, 1e-2);
        assert_close(dy, 8.0, 1e-2);
    }

    #[test]
    fn partials_match_gradient() {
        let tokens = lex("sin(x) * exp(y)").unwrap();
        let (dx, dy) = gradient(&tokens, 0.5, 0.25, DEFAULT_STEP).unwrap();
        assert_eq!(partial_x(&tokens, 0.5, 0.25, DEFAULT_STEP).unwrap(), dx);
        assert_eq!(partial_y(&tokens, 0.5, 0.25, DEFAULT_STEP).unwrap(), dy);
        assert_close(dx, 0.5f64.cos() * 0.25f64.exp(), 1e-3);
        assert_close(dy, 0.5f64.sin() * 0.25f64.exp(), 1e-3);
    }

    #[test]
    fn independent_variable_has_zero_partial() {
        let tokens = lex("3 * x + 7").unwrap();
        assert_eq!(partial_y(&tokens, 1.0, 2.0, DEFAULT_STEP).unwrap(), 0.0);
    }

    #[test]
    fn smaller_step_is_more_accurate() {
        let tokens = lex("x^3").unwrap();
        let error_at = |step| (partial_x(&tokens, 2.0, 0.0, step).unwrap() - 12.0f64).abs();
        assert!(error_at(1e-4) < error_at(1e-2));
        assert!(error_at(1e-2) < error_at(1e-1));
    }

    #[test]
    fn value_and_gradient_share_base() {
        let tokens = lex("x * y").unwrap();
        let expr = parse(&tokens).unwrap();
        let (value, (dx, dy)) = value_and_gradient(&expr, Ctxt::new(2.0, 5.0), DEFAULT_STEP).unwrap();
        assert_eq!(value, 10.0);
        assert_close(dx, 5.0, 1e-6);
        assert_close(dy, 2.0, 1e-6);
    }

    #[test]
    fn invalid_step() {
        let tokens = lex("x").unwrap();
        for step in [0.0, -1e-4, f64::NAN, f64::INFINITY] {
            let err = gradient(&tokens, 1.0, 1.0, step).unwrap_err();
            assert!(matches!(err, EvalError::InvalidStep(_)), "step {} was accepted", step);
        }
    }

    #[test]
    fn failure_at_base_point() {
        let tokens = lex("log(x)").unwrap();
        let err = gradient(&tokens, 0.0, 1.0, DEFAULT_STEP).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "log", .. })));
    }

    #[test]
    fn failure_at_shifted_x() {
        // defined at x = -0.75, but x + h lands exactly on the pole at x = -0.5
        let tokens = lex("1 / (x + 0.5)").unwrap();
        let err = partial_x(&tokens, -0.75, 0.0, 0.25).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(DivisionByZero { .. })));
    }

    #[test]
    fn failure_at_shifted_y() {
        let tokens = lex("1 / (y + 0.5)").unwrap();
        assert!(partial_x(&tokens, 0.0, -0.75, 0.25).is_ok());

        let err = gradient(&tokens, 0.0, -0.75, 0.25).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(DivisionByZero { operand: "divisor", .. })));
        assert_eq!(err.spans(), vec![2..3, 4..13]);
    }

    #[test]
    fn infinite_value_has_no_derivative() {
        let tokens = lex("exp(x)").unwrap();
        let err = gradient(&tokens, 1000.0, 0.0, DEFAULT_STEP).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "∂f/∂x", .. })));
        assert_eq!(err.spans(), vec![0..6]);
    }

    #[test]
    fn malformed_formula() {
        let tokens = lex("x +").unwrap();
        let err = partial_y(&tokens, 0.0, 0.0, DEFAULT_STEP).unwrap_err();
        assert!(matches!(err, EvalError::MalformedExpression(_)));
    }
}
