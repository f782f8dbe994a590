mod binary;
mod call;
mod expr;
mod literal;
mod unary;

use log::debug;
use pdiff_parser::{parser::parse, tokenizer::Token};
use super::{ctxt::Ctxt, error::EvalError};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError>;

    /// Evaluate the expression at the origin, where `x` and `y` are both zero.
    fn eval_default(&self) -> Result<f64, EvalError> {
        self.eval(&Ctxt::default())
    }
}

/// Evaluates the formula made of the given tokens at the point `(x, y)`.
///
/// The tokens must form exactly one expression, or [`EvalError::MalformedExpression`] is
/// returned. The same tokens and point always give the same result, to the bit.
pub fn evaluate(tokens: &[Token], x: f64, y: f64) -> Result<f64, EvalError> {
    let expr = parse(tokens).map_err(EvalError::MalformedExpression)?;
    let value = expr.eval(&Ctxt::new(x, y))?;
    debug!("f({}, {}) = {}", x, y, value);
    Ok(value)
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use pdiff_parser::{
        parser::{ast::expr::Expr, error::TooDeep, Parser, MAX_DEPTH},
        tokenizer::lex,
    };
    use pretty_assertions::assert_eq;
    use std::f64::consts;
    use crate::error::kind::{DivisionByZero, DomainError};
    use super::*;

    /// Lexes and evaluates the given formula at `(x, y)`.
    fn eval_str(source: &str, x: f64, y: f64) -> Result<f64, EvalError> {
        evaluate(&lex(source).unwrap(), x, y)
    }

    #[test]
    fn precedence() {
        assert_eq!(eval_str("2+3*4", 0.0, 0.0).unwrap(), 14.0);
    }

    #[test]
    fn parenthesized() {
        assert_eq!(eval_str("(2+3)*4", 0.0, 0.0).unwrap(), 20.0);
        assert_eq!(eval_str("((1 + 9) / 5) * 3", 0.0, 0.0).unwrap(), 6.0);
    }

    #[test]
    fn exponent_right_associative() {
        assert_eq!(eval_str("2^3^2", 0.0, 0.0).unwrap(), 512.0);
    }

    #[test]
    fn left_associative_subtraction_and_division() {
        assert_eq!(eval_str("10 - 4 - 3", 0.0, 0.0).unwrap(), 3.0);
        assert_eq!(eval_str("64 / 4 / 2", 0.0, 0.0).unwrap(), 8.0);
    }

    #[test]
    fn variables() {
        assert_eq!(eval_str("x^2+y^2", 3.0, 4.0).unwrap(), 25.0);
        assert_eq!(eval_str("x - y", 3.0, 4.0).unwrap(), -1.0);
    }

    #[test]
    fn distance() {
        assert_eq!(eval_str("sqrt(x^2+y^2)", 3.0, 4.0).unwrap(), 5.0);
    }

    #[test]
    fn functions() {
        assert_eq!(eval_str("sin(0) + cos(0)", 0.0, 0.0).unwrap(), 1.0);
        assert_float_relative_eq!(eval_str("exp(1)", 0.0, 0.0).unwrap(), consts::E);
        assert_float_relative_eq!(eval_str("log(exp(x))", 2.5, 0.0).unwrap(), 2.5);
        assert_float_relative_eq!(eval_str("sin x", consts::FRAC_PI_2, 0.0).unwrap(), 1.0);
    }

    #[test]
    fn function_binds_to_primary() {
        // `sin x^2` is `(sin x)^2`
        let value = eval_str("sin x^2", 2.0, 0.0).unwrap();
        assert_float_relative_eq!(value, 2.0f64.sin().powi(2));
    }

    #[test]
    fn negation() {
        assert_eq!(eval_str("-x^2", 3.0, 0.0).unwrap(), -9.0);
        assert_eq!(eval_str("-x * y", 3.0, 2.0).unwrap(), -6.0);
        assert_eq!(eval_str("--x", 3.0, 0.0).unwrap(), 3.0);
        assert_eq!(eval_str("2 - -x", 3.0, 0.0).unwrap(), 5.0);
    }

    #[test]
    fn signed_literals() {
        // the sign is part of the literal, so it is squared too
        assert_eq!(eval_str("-2^2", 0.0, 0.0).unwrap(), 4.0);
        assert_eq!(eval_str("2^-1", 0.0, 0.0).unwrap(), 0.5);
        assert_eq!(eval_str("3*-2", 0.0, 0.0).unwrap(), -6.0);
        assert_eq!(eval_str("x-1", 5.0, 0.0).unwrap(), 4.0);
    }

    #[test]
    fn spaced_sign_is_negation() {
        // a detached `-` is a unary negation, which binds looser than `^`
        assert_eq!(eval_str("- 2^2", 0.0, 0.0).unwrap(), -4.0);
        assert_eq!(eval_str("-2^2", 0.0, 0.0).unwrap(), 4.0);
    }

    #[test]
    fn minus_after_function_is_not_a_sign() {
        let err = eval_str("sin-1", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::MalformedExpression(_)));
        assert_float_relative_eq!(eval_str("sin(-1)", 0.0, 0.0).unwrap(), (-1.0f64).sin());
    }

    #[test]
    fn negative_base_integer_exponent() {
        assert_eq!(eval_str("x^3", -2.0, 0.0).unwrap(), -8.0);
    }

    #[test]
    fn division_by_zero() {
        let err = eval_str("1/0", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(DivisionByZero { operand: "divisor", .. })));
        assert_eq!(err.spans(), vec![1..2, 2..3]);
    }

    #[test]
    fn division_by_negative_zero() {
        let err = eval_str("1/(x*-1)", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(_)));
    }

    #[test]
    fn zero_to_negative_power() {
        let err = eval_str("x^-1", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(DivisionByZero { operand: "base", .. })));
    }

    #[test]
    fn log_domain() {
        let err = eval_str("log(-1)", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "log", .. })));

        let err = eval_str("log(x)", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(_)));
    }

    #[test]
    fn sqrt_domain() {
        let err = eval_str("sqrt(x)", -4.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "sqrt", value, .. }) if value == -4.0));
        assert_eq!(err.spans(), vec![4..7]);
        assert_eq!(eval_str("sqrt(x)", 0.0, 0.0).unwrap(), 0.0);
    }

    #[test]
    fn function_result_not_a_number() {
        let err = eval_str("sin(exp(x))", 1000.0, 0.0).unwrap_err();
        assert!(matches!(
            err,
            EvalError::DomainError(DomainError { operation: "sin", value, .. }) if value == f64::INFINITY
        ));
        assert_eq!(err.spans(), vec![3..11]);
    }

    #[test]
    fn operator_result_not_a_number() {
        let err = eval_str("exp(x) - exp(x)", 1000.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "-", .. })));
        assert_eq!(err.spans(), vec![0..6]);

        let err = eval_str("0 * exp(x)", 1000.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "*", .. })));
        assert_eq!(err.spans(), vec![4..10]);
    }

    #[test]
    fn not_a_number_argument() {
        for (source, operation) in [("sqrt(x)", "sqrt"), ("log(x)", "log"), ("x + 1", "+")] {
            let err = eval_str(source, f64::NAN, 0.0).unwrap_err();
            assert!(
                matches!(
                    err,
                    EvalError::DomainError(DomainError { operation: op, value, .. })
                        if op == operation && value.is_nan()
                ),
                "expected a domain error from {:?}, got {:?}",
                source,
                err,
            );
        }
    }

    #[test]
    fn overflow_is_not_an_error() {
        assert_eq!(eval_str("exp(x)", 1000.0, 0.0).unwrap(), f64::INFINITY);
        assert_eq!(eval_str("exp(x) + exp(x)", 1000.0, 0.0).unwrap(), f64::INFINITY);
    }

    #[test]
    fn fractional_power_of_negative() {
        let err = eval_str("x^0.5", -4.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DomainError(DomainError { operation: "^", .. })));
    }

    #[test]
    fn error_in_unused_branch_still_reported() {
        let err = eval_str("0 * (1/0)", 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::DivisionByZero(_)));
    }

    #[test]
    fn malformed() {
        for source in ["2+", "(x", "x)", "()", "", "sin", "2 3", "*x"] {
            let err = eval_str(source, 0.0, 0.0).unwrap_err();
            assert!(
                matches!(err, EvalError::MalformedExpression(_)),
                "expected {:?} to be malformed, got {:?}",
                source,
                err,
            );
        }
    }

    #[test]
    fn deeply_nested() {
        let source = format!("{}x{}", "(".repeat(5000), ")".repeat(5000));
        let err = eval_str(&source, 0.0, 0.0).unwrap_err();
        assert!(matches!(err, EvalError::MalformedExpression(ref err) if err.is::<TooDeep>()));

        let source = format!("{}x{}", "(".repeat(MAX_DEPTH), ")".repeat(MAX_DEPTH));
        assert_eq!(eval_str(&source, 2.0, 0.0).unwrap(), 2.0);
    }

    #[test]
    fn long_chain() {
        let source = vec!["x"; 1000].join(" + ");
        assert_eq!(eval_str(&source, 1.0, 0.0).unwrap(), 1000.0);
    }

    #[test]
    fn deterministic() {
        let tokens = lex("exp(-x) * cos(y) / (1 + x^2)").unwrap();
        let a = evaluate(&tokens, 0.3, 1.7).unwrap();
        let b = evaluate(&tokens, 0.3, 1.7).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn eval_parsed_expr() {
        let tokens = lex("x * y + 1").unwrap();
        let expr = Parser::new(&tokens).try_parse_full::<Expr>().unwrap();
        assert_eq!(expr.eval_default().unwrap(), 1.0);
        assert_eq!(expr.eval(&Ctxt::new(2.0, 3.0)).unwrap(), 7.0);
    }

    #[test]
    fn error_report() {
        let source = "log(x - 1)";
        let err: pdiff_error::Error = eval_str(source, 1.0, 0.0).unwrap_err().into();
        let mut buf = Vec::new();
        err.write_report("input", source, &mut buf).unwrap();
        let rendered = String::from_utf8(strip_ansi_escapes::strip(buf)).unwrap();
        assert!(rendered.contains("`log` is not defined for 0"));
        assert!(rendered.contains("this evaluates to 0"));
    }
}
