use pdiff_parser::{
    parser::parse,
    tokenizer::{lex, LexError, Token},
};
use crate::{
    ctxt::Ctxt,
    derivative::{self, value_and_gradient},
    error::EvalError,
    eval,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The value of a formula at a point, along with its partial derivatives there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Analysis {
    /// The value of the formula, `f(x, y)`.
    pub value: f64,

    /// The estimate of `∂f/∂x`.
    pub dx: f64,

    /// The estimate of `∂f/∂y`.
    pub dy: f64,
}

/// A lexed formula, kept together with its source so that errors can be reported against it.
///
/// The formula is lexed once in [`Formula::new`], and the same tokens are used for every
/// evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    /// The source code of the formula.
    source: String,

    /// The tokens lexed from the source code.
    tokens: Box<[Token]>,
}

impl Formula {
    /// Lexes the given source code into a formula.
    pub fn new(source: impl Into<String>) -> Result<Self, LexError> {
        let source = source.into();
        let tokens = lex(&source)?;
        Ok(Self { source, tokens })
    }

    /// Returns the source code of the formula.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the tokens of the formula.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Evaluates the formula at `(x, y)`.
    pub fn eval(&self, x: f64, y: f64) -> Result<f64, EvalError> {
        eval::evaluate(&self.tokens, x, y)
    }

    /// Estimates the gradient of the formula at `(x, y)`.
    pub fn gradient(&self, x: f64, y: f64, step: f64) -> Result<(f64, f64), EvalError> {
        derivative::gradient(&self.tokens, x, y, step)
    }

    /// Evaluates the formula at `(x, y)` and estimates its gradient there, parsing the formula
    /// and evaluating it at `(x, y)` only once.
    pub fn analyze(&self, x: f64, y: f64, step: f64) -> Result<Analysis, EvalError> {
        let expr = parse(&self.tokens).map_err(EvalError::MalformedExpression)?;
        let (value, (dx, dy)) = value_and_gradient(&expr, Ctxt::new(x, y), step)?;
        Ok(Analysis { value, dx, dy })
    }
}

#[cfg(test)]
mod tests {
    use pdiff_parser::tokenizer::UnknownIdentifier;
    use crate::derivative::DEFAULT_STEP;
    use super::*;

    #[test]
    fn analyze_matches_separate_calls() {
        let formula = Formula::new("sqrt(x^2 + y^2)").unwrap();
        let analysis = formula.analyze(3.0, 4.0, DEFAULT_STEP).unwrap();
        assert_eq!(analysis.value, formula.eval(3.0, 4.0).unwrap());
        assert_eq!((analysis.dx, analysis.dy), formula.gradient(3.0, 4.0, DEFAULT_STEP).unwrap());
        assert!((analysis.dx - 0.6).abs() < 1e-3);
        assert!((analysis.dy - 0.8).abs() < 1e-3);
    }

    #[test]
    fn keeps_source() {
        let formula = Formula::new("x * y").unwrap();
        assert_eq!(formula.source(), "x * y");
        assert_eq!(formula.tokens().len(), 3);
    }

    #[test]
    fn lex_error() {
        let err = Formula::new("x * z").unwrap_err();
        assert!(matches!(err, LexError::UnknownIdentifier(UnknownIdentifier { span, .. }) if span == (4..5)));
    }

    #[test]
    fn analyze_reports_failure() {
        let formula = Formula::new("1 / x").unwrap();
        assert!(matches!(formula.analyze(0.0, 0.0, DEFAULT_STEP), Err(EvalError::DivisionByZero(_))));
    }
}
