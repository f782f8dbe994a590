use pdiff_error::Error;
use crate::tokenizer::{TokenKind, Var};
use std::ops::Range;
use crate::parser::{error::UnexpectedToken, Parse, Parser};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number literal. A leading sign folded in by the lexer is part of the value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the number literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// A reference to one of the variables `x` or `y`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitVar {
    /// The variable that is referenced.
    pub var: Var,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

/// Represents a literal value in a formula.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal, such as `2` or `-0.5`.
    Number(LitNum),

    /// A variable, `x` or `y`.
    Var(LitVar),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Var(var) => var.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let token = input.next_token()?;
        let span = token.span.clone();
        match token.kind {
            TokenKind::Number(value) => Ok(Literal::Number(LitNum { value, span })),
            TokenKind::Variable(var) => Ok(Literal::Var(LitVar { var, span })),
            found => Err(Error::new(vec![span], UnexpectedToken {
                expected: "a number or variable",
                found,
            })),
        }
    }
}
