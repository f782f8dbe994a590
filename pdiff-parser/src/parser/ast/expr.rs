use pdiff_error::Error;
use crate::tokenizer::TokenKind;
use std::ops::Range;
use crate::parser::{
    ast::{binary::Binary, call::Call, literal::Literal, paren::Paren, unary::Unary},
    error::{UnexpectedEof, UnexpectedToken},
    Parse,
    Parser,
    Precedence,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general expression in a formula.
///
/// An expression is any valid piece of a formula that can be evaluated to produce a value, given
/// values for `x` and `y`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sqrt(x)`.
    Call(Call),

    /// A unary operation, such as `-x`.
    Unary(Unary),

    /// A binary operation, such as `1 + 2`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

/// Represents a primary expression in a formula.
///
/// Primary expressions are the simplest expressions, and are the building blocks of more complex
/// expressions. They are also the only expressions that can follow a function name without
/// parentheses, as in `sin x`.
#[derive(Debug, Clone, PartialEq)]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(1 + 2)`.
    Paren(Paren),

    /// A function call, such as `sqrt(x)`.
    Call(Call),
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let Some(token) = input.current_token() else {
            return Err(input.error(UnexpectedEof));
        };

        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable(_) => Literal::parse(input).map(Self::Literal),
            TokenKind::Function(_) => Call::parse(input).map(Self::Call),
            TokenKind::LeftParen => Paren::parse(input).map(Self::Paren),
            found @ (TokenKind::Operator(_) | TokenKind::RightParen) => Err(input.error(UnexpectedToken {
                expected: "a number, variable, function, or `(`",
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
