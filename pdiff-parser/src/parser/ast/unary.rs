use pdiff_error::Error;
use crate::tokenizer::{Operator, TokenKind};
use std::ops::Range;
use crate::parser::{
    ast::{binary::Binary, expr::{Expr, Primary}},
    token::op::UnaryOp,
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A unary expression, such as `-x`. Unary expressions can include nested expressions.
///
/// A `-` directly in front of a number literal never produces a unary expression, since the lexer
/// folds it into the literal.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression.
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let is_neg = input
            .current_token()
            .is_some_and(|token| token.kind == TokenKind::Operator(Operator::Sub));

        if is_neg {
            Self::parse(input).map(Expr::Unary)
        } else {
            Primary::parse(input).map(Into::into)
        }
    }
}

impl Parse for Unary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let op = UnaryOp::parse(input)?;

        // the operand extends over every operator that binds tighter than the unary operator,
        // so `-x^2` is `-(x^2)`
        let operand = input.nested(|input| {
            let lhs = Self::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence())
        })?;

        let span = op.span.start..operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span,
        })
    }
}
