use pdiff_error::Error;
use std::ops::Range;
use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    token::op::BinOp,
    Associativity,
    Parser,
    Precedence,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // before creating the `lhs op rhs` node, we should check the precedence of the
            // following operator, if any
            // this is because we can't parse an expression like `3 + 4 * 5` as (3 + 4) * 5

            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            let Ok(next_op) = input_ahead.try_parse::<BinOp>() else {
                break;
            };

            let binds_tighter = next_op.precedence() > precedence
                || (next_op.precedence() == precedence && next_op.associativity() == Associativity::Right);

            if binds_tighter {
                // this operator has a higher precedence or it is right associative, so we should
                // parse its expression starting with `rhs` first
                rhs = input.nested(|input| Self::parse_expr(input, rhs, next_op.precedence()))?;
            } else {
                // this operator has lower precedence, or equal precedence and
                // left-associativity; this is in scenarios like:
                // `1 * 2 + 3` or `1 * 2 * 3`
                //
                // so just break out of the loop and let `lhs` become `1 * 2`
                // we will parse this operator on the next iteration of the outside loop
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// Parses a chain of binary operations starting from the given left-hand side, consuming
    /// operators with a precedence of at least `precedence`.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            match input_ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => {
                    input.set_cursor(&input_ahead);
                    let rhs = Unary::parse_or_lower(input)?;
                    lhs = Self::complete_rhs(input, lhs, op, rhs)?;
                },
                _ => break,
            }
        }

        Ok(lhs)
    }
}
