use pdiff_error::Error;
use crate::tokenizer::TokenKind;
use std::ops::Range;
use crate::parser::{
    ast::expr::Expr,
    error::{EmptyParenthesis, UnclosedParenthesis, UnexpectedToken},
    Parse,
    Parser,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Paren {
    /// The inner expression.
    pub expr: Box<Expr>,

    /// The region of the source code that this expression was parsed from, including the
    /// parentheses.
    pub span: Range<usize>,
}

impl Paren {
    /// Returns the span of the parenthesized expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Paren {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open_paren = input.next_token()?;
        if open_paren.kind != TokenKind::LeftParen {
            return Err(Error::new(vec![open_paren.span.clone()], UnexpectedToken {
                expected: "an opening parenthesis `(`",
                found: open_paren.kind,
            }));
        }

        if let Some(close_paren) = input.current_token().filter(|t| t.kind == TokenKind::RightParen) {
            return Err(Error::new(
                vec![open_paren.span.start..close_paren.span.end],
                EmptyParenthesis,
            ));
        }

        let expr = input.nested(Expr::parse)?;
        match input.current_token() {
            Some(close_paren) if close_paren.kind == TokenKind::RightParen => {
                input.next_token()?;
                Ok(Self {
                    expr: Box::new(expr),
                    span: open_paren.span.start..close_paren.span.end,
                })
            },
            Some(token) => Err(Error::new(vec![token.span.clone()], UnexpectedToken {
                expected: "an operator or a closing parenthesis `)`",
                found: token.kind,
            })),
            None => Err(Error::new(
                vec![open_paren.span.clone()],
                UnclosedParenthesis { opening: true },
            )),
        }
    }
}
