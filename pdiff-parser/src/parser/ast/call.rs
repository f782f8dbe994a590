use pdiff_error::Error;
use crate::tokenizer::{Func, TokenKind};
use std::ops::Range;
use crate::parser::{ast::expr::{Expr, Primary}, error::UnexpectedToken, Parse, Parser};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `sqrt(x^2 + y^2)` or `sin x`.
///
/// Every function takes exactly one argument, which is either parenthesized or a primary
/// expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The function to call.
    pub func: Func,

    /// The argument to the function.
    pub arg: Box<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.next_token()?;
        let TokenKind::Function(func) = name.kind else {
            return Err(Error::new(vec![name.span.clone()], UnexpectedToken {
                expected: "a function name",
                found: name.kind,
            }));
        };

        let arg: Expr = input.nested(Primary::parse)?.into();
        let span = name.span.start..arg.span().end;
        Ok(Self {
            func,
            arg: Box::new(arg),
            span,
        })
    }
}
