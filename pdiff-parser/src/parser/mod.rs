pub mod ast;
pub mod error;
pub mod token;

use ast::expr::Expr;
use log::trace;
use pdiff_error::{Error, ErrorKind};
use std::ops::Range;
use super::tokenizer::{Token, TokenKind};

/// The maximum number of levels that expressions can be nested inside each other, counting
/// parentheses, negations, function calls, and chained exponents.
pub const MAX_DEPTH: usize = 256;

/// Parses the given tokens into a single expression. All the tokens must be consumed by the
/// expression; if not, an error is returned.
pub fn parse(tokens: &[Token]) -> Result<Expr, Error> {
    let expr = Parser::new(tokens).try_parse_full::<Expr>()?;
    trace!("parsed {} token(s) into {:?}", tokens.len(), expr);
    Ok(expr)
}

/// A parser over a sequence of tokens. This is the type to use to parse a lexed formula into an
/// abstract syntax tree.
///
/// The parser only borrows the tokens, so cloning it to look ahead is cheap.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    /// The tokens that this parser is currently parsing.
    tokens: &'a [Token],

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// How many nested expressions enclose the current position.
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given tokens.
    pub fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, cursor: 0, depth: 0 }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&'a Token> {
        self.tokens.get(self.cursor)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<&'a Token, Error> {
        let token = self.current_token().ok_or_else(|| self.error(error::UnexpectedEof))?;
        self.cursor += 1;
        Ok(token)
    }

    /// Moves the cursor to the position of the given parser, which should have been cloned from
    /// this one.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Runs the given parser one nesting level deeper. Returns an error instead if that would
    /// exceed [`MAX_DEPTH`].
    pub fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, Error>,
    ) -> Result<T, Error> {
        if self.depth >= MAX_DEPTH {
            return Err(self.error(error::TooDeep { max: MAX_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Speculatively parses a value from the given stream of tokens.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.current_token() {
            None => Ok(value),
            Some(token) if token.kind == TokenKind::RightParen => {
                Err(self.error(error::UnclosedParenthesis { opening: false }))
            },
            Some(_) => Err(self.error(error::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// `a op b op c` is evaluated as `a op (b op c)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^`).
    Exp,
}
