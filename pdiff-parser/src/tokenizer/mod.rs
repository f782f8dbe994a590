pub mod error;
pub mod token;

use levenshtein::levenshtein;
use log::trace;
use logos::Logos;
use std::ops::Range;

pub use error::{LexError, UnknownCharacter, UnknownIdentifier};
pub use token::{Func, Operator, RawKind, Token, TokenKind, Var};

/// Returns true if a `-` placed after the given token (or at the start of the formula, if there
/// is none) is a sign rather than a binary operator. Only `(` and operators qualify; a function
/// name does not, so `sin-1` is not `sin(-1)`.
fn forms_sign(prev: Option<&Token>) -> bool {
    prev.map_or(true, |token| matches!(token.kind, TokenKind::LeftParen | TokenKind::Operator(_)))
}

/// Classifies a run of letters as a variable or function name.
fn classify_name(name: &str, span: Range<usize>) -> Result<TokenKind, LexError> {
    match name {
        "x" => Ok(TokenKind::Variable(Var::X)),
        "y" => Ok(TokenKind::Variable(Var::Y)),
        _ => Func::from_name(name)
            .map(TokenKind::Function)
            .ok_or_else(|| UnknownIdentifier {
                name: name.to_owned(),
                suggestions: Func::ALL
                    .iter()
                    .map(|func| func.name())
                    .filter(|candidate| levenshtein(candidate, name) < 2)
                    .collect(),
                span,
            }.into()),
    }
}

/// Returns an iterator over the raw token kinds produced by [`logos`].
pub fn tokenize(input: &str) -> logos::Lexer<RawKind> {
    RawKind::lexer(input)
}

/// Lexes the given formula into an owned, immutable sequence of tokens.
///
/// A `-` that immediately precedes a number literal is folded into the number if it appears at
/// the start of the formula, or after anything that cannot end an operand (`(`, an operator, or
/// a function name). Everywhere else it is kept as an operator.
pub fn lex(input: &str) -> Result<Box<[Token]>, LexError> {
    let mut lexer = tokenize(input);
    let mut tokens: Vec<Token> = Vec::new();

    while let Some(raw) = lexer.next() {
        let span = lexer.span();
        let Ok(raw) = raw else {
            let character = lexer.slice().chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(UnknownCharacter { character, span }.into());
        };

        let kind = match raw {
            RawKind::Add => TokenKind::Operator(Operator::Add),
            RawKind::Sub => TokenKind::Operator(Operator::Sub),
            RawKind::Mul => TokenKind::Operator(Operator::Mul),
            RawKind::Div => TokenKind::Operator(Operator::Div),
            RawKind::Exp => TokenKind::Operator(Operator::Exp),
            RawKind::OpenParen => TokenKind::LeftParen,
            RawKind::CloseParen => TokenKind::RightParen,
            RawKind::Name => classify_name(lexer.slice(), span.clone())?,
            RawKind::Number(value) => {
                let signed = match tokens.split_last() {
                    Some((last, rest)) => last.kind == TokenKind::Operator(Operator::Sub)
                        && last.span.end == span.start
                        && forms_sign(rest.last()),
                    None => false,
                };

                if signed {
                    let sign = tokens.pop().map_or(span.start, |sign| sign.span.start);
                    tokens.push(Token::new(sign..span.end, TokenKind::Number(-value)));
                    continue;
                }

                TokenKind::Number(value)
            },
        };

        tokens.push(Token::new(span, kind));
    }

    trace!("lexed {} token(s) from {:?}", tokens.len(), input);
    Ok(tokens.into_boxed_slice())
}
