use logos::{Lexer, Logos};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The raw lexemes recognized by [`logos`], before signs are folded into numbers and names are
/// classified into variables and functions.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum RawKind {
    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"[0-9]+(\.[0-9]*)?", number)]
    #[regex(r"\.[0-9]+", number)]
    Number(f64),

    #[regex(r"[a-zA-Z]+")]
    Name,
}

/// Returns the length of the decimal exponent (`e-3`, `E+10`, `e5`) at the start of the given
/// string, or zero if there is none.
fn exponent_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    if !matches!(bytes.first(), Some(b'e' | b'E')) {
        return 0;
    }

    let sign = usize::from(matches!(bytes.get(1), Some(b'+' | b'-')));
    let digits = bytes[1 + sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();

    if digits == 0 {
        0
    } else {
        1 + sign + digits
    }
}

/// Extends a number lexeme over its exponent, if it has one, and parses it.
///
/// The exponent is matched here instead of in the regex so that `2exp(x)` still lexes as `2`
/// followed by `exp`.
fn number(lex: &mut Lexer<RawKind>) -> Option<f64> {
    let len = exponent_len(lex.remainder());
    lex.bump(len);
    lex.slice().parse().ok()
}

/// One of the two variables a formula can depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Var {
    X,
    Y,
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Var::X => write!(f, "x"),
            Var::Y => write!(f, "y"),
        }
    }
}

/// A single-argument function that can be called in a formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    Sin,
    Cos,
    Exp,
    Log,
    Sqrt,
}

impl Func {
    /// Every function that can be called in a formula.
    pub const ALL: [Func; 5] = [Func::Sin, Func::Cos, Func::Exp, Func::Log, Func::Sqrt];

    /// Returns the name of the function as it is written in a formula.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Exp => "exp",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
        }
    }

    /// Returns the function with the given name, if there is one.
    pub fn from_name(name: &str) -> Option<Func> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An arithmetic operator symbol.
///
/// Whether a `-` is a binary subtraction or a unary negation is decided by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
    Exp,
}

impl Operator {
    /// Returns the symbol of the operator.
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
            Operator::Exp => '^',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The different kinds of tokens that a formula is made of.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    /// A number literal, including a folded leading sign, such as `3.14` or `-2`.
    Number(f64),

    /// The variable `x` or `y`.
    Variable(Var),

    /// One of `+`, `-`, `*`, `/`, or `^`.
    Operator(Operator),

    /// The name of a function, such as `sqrt`.
    Function(Func),

    /// `(`
    LeftParen,

    /// `)`
    RightParen,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TokenKind::Number(value) => write!(f, "{}", value),
            TokenKind::Variable(var) => write!(f, "{}", var),
            TokenKind::Operator(op) => write!(f, "{}", op),
            TokenKind::Function(func) => write!(f, "{}", func),
            TokenKind::LeftParen => write!(f, "("),
            TokenKind::RightParen => write!(f, ")"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Token {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,
}

impl Token {
    /// Creates a new token with the given span and kind.
    pub fn new(span: Range<usize>, kind: TokenKind) -> Self {
        Self { span, kind }
    }
}
