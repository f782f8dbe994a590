//! Lexer and parser for formulas in the two variables `x` and `y`.
//!
//! A formula is first turned into an immutable sequence of [`Token`]s with [`lex`], which can then
//! be parsed into an [`Expr`] with [`parse`] as many times as needed.
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for tokens and syntax trees.
//!
//! [`Token`]: tokenizer::Token
//! [`lex`]: tokenizer::lex
//! [`Expr`]: parser::ast::expr::Expr
//! [`parse`]: parser::parse

pub mod parser;
pub mod tokenizer;
