//! Evaluation and numerical differentiation of formulas in the two variables `x` and `y`.
//!
//! A formula is lexed once with [`pdiff_parser::tokenizer::lex`], then evaluated at any number of
//! points with [`evaluate`]. The partial derivatives at a point are estimated with forward finite
//! differences by [`partial_x`], [`partial_y`] and [`gradient`].
//!
//! ```
//! use pdiff_compute::{evaluate, gradient, DEFAULT_STEP};
//! use pdiff_parser::tokenizer::lex;
//!
//! let tokens = lex("x^2 + y^2").unwrap();
//! assert_eq!(evaluate(&tokens, 3.0, 4.0).unwrap(), 25.0);
//!
//! let (dx, dy) = gradient(&tokens, 3.0, 4.0, DEFAULT_STEP).unwrap();
//! assert!((dx - 6.0).abs() < 1e-2);
//! assert!((dy - 8.0).abs() < 1e-2);
//! ```
//!
//! [`Formula`] bundles the source of a formula with its tokens, for callers that want to keep the
//! two together.

pub mod ctxt;
pub mod derivative;
pub mod error;
pub mod eval;
pub mod formula;

pub use ctxt::Ctxt;
pub use derivative::{gradient, partial_x, partial_y, DEFAULT_STEP};
pub use error::EvalError;
pub use eval::{evaluate, Eval};
pub use formula::{Analysis, Formula};
