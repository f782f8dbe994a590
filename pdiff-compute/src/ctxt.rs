use pdiff_parser::tokenizer::Var;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The point at which a formula is evaluated, binding a value to each of the variables `x` and
/// `y`.
///
/// A context is created fresh for every evaluation and is never mutated while an expression is
/// being evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ctxt {
    /// The value of `x`.
    pub x: f64,

    /// The value of `y`.
    pub y: f64,
}

impl Ctxt {
    /// Creates a new context binding the given values to `x` and `y`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, var: Var) -> f64 {
        match var {
            Var::X => self.x,
            Var::Y => self.y,
        }
    }

    /// Returns a copy of this context with the given variable set to a new value.
    pub fn with_var(mut self, var: Var, value: f64) -> Self {
        match var {
            Var::X => self.x = value,
            Var::Y => self.y = value,
        }
        self
    }
}
