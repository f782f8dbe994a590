use pdiff_parser::parser::ast::literal::Literal;
use crate::{ctxt::Ctxt, error::EvalError};
use super::Eval;

impl Eval for Literal {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        match self {
            Literal::Number(num) => Ok(num.value),
            Literal::Var(var) => Ok(ctxt.get_var(var.var)),
        }
    }
}
