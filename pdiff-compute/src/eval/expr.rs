use pdiff_parser::parser::ast::{expr::Expr, paren::Paren};
use crate::{ctxt::Ctxt, error::EvalError};
use super::Eval;

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        match self {
            Expr::Literal(literal) => literal.eval(ctxt),
            Expr::Paren(paren) => paren.eval(ctxt),
            Expr::Call(call) => call.eval(ctxt),
            Expr::Unary(unary) => unary.eval(ctxt),
            Expr::Binary(binary) => binary.eval(ctxt),
        }
    }
}

impl Eval for Paren {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        self.expr.eval(ctxt)
    }
}
