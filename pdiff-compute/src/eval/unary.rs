use pdiff_parser::parser::{ast::unary::Unary, token::op::UnaryOpKind};
use crate::{ctxt::Ctxt, error::EvalError};
use super::Eval;

impl Eval for Unary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        let operand = self.operand.eval(ctxt)?;
        match self.op.kind {
            UnaryOpKind::Neg => Ok(-operand),
        }
    }
}
