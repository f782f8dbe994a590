use pdiff_parser::{parser::ast::call::Call, tokenizer::Func};
use crate::{ctxt::Ctxt, error::{kind::DomainError, EvalError}};
use super::Eval;

impl Eval for Call {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        let arg = self.arg.eval(ctxt)?;
        let out_of_domain = |domain| DomainError {
            operation: self.func.name(),
            value: arg,
            domain,
            regions: vec![self.arg.span()],
        };

        let value = match self.func {
            Func::Sin => arg.sin(),
            Func::Cos => arg.cos(),
            Func::Exp => arg.exp(),
            Func::Log if arg <= 0.0 => return Err(out_of_domain("positive numbers").into()),
            Func::Log => arg.ln(),
            Func::Sqrt if arg < 0.0 => return Err(out_of_domain("non-negative numbers").into()),
            Func::Sqrt => arg.sqrt(),
        };

        // NaN fails every comparison above, and `sin(inf)` is NaN too
        if value.is_nan() {
            let domain = if arg.is_nan() { "numbers" } else { "finite numbers" };
            return Err(out_of_domain(domain).into());
        }

        Ok(value)
    }
}
