use pdiff_parser::parser::{
    ast::{binary::Binary, expr::Expr},
    token::op::BinOpKind,
};
use crate::{
    ctxt::Ctxt,
    error::{kind::{DivisionByZero, DomainError}, EvalError},
};
use super::Eval;

/// Applies the operator of the given binary expression to its evaluated operands.
fn apply(binary: &Binary, left: f64, right: f64) -> Result<f64, EvalError> {
    let value = match binary.op.kind {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        // `-0.0 == 0.0`, so both signs of zero are caught
        BinOpKind::Div if right == 0.0 => return Err(DivisionByZero {
            operand: "divisor",
            regions: vec![binary.op.span.clone(), binary.rhs.span()],
        }.into()),
        BinOpKind::Div => left / right,
        BinOpKind::Exp if left == 0.0 && right < 0.0 => return Err(DivisionByZero {
            operand: "base",
            regions: vec![binary.op.span.clone(), binary.lhs.span()],
        }.into()),
        BinOpKind::Exp if left < 0.0 && right.fract() != 0.0 => return Err(DomainError {
            operation: "^",
            value: left,
            domain: "non-negative bases, unless the exponent is an integer",
            regions: vec![binary.lhs.span()],
        }.into()),
        BinOpKind::Exp => left.powf(right),
    };

    // `inf - inf`, `0 * inf` and friends
    if value.is_nan() {
        let (value, operand) = if left.is_finite() {
            (right, &binary.rhs)
        } else {
            (left, &binary.lhs)
        };
        return Err(DomainError {
            operation: binary.op.kind.symbol(),
            value,
            domain: "operands whose result is a number",
            regions: vec![operand.span()],
        }.into());
    }

    Ok(value)
}

impl Eval for Binary {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, EvalError> {
        // left-associative chains such as `x + x + ... + x` nest without bound on the left, so
        // walk that side iteratively
        let mut spine = vec![self];
        let mut leftmost = &*self.lhs;
        while let Expr::Binary(binary) = leftmost {
            spine.push(binary);
            leftmost = &binary.lhs;
        }

        let mut left = leftmost.eval(ctxt)?;
        for binary in spine.into_iter().rev() {
            let right = binary.rhs.eval(ctxt)?;
            left = apply(binary, left, right)?;
        }

        Ok(left)
    }
}
