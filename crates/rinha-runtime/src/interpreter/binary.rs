//! Binary operator evaluation

use crate::ast::{BinaryOp, Term};
use crate::env::Environment;
use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

impl Interpreter {
    /// Evaluate a binary expression.
    ///
    /// Both operands are always evaluated, left to right; `&&` and `||` do
    /// not short-circuit in this language.
    pub(super) fn eval_binary<'ast>(
        &mut self,
        op: BinaryOp,
        lhs: &'ast Term,
        rhs: &'ast Term,
        env: &Environment<'ast>,
    ) -> Result<Value<'ast>, RuntimeError> {
        let left = self.eval_term(lhs, env)?;
        let right = self.eval_term(rhs, env)?;
        apply_binary(op, left, right)
    }
}

/// Apply a binary operator to two already-evaluated operands.
///
/// Integer arithmetic wraps on overflow; division is floor division and the
/// remainder takes the divisor's sign, consistent with it.
pub(crate) fn apply_binary<'ast>(
    op: BinaryOp,
    left: Value<'ast>,
    right: Value<'ast>,
) -> Result<Value<'ast>, RuntimeError> {
    match op {
        BinaryOp::Add => match (&left, &right) {
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(a.wrapping_add(*b))),
            // Either side a string: concatenate display renderings.
            (Value::Str(_), _) | (_, Value::Str(_)) => {
                Ok(Value::str(format!("{}{}", left, right)))
            }
            _ => Err(mismatch(op, &left, &right)),
        },
        BinaryOp::Sub => int_op(op, left, right, |a, b| a.wrapping_sub(b)),
        BinaryOp::Mul => int_op(op, left, right, |a, b| a.wrapping_mul(b)),
        BinaryOp::Div => match (&left, &right) {
            (Value::Int(_), Value::Int(0)) => Err(RuntimeError::DivisionByZero),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(floor_div(*a, *b))),
            _ => Err(mismatch(op, &left, &right)),
        },
        BinaryOp::Rem => match (&left, &right) {
            (Value::Int(_), Value::Int(0)) => Err(RuntimeError::RemainderByZero),
            (Value::Int(a), Value::Int(b)) => Ok(Value::Int(floor_rem(*a, *b))),
            _ => Err(mismatch(op, &left, &right)),
        },
        BinaryOp::Eq | BinaryOp::Neq => {
            if left.type_name() != right.type_name() {
                return Err(mismatch(op, &left, &right));
            }
            let equal = left == right;
            Ok(Value::Bool(if op == BinaryOp::Eq { equal } else { !equal }))
        }
        BinaryOp::Lt => int_comparison(op, left, right, |a, b| a < b),
        BinaryOp::Gt => int_comparison(op, left, right, |a, b| a > b),
        BinaryOp::Lte => int_comparison(op, left, right, |a, b| a <= b),
        BinaryOp::Gte => int_comparison(op, left, right, |a, b| a >= b),
        BinaryOp::And => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
            _ => Err(mismatch(op, &left, &right)),
        },
        BinaryOp::Or => match (&left, &right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a || *b)),
            _ => Err(mismatch(op, &left, &right)),
        },
    }
}

fn mismatch(op: BinaryOp, left: &Value<'_>, right: &Value<'_>) -> RuntimeError {
    RuntimeError::TypeMismatch {
        form: op.symbol(),
        left: left.type_name(),
        right: Some(right.type_name()),
    }
}

fn int_op<'ast, F>(
    op: BinaryOp,
    left: Value<'ast>,
    right: Value<'ast>,
    apply: F,
) -> Result<Value<'ast>, RuntimeError>
where
    F: FnOnce(i64, i64) -> i64,
{
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Int(apply(*a, *b))),
        _ => Err(mismatch(op, &left, &right)),
    }
}

fn int_comparison<'ast, F>(
    op: BinaryOp,
    left: Value<'ast>,
    right: Value<'ast>,
    apply: F,
) -> Result<Value<'ast>, RuntimeError>
where
    F: FnOnce(i64, i64) -> bool,
{
    match (&left, &right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(apply(*a, *b))),
        _ => Err(mismatch(op, &left, &right)),
    }
}

/// Floor division: rounds toward negative infinity. Callers rule out b == 0.
fn floor_div(a: i64, b: i64) -> i64 {
    let quotient = a.wrapping_div(b);
    if a.wrapping_rem(b) != 0 && (a < 0) != (b < 0) {
        quotient.wrapping_sub(1)
    } else {
        quotient
    }
}

/// Remainder with the divisor's sign, consistent with floor division:
/// a == floor_div(a, b) * b + floor_rem(a, b).
fn floor_rem(a: i64, b: i64) -> i64 {
    let remainder = a.wrapping_rem(b);
    if remainder != 0 && (remainder < 0) != (b < 0) {
        remainder.wrapping_add(b)
    } else {
        remainder
    }
}
