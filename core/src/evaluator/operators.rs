//! Arithmetic on the numeric results of expressions.

use crate::{evaluator::EvalError, parser::BinaryOp, parser::Span, values::Value};

/// Intermediate result of an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub(super) fn into_value(self) -> Value {
        match self {
            Number::Int(i) => Value::Integer(i),
            Number::Float(f) => Value::Float(f),
        }
    }

    fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }
}

/// Evaluate `+` or `-`.
///
/// If either side is a float, both are promoted. Integer overflow and
/// non-finite float results are errors.
pub(super) fn eval_binary(
    op: BinaryOp,
    left: Number,
    right: Number,
    span: &Span,
) -> Result<Number, EvalError> {
    let result = match (left, right) {
        (Number::Int(l), Number::Int(r)) => eval_binary_int(op, l, r).map(Number::Int),
        (l, r) => Some(eval_binary_float(op, l.as_f64(), r.as_f64()))
            .filter(|f| f.is_finite())
            .map(Number::Float),
    };
    result.ok_or_else(|| EvalError::Overflow {
        op,
        span: span.clone(),
    })
}

fn eval_binary_int(op: BinaryOp, left: i64, right: i64) -> Option<i64> {
    match op {
        BinaryOp::Add => left.checked_add(right),
        BinaryOp::Sub => left.checked_sub(right),
    }
}

fn eval_binary_float(op: BinaryOp, left: f64, right: f64) -> f64 {
    match op {
        BinaryOp::Add => left + right,
        BinaryOp::Sub => left - right,
    }
}

/// Evaluate `mod(left, right)`.
///
/// The remainder truncates toward zero, so it takes the sign of `left`.
/// Float operands are rejected.
pub(super) fn eval_mod(left: Number, right: Number, span: &Span) -> Result<Number, EvalError> {
    let (l, r) = match (left, right) {
        (Number::Int(l), Number::Int(r)) => (l, r),
        (Number::Float(value), _) | (_, Number::Float(value)) => {
            return Err(EvalError::NonIntegerOperand {
                value,
                span: span.clone(),
            });
        }
    };
    if r == 0 {
        return Err(EvalError::DivisionByZero { span: span.clone() });
    }
    // Use wrapping_rem to handle the i64::MIN % -1 case
    Ok(Number::Int(l.wrapping_rem(r)))
}
