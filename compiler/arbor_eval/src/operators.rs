//! Binary operator evaluation.
//!
//! Only the four arithmetic operators have rules. `+` concatenates when
//! either operand is string-like (strings, arrays, functions, objects),
//! otherwise every operator works on the numeric conversions.

use arbor_ir::{BinaryOp, StringInterner};

use crate::errors::unsupported_operator;
use crate::{EvalResult, Value};

/// Apply `op` to already-evaluated operands.
pub fn evaluate_binary<'a>(
    op: BinaryOp,
    left: &Value<'a>,
    right: &Value<'a>,
    interner: &StringInterner,
) -> EvalResult<Value<'a>> {
    match op {
        BinaryOp::Add => Ok(add(left, right, interner)),
        BinaryOp::Sub => Ok(Value::Number(left.to_number() - right.to_number())),
        BinaryOp::Mul => Ok(Value::Number(left.to_number() * right.to_number())),
        BinaryOp::Div => Ok(Value::Number(left.to_number() / right.to_number())),
        _ => Err(unsupported_operator(op)),
    }
}

fn add<'a>(left: &Value<'a>, right: &Value<'a>, interner: &StringInterner) -> Value<'a> {
    if left.concatenates() || right.concatenates() {
        let mut s = left.to_js_string(interner);
        s.push_str(&right.to_js_string(interner));
        Value::string(s)
    } else {
        Value::Number(left.to_number() + right.to_number())
    }
}
