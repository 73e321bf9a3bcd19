use crate::{
    ast::InfixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies a binary operator to two evaluated operands.
///
/// The operand types select the rule set:
/// - two integers support the full operator set (`+ - * /` producing
///   integers, `< > == !=` producing booleans),
/// - two strings support only `+` (concatenation),
/// - two booleans or two nulls support only `==` and `!=`,
/// - operands of two different types are a type mismatch,
/// - anything else (two arrays, two functions, ...) has no defined
///   operators at all.
///
/// # Parameters
/// - `op`: The binary operator.
/// - `left`, `right`: The evaluated operands.
/// - `line`: Source code line number for error reporting.
///
/// # Errors
/// `TypeMismatch` for mixed operand types, `UnknownOperator` for an
/// operator the operand types do not define, plus the integer-arithmetic
/// errors described on [`eval_integer_infix`].
pub fn eval_infix(op: InfixOperator,
                  left: &Value,
                  right: &Value,
                  line: usize)
                  -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(op, *l, *r, line),
        (Value::Str(l), Value::Str(r)) => eval_string_infix(op, l, r, line),
        (Value::Bool(l), Value::Bool(r)) => match op {
            InfixOperator::Equal => Ok(Value::Bool(l == r)),
            InfixOperator::NotEqual => Ok(Value::Bool(l != r)),
            _ => Err(unknown_operator(op, left, right, line)),
        },
        (Value::Null, Value::Null) => match op {
            InfixOperator::Equal => Ok(Value::Bool(true)),
            InfixOperator::NotEqual => Ok(Value::Bool(false)),
            _ => Err(unknown_operator(op, left, right, line)),
        },
        _ if left.kind() != right.kind() => {
            Err(RuntimeError::TypeMismatch { left: left.kind(),
                                             op: op.to_string(),
                                             right: right.kind(),
                                             line })
        },
        _ => Err(unknown_operator(op, left, right, line)),
    }
}

/// Applies a binary operator to two integers.
///
/// Arithmetic is checked: overflow in `+`, `-`, `*` (and `i64::MIN / -1`)
/// reports `Overflow` instead of wrapping, and a zero divisor reports
/// `DivisionByZero`. Division truncates toward zero.
fn eval_integer_infix(op: InfixOperator,
                      left: i64,
                      right: i64,
                      line: usize)
                      -> Result<Value, RuntimeError> {
    match op {
        InfixOperator::Add => left.checked_add(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
        InfixOperator::Sub => left.checked_sub(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
        InfixOperator::Mul => left.checked_mul(right)
                                  .map(Value::Integer)
                                  .ok_or(RuntimeError::Overflow { line }),
        InfixOperator::Div => {
            if right == 0 {
                return Err(RuntimeError::DivisionByZero { line });
            }

            left.checked_div(right)
                .map(Value::Integer)
                .ok_or(RuntimeError::Overflow { line })
        },
        InfixOperator::Less => Ok(Value::Bool(left < right)),
        InfixOperator::Greater => Ok(Value::Bool(left > right)),
        InfixOperator::Equal => Ok(Value::Bool(left == right)),
        InfixOperator::NotEqual => Ok(Value::Bool(left != right)),
    }
}

/// Applies a binary operator to two strings. Only concatenation exists;
/// strings deliberately have no ordering or equality operators.
fn eval_string_infix(op: InfixOperator,
                     left: &str,
                     right: &str,
                     line: usize)
                     -> Result<Value, RuntimeError> {
    match op {
        InfixOperator::Add => Ok(Value::Str(format!("{left}{right}"))),
        _ => Err(RuntimeError::UnknownOperator { left: "STRING",
                                                 op: op.to_string(),
                                                 right: "STRING",
                                                 line }),
    }
}

fn unknown_operator(op: InfixOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::UnknownOperator { left: left.kind(),
                                    op: op.to_string(),
                                    right: right.kind(),
                                    line }
}
