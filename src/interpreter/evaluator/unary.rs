use crate::{
    ast::PrefixOperator,
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Applies a prefix operator to an evaluated operand.
///
/// `!` negates truthiness, so it is defined for every value: `!false` and
/// `!null` are `true`, everything else negates to `false` (and `!!x`
/// converts any value to its boolean form). `-` is defined for integers
/// only; negation is checked because `-i64::MIN` has no representation.
///
/// # Parameters
/// - `op`: The prefix operator.
/// - `right`: The evaluated operand.
/// - `line`: Source code line number for error reporting.
///
/// # Errors
/// - `UnknownPrefixOperator` when `-` is applied to a non-integer.
/// - `Overflow` when negating the most negative integer.
pub fn eval_prefix(op: PrefixOperator, right: &Value, line: usize) -> Result<Value, RuntimeError> {
    match op {
        PrefixOperator::Not => Ok(Value::Bool(!right.is_truthy())),
        PrefixOperator::Negate => match right {
            Value::Integer(value) => value.checked_neg()
                                          .map(Value::Integer)
                                          .ok_or(RuntimeError::Overflow { line }),
            _ => Err(RuntimeError::UnknownPrefixOperator { op:      op.to_string(),
                                                           operand: right.kind(),
                                                           line }),
        },
    }
}
