use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Returns the length of a string (in bytes) or an array (in elements).
///
/// # Errors
/// `UnsupportedArgument` for any other type.
pub fn len(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    let size = match &args[0] {
        Value::Str(value) => value.len(),
        Value::Array(elements) => elements.len(),
        other => {
            return Err(RuntimeError::UnsupportedArgument { builtin: "len",
                                                           kind:    other.kind(),
                                                           line });
        },
    };

    i64::try_from(size).map(Value::Integer)
                       .map_err(|_| RuntimeError::Overflow { line })
}

/// Returns the first element of an array, or `null` if it is empty.
///
/// # Errors
/// `UnsupportedArgument` for non-arrays.
pub fn first(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.first().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "first",
                                                         kind:    other.kind(),
                                                         line }),
    }
}

/// Returns the last element of an array, or `null` if it is empty.
///
/// # Errors
/// `UnsupportedArgument` for non-arrays.
pub fn last(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => Ok(elements.last().cloned().unwrap_or(Value::Null)),
        other => Err(RuntimeError::UnsupportedArgument { builtin: "last",
                                                         kind:    other.kind(),
                                                         line }),
    }
}

/// Returns a new array holding everything after the first element.
///
/// An array of one element or fewer gives an empty array. The argument is
/// untouched.
///
/// # Errors
/// `UnsupportedArgument` for non-arrays.
pub fn tail(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => {
            let rest: Vec<Value> = elements.iter().skip(1).cloned().collect();

            Ok(Value::Array(Rc::new(rest)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "tail",
                                                         kind:    other.kind(),
                                                         line }),
    }
}

/// Returns a new array: every element of the first argument, followed by
/// each further argument in order.
///
/// Non-destructive: the original array is unchanged, so
/// `push(a, x); first(a)` still sees the old first element.
///
/// # Errors
/// `UnsupportedArgument` when the first argument is not an array.
pub fn push(args: &[Value], line: usize) -> Result<Value, RuntimeError> {
    match &args[0] {
        Value::Array(elements) => {
            let mut pushed = elements.as_ref().clone();
            pushed.extend_from_slice(&args[1..]);

            Ok(Value::Array(Rc::new(pushed)))
        },
        other => Err(RuntimeError::UnsupportedArgument { builtin: "push",
                                                         kind:    other.kind(),
                                                         line }),
    }
}
