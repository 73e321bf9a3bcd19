use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Evaluates an index expression on evaluated operands.
///
/// - An array takes an integer index. Both ends are checked: a negative
///   index and an index at or past the length are errors, not `null` and
///   not a wrap-around.
/// - A hash takes any hashable key; a missing key yields `null`, which is
///   what makes `h["absent"]` usable as an existence probe.
/// - Any other target does not support the operator.
///
/// # Parameters
/// - `target`: The evaluated value being indexed.
/// - `index`: The evaluated index.
/// - `line`: Source code line number for error reporting.
///
/// # Errors
/// - `IndexOutOfBounds` for a bad array index.
/// - `UnusableHashKey` when a hash is indexed with an unhashable type.
/// - `NotIndexable` for every other target (including an array with a
///   non-integer index).
pub fn eval_index(target: &Value, index: &Value, line: usize) -> Result<Value, RuntimeError> {
    match (target, index) {
        (Value::Array(elements), Value::Integer(index)) => {
            eval_array_index(elements, *index, line)
        },
        (Value::Hash(pairs), index) => {
            let key = index.hash_key(line)?;

            Ok(pairs.get(&key).map_or(Value::Null, |pair| pair.value.clone()))
        },
        _ => Err(RuntimeError::NotIndexable { kind: target.kind(),
                                              line }),
    }
}

/// Looks up one array element by position.
fn eval_array_index(elements: &[Value], index: i64, line: usize) -> Result<Value, RuntimeError> {
    usize::try_from(index)
        .ok()
        .and_then(|index| elements.get(index))
        .cloned()
        .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                length: elements.len(),
                                                line })
}
