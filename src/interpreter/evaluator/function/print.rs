use crate::{
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Prints each argument's inspection to standard output, one per line,
/// and returns `null`.
///
/// Accepts any number of arguments, including none (which prints
/// nothing). Values are formatted with their `Display` implementation —
/// the same text the REPL shows.
#[allow(clippy::unnecessary_wraps)]
pub fn print(args: &[Value], _line: usize) -> Result<Value, RuntimeError> {
    for arg in args {
        println!("{arg}");
    }

    Ok(Value::Null)
}
