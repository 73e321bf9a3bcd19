use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, apply_user_function},
            function::{builtin, print},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the slice of evaluated argument values and the call
/// site's line number, and returns a value or a runtime error. Builtins
/// cannot observe a `return` signal, so plain `RuntimeError` suffices.
pub type BuiltinFn = fn(&[Value], usize) -> Result<Value, RuntimeError>;

/// Specifies the allowed number of arguments for a builtin.
#[derive(Debug, Clone, Copy)]
pub enum Arity {
    /// The builtin must receive exactly this many arguments.
    Exact(usize),
    /// The builtin accepts this many arguments or more.
    AtLeast(usize),
}

/// One entry of the builtin table: a name, an arity constraint, and the
/// host function implementing it.
///
/// Entries are `'static`; a [`Value::Builtin`] is a reference into the
/// table, which is what makes builtins first-class values that compare by
/// identity.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the identifier fallback resolves.
    pub name:  &'static str,
    /// The accepted argument counts.
    pub arity: Arity,
    /// The host function.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces `BUILTIN_TABLE` (the static lookup table) and
/// `BUILTIN_FUNCTIONS` (the public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of every builtin, in table order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "len"   => { arity: Arity::Exact(1), func: builtin::len },
    "first" => { arity: Arity::Exact(1), func: builtin::first },
    "last"  => { arity: Arity::Exact(1), func: builtin::last },
    "tail"  => { arity: Arity::Exact(1), func: builtin::tail },
    "push"  => { arity: Arity::AtLeast(2), func: builtin::push },
    "print" => { arity: Arity::AtLeast(0), func: print::print },
}

impl Arity {
    /// Tests whether the given argument count satisfies this constraint.
    const fn check(&self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == *m,
            Self::AtLeast(m) => n >= *m,
        }
    }

    /// Builds the error reported when `found` arguments fail this
    /// constraint.
    const fn mismatch(&self, found: usize, line: usize) -> RuntimeError {
        match self {
            Self::Exact(expected) => RuntimeError::WrongNumberOfArguments { expected: *expected,
                                                                            found,
                                                                            line },
            Self::AtLeast(minimum) => RuntimeError::NotEnoughArguments { minimum: *minimum,
                                                                         found,
                                                                         line },
        }
    }
}

/// Looks up a builtin by name.
///
/// This is the identifier fallback: a name that misses the whole
/// environment chain resolves here before being reported as undefined.
///
/// # Example
/// ```
/// use sable::interpreter::evaluator::function::core::builtin;
///
/// assert!(builtin("len").is_some());
/// assert!(builtin("frobnicate").is_none());
/// ```
#[must_use]
pub fn builtin(name: &str) -> Option<Value> {
    BUILTIN_TABLE.iter()
                 .find(|b| b.name == name)
                 .map(Value::Builtin)
}

/// Applies a callable value to already-evaluated arguments.
///
/// User functions are checked for exact arity and run in a fresh frame
/// enclosing their captured environment; builtins are checked against
/// their table arity and invoked directly. Calling anything else is an
/// error.
///
/// # Parameters
/// - `callee`: The evaluated call target.
/// - `arguments`: The evaluated arguments, left to right.
/// - `line`: Source code line number for error reporting.
///
/// # Errors
/// - `NotAFunction` when the callee is not callable.
/// - `WrongNumberOfArguments` / `NotEnoughArguments` on arity mismatch.
/// - Whatever the function body or builtin raises.
pub fn apply_function(callee: &Value, arguments: Vec<Value>, line: usize) -> EvalResult<Value> {
    match callee {
        Value::Function(function) => apply_user_function(function, arguments, line),
        Value::Builtin(def) => {
            if !def.arity.check(arguments.len()) {
                return Err(def.arity.mismatch(arguments.len(), line).into());
            }

            Ok((def.func)(&arguments, line)?)
        },
        _ => Err(RuntimeError::NotAFunction { kind: callee.kind(),
                                              line }.into()),
    }
}
