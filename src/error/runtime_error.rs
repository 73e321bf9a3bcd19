#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A binary operator was applied to operands of two different types.
    TypeMismatch {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator, as written in the source.
        op:    String,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A binary operator is not defined for its (same-typed) operands.
    UnknownOperator {
        /// Type tag of the left operand.
        left:  &'static str,
        /// The operator, as written in the source.
        op:    String,
        /// Type tag of the right operand.
        right: &'static str,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A prefix operator is not defined for its operand.
    UnknownPrefixOperator {
        /// The operator, as written in the source.
        op:      String,
        /// Type tag of the operand.
        operand: &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A name resolved against neither the environment chain nor the
    /// builtin table.
    IdentifierNotFound {
        /// The unresolved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The callee of a call expression is not a function value.
    NotAFunction {
        /// Type tag of the value that was called.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A call supplied a different number of arguments than the function
    /// declares parameters.
    WrongNumberOfArguments {
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A variadic builtin received fewer arguments than its minimum.
    NotEnoughArguments {
        /// The smallest accepted argument count.
        minimum: usize,
        /// The number of arguments supplied.
        found:   usize,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A builtin received an argument of a type it does not handle.
    UnsupportedArgument {
        /// Name of the builtin.
        builtin: &'static str,
        /// Type tag of the offending argument.
        kind:    &'static str,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An array index is negative or past the end of the array.
    IndexOutOfBounds {
        /// The requested index.
        index:  i64,
        /// The length of the indexed array.
        length: usize,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// The index operator was applied to a value that supports it for no
    /// index type.
    NotIndexable {
        /// Type tag of the indexed value.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value that is not an integer, boolean, or string was used as a
    /// hash key.
    UnusableHashKey {
        /// Type tag of the offending key.
        kind: &'static str,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic operation overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TypeMismatch { left, op, right, line } => {
                write!(f, "Error on line {line}: Type mismatch: {left} {op} {right}.")
            },
            Self::UnknownOperator { left, op, right, line } => {
                write!(f, "Error on line {line}: Unknown operator: {left} {op} {right}.")
            },
            Self::UnknownPrefixOperator { op, operand, line } => {
                write!(f, "Error on line {line}: Unknown operator: {op}{operand}.")
            },
            Self::IdentifierNotFound { name, line } => {
                write!(f, "Error on line {line}: Identifier not found: '{name}'.")
            },
            Self::NotAFunction { kind, line } => {
                write!(f, "Error on line {line}: Not a function: {kind}.")
            },
            Self::WrongNumberOfArguments { expected, found, line } => write!(f,
                                                                             "Error on line {line}: Wrong number of arguments: got {found}, want {expected}."),
            Self::NotEnoughArguments { minimum, found, line } => write!(f,
                                                                       "Error on line {line}: Wrong number of arguments: got {found}, want at least {minimum}."),
            Self::UnsupportedArgument { builtin, kind, line } => write!(f,
                                                                       "Error on line {line}: Argument to `{builtin}` not supported, got {kind}."),
            Self::IndexOutOfBounds { index, length, line } => write!(f,
                                                                    "Error on line {line}: Index {index} exceeds bounds of array of length {length}."),
            Self::NotIndexable { kind, line } => {
                write!(f, "Error on line {line}: Index operator not supported: {kind}.")
            },
            Self::UnusableHashKey { kind, line } => {
                write!(f, "Error on line {line}: Unusable as hash key: {kind}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
        }
    }
}

impl std::error::Error for RuntimeError {}
