/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of
/// source code. Parse errors include unexpected tokens, missing prefix
/// parse rules, out-of-range integer literals, and premature end of input.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include type mismatches, unknown operators, unresolved
/// identifiers, bad call targets and arities, index and hash-key failures,
/// division by zero, and integer overflow.
pub mod runtime_error;

pub use parse_error::{ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
