/// Block parsing.
///
/// Parses brace-delimited statement sequences, shared by `if` arms and
/// function bodies.
pub mod block;
/// The expression grammar.
///
/// A Pratt loop: one prefix rule produces the left-hand side, then infix
/// rules (binary operators, calls, indexing) fold onto it while the next
/// token binds tighter than the caller's precedence floor.
pub mod core;
/// Operator precedence.
///
/// The ordered precedence ladder and the token-to-precedence mapping that
/// drives the expression loop.
pub mod precedence;
/// Statement parsing.
///
/// Dispatches `let`, `return`, and expression statements, and drives the
/// whole-program loop with per-statement error recovery.
pub mod statement;
/// Small shared parsing helpers.
///
/// Comma-separated lists, single identifiers, and exact-token expectation.
pub mod utils;
