/// Binary operator evaluation.
///
/// Integer arithmetic and comparison, string concatenation, and the
/// equality rules for booleans and `null`.
pub mod binary;
/// The evaluation core.
///
/// Walks the AST: program and block sequencing, statement effects,
/// expression dispatch, identifier resolution, and the `return` signal.
pub mod core;
/// Function application and builtins.
///
/// Applies closures and builtin values to evaluated arguments, and owns
/// the builtin table.
pub mod function;
/// Index evaluation.
///
/// Bounds-checked array indexing and hash lookup.
pub mod index;
/// Prefix operator evaluation.
///
/// Truthiness negation with `!` and checked integer negation with `-`.
pub mod unary;
