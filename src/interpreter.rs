/// The environment module implements lexical scope.
///
/// An environment is a chain of name→value frames. Function application
/// pushes a frame onto the callee's captured chain; closures keep their
/// defining frame alive by holding a shared handle to it.
///
/// # Responsibilities
/// - Defines the `Environment` frame type and the shared `Env` handle.
/// - Resolves names from the innermost frame outward.
/// - Scopes `let` bindings to the frame they were written in.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// applies operators, calls closures and builtins, and produces results.
/// It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles bindings, closures, conditionals, and `return` propagation.
/// - Reports runtime errors such as type mismatches or bad indexing.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream
/// of tokens, each corresponding to meaningful language elements such as
/// integers, strings, identifiers, operators, delimiters, and keywords.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with line numbers.
/// - Handles integer and string literals, identifiers, and operators.
/// - Never fails: unrecognized input becomes `Illegal` tokens for the
///   parser to reject.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of
/// expressions and statements. Expressions are parsed with a precedence-
/// driven loop of prefix and infix rules.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates grammar, reporting every error with its line.
/// - Recovers at statement boundaries so one mistake is not the last one
///   reported.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares all the value types used during interpretation,
/// such as integers, booleans, strings, arrays, hashes, and functions. It
/// also provides type tags, truthiness, equality, hash-key derivation, and
/// the inspection formatting used by the REPL and `print`.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Implements inspection, equality, and truthiness.
/// - Derives hash keys for the hashable subset of types.
pub mod value;
