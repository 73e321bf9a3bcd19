//! # sable
//!
//! sable is a small, dynamically-typed scripting language interpreter
//! written in Rust. Programs are sequences of expression-oriented
//! statements with integers, booleans, strings, arrays, hashes, and
//! first-class functions that close over their defining scope.
//!
//! The pipeline is classic: the lexer turns source text into tokens, the
//! parser builds an abstract syntax tree with a precedence-driven
//! expression loop, and the evaluator walks the tree against a chain of
//! lexical environments.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseErrors,
    interpreter::{
        environment::{Env, Environment},
        evaluator::core::eval_program,
        lexer::lex,
        parser::statement::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of source code as a tree. The
/// AST is built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source line numbers to AST nodes for error reporting.
/// - Prints any node back as canonical, reparsable source.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing,
/// parsing, or evaluating code. It standardizes error reporting and
/// carries detailed information about failures, including error kinds,
/// descriptions, and source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits and
///   reporting utilities.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations, environments, and error handling to provide a
/// complete runtime for source code evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the building blocks behind the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared across phases.
///
/// # Responsibilities
/// - Provides the FNV-1a content hash used for string hash keys.
pub mod util;

/// Parses source text into a program.
///
/// # Errors
/// Returns every parse error found, as a [`ParseErrors`] list; the parser
/// recovers at statement boundaries rather than stopping at the first
/// mistake. A program that parsed with any errors is not meant to be
/// evaluated.
///
/// # Examples
/// ```
/// use sable::parse;
///
/// let program = parse("(1 + 2) * 3").unwrap();
/// assert_eq!(program.to_string(), "((1 + 2) * 3)");
///
/// // `let` without a name is one of two errors here; both get reported.
/// let errors = parse("let = 5; @").unwrap_err();
/// assert_eq!(errors.0.len(), 2);
/// ```
pub fn parse(source: &str) -> Result<ast::Program, ParseErrors> {
    let tokens = lex(source);

    parse_program(&mut tokens.iter().peekable())
}

/// Parses and evaluates `source` in a fresh environment, returning the
/// final value.
///
/// # Errors
/// Returns the parse error list if parsing fails, or the runtime error if
/// evaluation does.
///
/// # Examples
/// ```
/// use sable::{interpreter::value::core::Value, run};
///
/// let value = run("let add = fn(a, b) { a + b }; add(2, 3)").unwrap();
/// assert_eq!(value, Value::Integer(5));
/// ```
pub fn run(source: &str) -> Result<Value, Box<dyn std::error::Error>> {
    run_with_env(source, &Environment::new_root())
}

/// Parses and evaluates `source` in `env`.
///
/// This is the entry point for callers that keep an environment alive
/// across inputs — the interactive session uses it so bindings from one
/// line are visible on the next.
///
/// # Errors
/// Returns the parse error list if parsing fails, or the runtime error if
/// evaluation does. Nothing is evaluated when parsing fails.
///
/// # Examples
/// ```
/// use sable::{
///     interpreter::{environment::Environment, value::core::Value},
///     run_with_env,
/// };
///
/// let env = Environment::new_root();
/// run_with_env("let x = 40;", &env).unwrap();
///
/// let value = run_with_env("x + 2", &env).unwrap();
/// assert_eq!(value, Value::Integer(42));
/// ```
pub fn run_with_env(source: &str, env: &Env) -> Result<Value, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    let value = eval_program(&program, env)?;

    Ok(value)
}

/// Runs a script and optionally prints its final value.
///
/// This is the one-shot driver behind the command line: parse, evaluate,
/// and — when `auto_print` is set — print the last statement's value to
/// standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use sable::get_result;
///
/// // Simple script: evaluates cleanly, nothing printed.
/// let res = get_result("let result = 2 + 2", false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let res = get_result("let y = x + 1", false); // 'x' is not defined
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let value = run(source)?;

    if auto_print {
        println!("{value}");
    }

    Ok(())
}
