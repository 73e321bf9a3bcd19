use std::{collections::HashMap, rc::Rc};

use crate::{
    ast::{Block, Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Env, Environment},
        evaluator::{binary, function, index, unary},
        value::{
            core::{Function, Value},
            hash::HashPair,
        },
    },
};

/// A non-local signal that interrupts straight-line evaluation: either a
/// runtime error, or a `return` travelling up to the nearest function-call
/// boundary.
///
/// Riding the `Err` channel lets `?` propagate both uniformly, and the
/// type guarantees neither can leak into an ordinary value: a `return` is
/// caught at exactly two places, function application and the program top.
#[derive(Debug)]
pub enum Interrupt {
    /// A runtime error; surfaces as the result of [`eval_program`].
    Error(RuntimeError),
    /// An early `return` carrying its value.
    Return(Value),
}

impl From<RuntimeError> for Interrupt {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// Helpers that cannot observe a `return` (operators, builtins, key
/// derivation) return `Result<_, RuntimeError>` instead and convert on the
/// way up through `?`.
pub type EvalResult<T> = Result<T, Interrupt>;

/// Evaluates a whole program in `env`, returning the value of its last
/// statement (or `null` for an empty program).
///
/// A top-level `return` stops execution and yields the returned value.
/// The first runtime error stops execution and becomes the `Err`; there is
/// no way for a program to observe or catch it.
///
/// # Example
/// ```
/// use sable::interpreter::{
///     environment::Environment,
///     evaluator::core::eval_program,
///     lexer::lex,
///     parser::statement::parse_program,
///     value::core::Value,
/// };
///
/// let tokens = lex("let x = 2; x * 21");
/// let program = parse_program(&mut tokens.iter().peekable()).unwrap();
/// let result = eval_program(&program, &Environment::new_root()).unwrap();
///
/// assert_eq!(result, Value::Integer(42));
/// ```
pub fn eval_program(program: &Program, env: &Env) -> Result<Value, RuntimeError> {
    let mut result = Value::Null;

    for statement in &program.statements {
        match eval_statement(statement, env) {
            Ok(value) => result = value,
            Err(Interrupt::Return(value)) => return Ok(value),
            Err(Interrupt::Error(error)) => return Err(error),
        }
    }

    Ok(result)
}

/// Evaluates a single statement.
///
/// A `let` evaluates its value and binds it in the current frame, itself
/// yielding `null`. A `return` evaluates its value and raises it as an
/// [`Interrupt::Return`]. An expression statement yields its expression's
/// value.
pub fn eval_statement(statement: &Statement, env: &Env) -> EvalResult<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let value = eval_expression(value, env)?;
            env.borrow_mut().set(name.clone(), value);

            Ok(Value::Null)
        },
        Statement::Return { value, .. } => {
            let value = eval_expression(value, env)?;

            Err(Interrupt::Return(value))
        },
        Statement::Expression { expr, .. } => eval_expression(expr, env),
    }
}

/// Evaluates the statements of a block in order, yielding the last
/// statement's value (or `null` for an empty block).
///
/// Blocks do not open a new environment frame — only function application
/// does — and they do not intercept a `return` travelling through them:
/// however deeply blocks nest, the signal keeps going until the enclosing
/// call boundary.
pub fn eval_block(block: &Block, env: &Env) -> EvalResult<Value> {
    let mut result = Value::Null;

    for statement in &block.statements {
        result = eval_statement(statement, env)?;
    }

    Ok(result)
}

/// Evaluates an expression and returns the resulting value.
///
/// This is the main dispatch: literals construct values, operators
/// delegate to the operator modules, `if` picks an arm by truthiness,
/// `fn` captures the current environment, and calls and indexing evaluate
/// their parts left to right before applying. Sub-evaluation is strict and
/// depth-first; the first error anywhere aborts the whole expression.
pub fn eval_expression(expr: &Expr, env: &Env) -> EvalResult<Value> {
    match expr {
        Expr::Identifier { name, line } => Ok(eval_identifier(name, env, *line)?),
        Expr::IntegerLiteral { value, .. } => Ok(Value::Integer(*value)),
        Expr::BooleanLiteral { value, .. } => Ok(Value::Bool(*value)),
        Expr::StringLiteral { value, .. } => Ok(Value::Str(value.clone())),
        Expr::ArrayLiteral { elements, .. } => {
            let elements = eval_expressions(elements, env)?;

            Ok(Value::Array(Rc::new(elements)))
        },
        Expr::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env),
        Expr::Prefix { op, right, line } => {
            let right = eval_expression(right, env)?;

            Ok(unary::eval_prefix(*op, &right, *line)?)
        },
        Expr::Infix { left, op, right, line } => {
            let left = eval_expression(left, env)?;
            let right = eval_expression(right, env)?;

            Ok(binary::eval_infix(*op, &left, &right, *line)?)
        },
        Expr::If { condition,
                   consequence,
                   alternative,
                   .. } => {
            let condition = eval_expression(condition, env)?;

            if condition.is_truthy() {
                eval_block(consequence, env)
            } else if let Some(alternative) = alternative {
                eval_block(alternative, env)
            } else {
                Ok(Value::Null)
            }
        },
        Expr::FunctionLiteral { parameters, body, .. } => {
            Ok(Value::Function(Rc::new(Function { parameters: parameters.clone(),
                                                  body:       body.clone(),
                                                  env:        Rc::clone(env), })))
        },
        Expr::Call { callee, arguments, line } => {
            let callee = eval_expression(callee, env)?;
            let arguments = eval_expressions(arguments, env)?;

            function::core::apply_function(&callee, arguments, *line)
        },
        Expr::Index { target, index, line } => {
            let target = eval_expression(target, env)?;
            let index = eval_expression(index, env)?;

            Ok(index::eval_index(&target, &index, *line)?)
        },
    }
}

/// Evaluates expressions left to right, stopping at the first error.
pub fn eval_expressions(expressions: &[Expr], env: &Env) -> EvalResult<Vec<Value>> {
    expressions.iter()
               .map(|expression| eval_expression(expression, env))
               .collect()
}

/// Resolves an identifier: the environment chain first, then the builtin
/// table.
fn eval_identifier(name: &str, env: &Env, line: usize) -> Result<Value, RuntimeError> {
    if let Some(value) = env.borrow().get(name) {
        return Ok(value);
    }

    function::core::builtin(name).ok_or_else(|| {
                                     RuntimeError::IdentifierNotFound { name: name.to_string(),
                                                                        line }
                                 })
}

/// Builds a hash value from its literal.
///
/// Each key evaluates before its value, pairs in source order. Every key
/// must be hashable; a later pair with an equal key overwrites the
/// earlier one.
fn eval_hash_literal(pairs: &[(Expr, Expr)], env: &Env) -> EvalResult<Value> {
    let mut map = HashMap::new();

    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env)?;
        let hashed = key.hash_key(key_expr.line_number())?;
        let value = eval_expression(value_expr, env)?;

        map.insert(hashed, HashPair { key, value });
    }

    Ok(Value::Hash(Rc::new(map)))
}

/// Applies a user function in a fresh frame enclosing its captured
/// environment.
///
/// Arguments are bound to parameters by position. The body's `return`, if
/// it raises one, is unwrapped here — one call boundary consumes exactly
/// one `return` signal, so an inner function's `return` never exits an
/// outer one.
pub(in crate::interpreter::evaluator) fn apply_user_function(function: &Function,
                                                             arguments: Vec<Value>,
                                                             line: usize)
                                                             -> EvalResult<Value> {
    if function.parameters.len() != arguments.len() {
        return Err(RuntimeError::WrongNumberOfArguments { expected: function.parameters.len(),
                                                          found:    arguments.len(),
                                                          line }.into());
    }

    let env = Environment::new_enclosed(&function.env);
    for (parameter, argument) in function.parameters.iter().zip(arguments) {
        env.borrow_mut().set(parameter.clone(), argument);
    }

    match eval_block(&function.body, &env) {
        Err(Interrupt::Return(value)) => Ok(value),
        other => other,
    }
}
