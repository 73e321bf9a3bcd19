use std::iter::Peekable;

use crate::{
    ast::{Program, Statement},
    error::ParseErrors,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            precedence::Precedence,
            utils::{expect_token, parse_identifier},
        },
    },
};

/// Parses a whole program: statements until the token stream is exhausted.
///
/// The parser does not abort at the first bad statement. A failed
/// statement records its error, the stream is resynchronized past the next
/// `;`, and parsing continues, so one pass reports as many independent
/// mistakes as possible. Consequently the result is either a program that
/// parsed completely, or the full (non-empty) error list — never a partial
/// program presented as a success.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Errors
/// Returns [`ParseErrors`] carrying every recorded [`ParseError`].
pub fn parse_program<'a, I>(tokens: &mut Peekable<I>) -> Result<Program, ParseErrors>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();
    let mut errors = Vec::new();

    while tokens.peek().is_some() {
        match parse_statement(tokens) {
            Ok(statement) => statements.push(statement),
            Err(error) => {
                errors.push(error);
                synchronize(tokens);
            },
        }
    }

    if errors.is_empty() {
        Ok(Program { statements })
    } else {
        Err(ParseErrors(errors))
    }
}

/// Parses a single statement.
///
/// A statement may be one of:
/// - a `let` binding,
/// - a `return` statement,
/// - an expression used as a statement.
///
/// The leading token decides the form. Trailing semicolons are optional in
/// all three; any that follow the statement are consumed here.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let statement = match tokens.peek() {
        Some((Token::Let, _)) => parse_let_statement(tokens)?,
        Some((Token::Return, _)) => parse_return_statement(tokens)?,
        _ => parse_expression_statement(tokens)?,
    };

    while let Some((Token::Semicolon, _)) = tokens.peek() {
        tokens.next();
    }

    Ok(statement)
}

/// Parses a `let <identifier> = <expression>` binding.
///
/// # Errors
/// Returns a `ParseError` if the identifier or `=` is missing, or the
/// bound expression fails to parse.
fn parse_let_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let name = parse_identifier(tokens)?;
    expect_token(tokens, &Token::Assign, line)?;
    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Let { name, value, line })
}

/// Parses a `return <expression>` statement.
fn parse_return_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    let value = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Return { value, line })
}

/// Parses an expression in statement position.
fn parse_expression_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = tokens.peek().map_or(0, |(_, line)| *line);
    let expr = parse_expression(tokens, Precedence::Lowest)?;

    Ok(Statement::Expression { expr, line })
}

/// Skips ahead to the next statement boundary after a parse error.
///
/// Everything up to and including the next `;` is dropped (or the rest of
/// the stream, if no semicolon remains), so one bad statement does not
/// cascade into errors for every token after it.
fn synchronize<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a (Token, usize)>
{
    for (token, _) in tokens.by_ref() {
        if *token == Token::Semicolon {
            break;
        }
    }
}
