use std::iter::Peekable;

use crate::{
    ast::{Expr, InfixOperator, PrefixOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            precedence::{Precedence, token_precedence},
            utils::{expect_token, parse_comma_separated, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one expression at the given precedence floor.
///
/// This is the heart of the expression grammar. A prefix rule produces the
/// left-hand side, then infix rules fold onto it for as long as the peeked
/// token binds strictly tighter than `min_precedence`:
///
/// ```text
///     expression := prefix (infix_op expression | "(" args ")" | "[" expression "]")*
/// ```
///
/// Strict comparison makes every binary operator left-associative, and a
/// token with no infix meaning (a semicolon, a closing delimiter, the next
/// statement) maps to the floor precedence and ends the loop.
///
/// Callers that want a whole expression pass [`Precedence::Lowest`];
/// operator rules pass their own precedence to bind their right operand.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `min_precedence`: The binding floor; only tighter tokens extend the
///   expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_precedence: Precedence)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_prefix(tokens)?;

    while let Some((token, _)) = tokens.peek()
          && min_precedence < token_precedence(token)
    {
        left = parse_infix(tokens, left)?;
    }

    Ok(left)
}

/// Parses the prefix form an expression begins with.
///
/// Dispatches on the peeked token:
/// - literals (integer, string, `true`/`false`, array, hash)
/// - identifiers
/// - the prefix operators `!` and `-`
/// - grouping parentheses
/// - `if` expressions
/// - `fn` literals
///
/// A token without a rule here cannot begin an expression; that includes
/// `Token::Illegal`, which is how characters the lexer could not recognize
/// finally get rejected.
///
/// # Returns
/// The parsed expression, or [`ParseError::NoPrefixParseRule`].
fn parse_prefix<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Ident(_), _) => parse_identifier_expression(tokens),
        (Token::Int(_), _) => parse_integer(tokens),
        (Token::Str(_), _) => parse_string(tokens),
        (Token::True | Token::False, _) => parse_boolean(tokens),
        (Token::Bang | Token::Minus, _) => parse_prefix_operator(tokens),
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::If, _) => parse_if(tokens),
        (Token::Fn, _) => parse_function(tokens),
        (Token::LBracket, _) => parse_array_literal(tokens),
        (Token::LBrace, _) => parse_hash_literal(tokens),
        (token, line) => Err(ParseError::NoPrefixParseRule { token: format!("{token:?}"),
                                                            line:  *line, }),
    }
}

/// Parses the infix form continuing `left`.
///
/// The expression loop has already established that the peeked token binds
/// tighter than the current floor, so it is either a call `(`, an index
/// `[`, or a binary operator.
fn parse_infix<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.peek() {
        Some((Token::LParen, _)) => parse_call(tokens, left),
        Some((Token::LBracket, _)) => parse_index(tokens, left),
        _ => parse_infix_operator(tokens, left),
    }
}

/// Parses a binary operator application onto `left`.
///
/// The right operand is parsed at the operator's own precedence, so a
/// following operator of the same strength does not capture it — that is
/// what makes `a - b - c` parse as `(a - b) - c`.
fn parse_infix_operator<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let op = match token_to_infix_operator(token) {
        Some(op) => op,
        None => unreachable!(),
    };

    let right = parse_expression(tokens, token_precedence(token))?;

    Ok(Expr::Infix { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: *line })
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for all tokens that are not binary operators.
#[must_use]
pub const fn token_to_infix_operator(token: &Token) -> Option<InfixOperator> {
    match token {
        Token::Plus => Some(InfixOperator::Add),
        Token::Minus => Some(InfixOperator::Sub),
        Token::Star => Some(InfixOperator::Mul),
        Token::Slash => Some(InfixOperator::Div),
        Token::Less => Some(InfixOperator::Less),
        Token::Greater => Some(InfixOperator::Greater),
        Token::EqualEqual => Some(InfixOperator::Equal),
        Token::BangEqual => Some(InfixOperator::NotEqual),
        _ => None,
    }
}

/// Parses a call argument list onto `left`, which becomes the callee.
///
/// Grammar: `call := expression "(" (expression ("," expression)*)? ")"`
fn parse_call<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let arguments = parse_comma_separated(tokens,
                                          |tokens| parse_expression(tokens, Precedence::Lowest),
                                          &Token::RParen)?;

    Ok(Expr::Call { callee: Box::new(left),
                    arguments,
                    line })
}

/// Parses an index applied to `left`.
///
/// Grammar: `index := expression "[" expression "]"`
fn parse_index<'a, I>(tokens: &mut Peekable<I>, left: Expr) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let index = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RBracket, line)?;

    Ok(Expr::Index { target: Box::new(left),
                     index:  Box::new(index),
                     line })
}

/// Parses an identifier expression.
fn parse_identifier_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Ident(name), line)) => Ok(Expr::Identifier { name: name.clone(),
                                                                  line: *line }),
        _ => unreachable!(),
    }
}

/// Parses an integer literal.
///
/// The lexer keeps the raw lexeme; conversion to `i64` happens here so a
/// literal that does not fit is reported with the text as written.
fn parse_integer<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let Some((Token::Int(literal), line)) = tokens.next() else {
        unreachable!()
    };

    match literal.parse::<i64>() {
        Ok(value) => Ok(Expr::IntegerLiteral { value, line: *line }),
        Err(_) => Err(ParseError::InvalidInteger { literal: literal.clone(),
                                                   line:    *line, }),
    }
}

/// Parses a string literal. The lexer already stripped the quotes.
fn parse_string<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Str(value), line)) => Ok(Expr::StringLiteral { value: value.clone(),
                                                                    line:  *line, }),
        _ => unreachable!(),
    }
}

/// Parses a boolean literal.
fn parse_boolean<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (token, line) = tokens.next().unwrap();

    Ok(Expr::BooleanLiteral { value: *token == Token::True,
                              line:  *line, })
}

/// Parses a prefix operator application.
///
/// The operand is parsed at [`Precedence::Prefix`], which binds tighter
/// than every binary operator, so `-a * b` is `(-a) * b` while `!!x`
/// still nests.
///
/// Grammar: `prefix := ("!" | "-") expression`
fn parse_prefix_operator<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, line) = tokens.next().unwrap();
    let op = match token {
        Token::Bang => PrefixOperator::Not,
        Token::Minus => PrefixOperator::Negate,
        _ => unreachable!(),
    };

    let right = parse_expression(tokens, Precedence::Prefix)?;

    Ok(Expr::Prefix { op,
                      right: Box::new(right),
                      line: *line })
}

/// Parses a parenthesized expression.
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar: `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let expr = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen, line)?;

    Ok(expr)
}

/// Parses an `if` expression with an optional `else` arm.
///
/// Grammar: `if := "if" "(" expression ")" block ("else" block)?`
///
/// # Errors
/// Returns a `ParseError` if the parentheses or braces are missing, or a
/// nested expression or block fails to parse.
fn parse_if<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    expect_token(tokens, &Token::LParen, line)?;
    let condition = parse_expression(tokens, Precedence::Lowest)?;
    expect_token(tokens, &Token::RParen, line)?;

    let brace_line = expect_token(tokens, &Token::LBrace, line)?;
    let consequence = parse_block(tokens, brace_line)?;

    let alternative = if let Some((Token::Else, else_line)) = tokens.peek() {
        let else_line = *else_line;
        tokens.next();

        let brace_line = expect_token(tokens, &Token::LBrace, else_line)?;
        Some(parse_block(tokens, brace_line)?)
    } else {
        None
    };

    Ok(Expr::If { condition: Box::new(condition),
                  consequence,
                  alternative,
                  line })
}

/// Parses a function literal.
///
/// Parameters are a comma-separated (possibly empty) list of identifiers.
///
/// Grammar: `function := "fn" "(" (IDENT ("," IDENT)*)? ")" block`
fn parse_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();

    expect_token(tokens, &Token::LParen, line)?;
    let parameters = parse_comma_separated(tokens, parse_identifier, &Token::RParen)?;

    let brace_line = expect_token(tokens, &Token::LBrace, line)?;
    let body = parse_block(tokens, brace_line)?;

    Ok(Expr::FunctionLiteral { parameters, body, line })
}

/// Parses an array literal of the form `[expr1, expr2, ..., exprN]`.
fn parse_array_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let elements = parse_comma_separated(tokens,
                                         |tokens| parse_expression(tokens, Precedence::Lowest),
                                         &Token::RBracket)?;

    Ok(Expr::ArrayLiteral { elements, line })
}

/// Parses a hash literal of the form `{key1: value1, ..., keyN: valueN}`.
///
/// An empty hash `{}` is accepted. Keys and values are full expressions;
/// whether a key is actually hashable is checked at evaluation time.
///
/// # Errors
/// Returns a `ParseError` if a `:` is missing after a key, pairs are not
/// separated by commas, or the closing `}` is missing.
fn parse_hash_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (_, line) = *tokens.next().unwrap();
    let mut pairs = Vec::new();

    if let Some((Token::RBrace, _)) = tokens.peek() {
        tokens.next();

        return Ok(Expr::HashLiteral { pairs, line });
    }
    loop {
        let key = parse_expression(tokens, Precedence::Lowest)?;
        expect_token(tokens, &Token::Colon, line)?;
        let value = parse_expression(tokens, Precedence::Lowest)?;
        pairs.push((key, value));

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RBrace, _)) => break,
            Some((token, line)) => {
                return Err(ParseError::UnexpectedToken { expected: "',' or RBrace".to_string(),
                                                         found:    format!("{token:?}"),
                                                         line:     *line, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }
    }

    Ok(Expr::HashLiteral { pairs, line })
}
