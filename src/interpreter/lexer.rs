use logos::Logos;

/// Represents a lexical token in the source input.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language. End of input is
/// not a token; the token stream simply ends, and the parser treats an
/// exhausted stream as the end-of-file sentinel.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// `let`
    #[token("let")]
    Let,
    /// `fn`
    #[token("fn")]
    Fn,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// Identifier tokens; variable or function names such as `x` or
    /// `counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Ident(String),
    /// Integer literal tokens, such as `42`. The raw lexeme is kept so the
    /// parser can report out-of-range literals with the original text.
    #[regex(r"[0-9]+", |lex| lex.slice().to_string())]
    Int(String),
    /// String literal tokens. The opening quote starts a callback that
    /// consumes up to the closing quote; the carried value is the content
    /// between the quotes. There are no escape sequences, and a string
    /// missing its closing quote runs to the end of the input.
    #[token("\"", lex_string)]
    Str(String),
    /// `=`
    #[token("=")]
    Assign,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `!`
    #[token("!")]
    Bang,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `:`
    #[token(":")]
    Colon,
    /// Any character no other rule recognizes. The lexer never fails;
    /// stray characters become `Illegal` tokens and the parser rejects
    /// them with a proper error.
    #[regex(r".", |lex| lex.slice().to_string(), priority = 0)]
    Illegal(String),

    /// Line feeds are skipped, but advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Reads a string literal body after the opening `"`.
///
/// The carried lexeme is the text between the quotes, taken verbatim.
/// If no closing quote exists, the rest of the input becomes the string.
/// Line feeds inside the literal still advance the line counter.
fn lex_string(lex: &mut logos::Lexer<Token>) -> String {
    let remainder = lex.remainder();
    let (content, consumed) = match remainder.find('"') {
        Some(end) => (remainder[..end].to_string(), end + 1),
        None => (remainder.to_string(), remainder.len()),
    };

    lex.extras.line += content.matches('\n').count();
    lex.bump(consumed);
    content
}

/// Tokenizes an entire source string.
///
/// Returns the token sequence paired with the line each token ends on.
/// Lexing cannot fail: input the rules do not cover is surfaced as
/// [`Token::Illegal`] and rejected later, by the parser.
///
/// # Example
/// ```
/// use sable::interpreter::lexer::{Token, lex};
///
/// let tokens = lex("let x = 5;");
///
/// assert_eq!(tokens[0], (Token::Let, 1));
/// assert_eq!(tokens[1], (Token::Ident("x".to_string()), 1));
/// assert_eq!(tokens.len(), 5);
/// ```
#[must_use]
pub fn lex(source: &str) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        match token {
            Ok(token) => tokens.push((token, lexer.extras.line)),
            Err(()) => tokens.push((Token::Illegal(lexer.slice().to_string()), lexer.extras.line)),
        }
    }

    tokens
}
