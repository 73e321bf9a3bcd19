#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into an
/// abstract syntax tree.
pub enum ParseError {
    /// The parser required one specific token and found another.
    UnexpectedToken {
        /// Description of the token the parser required.
        expected: String,
        /// Description of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// No rule knows how to begin an expression with this token. Also
    /// raised for characters the lexer could not recognize at all.
    NoPrefixParseRule {
        /// Description of the offending token.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    InvalidInteger {
        /// The literal text as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The token stream ended in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected, found, line } => {
                write!(f, "Error on line {line}: Expected token {expected}, got {found}.")
            },
            Self::NoPrefixParseRule { token, line } => {
                write!(f, "Error on line {line}: No prefix parse rule for {token} found.")
            },
            Self::InvalidInteger { literal, line } => {
                write!(f, "Error on line {line}: Unable to parse \"{literal}\" as integer.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}

/// Every parse error found in one run over a program.
///
/// The parser does not stop at the first bad statement; it records the
/// error, resynchronizes at the next statement boundary, and keeps going,
/// so a single pass can report several independent mistakes. The list is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors(pub Vec<ParseError>);

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, error) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
