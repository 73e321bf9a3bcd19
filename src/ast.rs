use std::fmt;

/// A parsed program: the ordered list of top-level statements.
///
/// Produced by the parser and consumed whole by the evaluator. The
/// `Display` implementation reproduces the program in canonical source
/// form (fully parenthesized expressions, `;`-terminated `let`/`return`
/// statements), which is reparsable and used by the `--ast` flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements, as found in `if` arms and
/// function bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements inside the braces, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// A single statement.
///
/// Statements are the units the top-level parse loop produces. All three
/// forms accept an optional trailing semicolon.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let <name> = <value>` binding.
    Let {
        /// The name being bound.
        name:  String,
        /// The bound expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `return <value>` statement.
    Return {
        /// The returned expression.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A standalone expression evaluated for its value.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// `Expr` covers every expression form in the language, from literals and
/// identifiers to operator applications, conditionals, function literals,
/// calls, and indexing. Statements and expressions are mutually recursive:
/// blocks contain statements, which contain expressions, which may contain
/// blocks again.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a name, resolved against the environment chain at
    /// evaluation time.
    Identifier {
        /// The referenced name.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A 64-bit signed integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `true` or `false`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal. The value is the raw text between the quotes;
    /// there are no escape sequences.
    StringLiteral {
        /// The literal contents, quotes stripped.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// An array literal, e.g. `[1, "two", fn(x) { x }]`.
    ArrayLiteral {
        /// The element expressions, in source order.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A hash literal, e.g. `{"a": 1, true: 2}`. Pairs keep source order
    /// so keys and values evaluate in the order they were written.
    HashLiteral {
        /// The `key: value` pairs, in source order.
        pairs: Vec<(Self, Self)>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A prefix operator application, e.g. `!ok` or `-x`.
    Prefix {
        /// The operator.
        op:    PrefixOperator,
        /// The operand expression.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A binary operator application, e.g. `a + b`.
    Infix {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    InfixOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional expression. The `else` arm is optional; a false
    /// condition without one evaluates to `null`.
    If {
        /// The condition expression.
        condition:   Box<Self>,
        /// Block evaluated when the condition is truthy.
        consequence: Block,
        /// Block evaluated otherwise, if present.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A function literal, e.g. `fn(a, b) { a + b }`. Evaluating one
    /// captures the current environment, producing a closure.
    FunctionLiteral {
        /// The parameter names, in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body:       Block,
        /// Line number in the source code.
        line:       usize,
    },
    /// A call expression. The callee is an arbitrary expression, so both
    /// `add(1, 2)` and `fn(x) { x }(1)` are calls.
    Call {
        /// The expression producing the function to call.
        callee:    Box<Self>,
        /// The argument expressions, in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// An index expression, e.g. `arr[0]` or `h["key"]`.
    Index {
        /// The expression being indexed.
        target: Box<Self>,
        /// The index expression.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the source line number from `self`.
    ///
    /// ## Example
    /// ```
    /// use sable::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5 };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Identifier { line, .. }
            | Self::IntegerLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::HashLiteral { line, .. }
            | Self::Prefix { line, .. }
            | Self::Infix { line, .. }
            | Self::If { line, .. }
            | Self::FunctionLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_statements(f, &self.statements)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        write!(f, "{{ ")?;
        write_statements(f, &self.statements)?;
        write!(f, " }}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Self::Return { value, .. } => write!(f, "return {value};"),
            Self::Expression { expr, .. } => write!(f, "{expr}"),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier { name, .. } => write!(f, "{name}"),
            Self::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Self::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Self::StringLiteral { value, .. } => write!(f, "\"{value}\""),
            Self::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                write_comma_separated(f, elements)?;
                write!(f, "]")
            },
            Self::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (index, (key, value)) in pairs.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::Prefix { op, right, .. } => write!(f, "({op}{right})"),
            Self::Infix { left, op, right, .. } => write!(f, "({left} {op} {right})"),
            Self::If { condition,
                       consequence,
                       alternative,
                       .. } => {
                write!(f, "if ({condition}) {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            },
            Self::FunctionLiteral { parameters, body, .. } => {
                write!(f, "fn(")?;
                for (index, parameter) in parameters.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {body}")
            },
            Self::Call { callee, arguments, .. } => {
                write!(f, "{callee}(")?;
                write_comma_separated(f, arguments)?;
                write!(f, ")")
            },
            Self::Index { target, index, .. } => write!(f, "({target}[{index}])"),
        }
    }
}

fn write_statements(f: &mut fmt::Formatter<'_>, statements: &[Statement]) -> fmt::Result {
    for (index, statement) in statements.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }
        write!(f, "{statement}")?;
    }
    Ok(())
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, expressions: &[Expr]) -> fmt::Result {
    for (index, expression) in expressions.iter().enumerate() {
        if index > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{expression}")?;
    }
    Ok(())
}
