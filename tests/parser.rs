use sable::{
    interpreter::lexer::{Token, lex},
    parse,
};

#[test]
fn operator_precedence_printer_matrix() {
    let cases = [("-a * b", "((-a) * b)"),
                 ("!-a", "(!(-a))"),
                 ("a + b + c", "((a + b) + c)"),
                 ("a + b - c", "((a + b) - c)"),
                 ("a * b * c", "((a * b) * c)"),
                 ("a * b / c", "((a * b) / c)"),
                 ("a + b / c", "(a + (b / c))"),
                 ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
                 ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
                 ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
                 ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
                 ("true", "true"),
                 ("false != true", "(false != true)"),
                 ("3 > 5 == false", "((3 > 5) == false)"),
                 ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
                 ("(5 + 5) * 2", "((5 + 5) * 2)"),
                 ("2 / (5 + 5)", "(2 / (5 + 5))"),
                 ("-(5 + 5)", "(-(5 + 5))"),
                 ("!(true == true)", "(!(true == true))"),
                 ("(1 + 2) * 3", "((1 + 2) * 3)"),
                 ("3 * (1 + 2)", "(3 * (1 + 2))"),
                 ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
                 ("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                  "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))"),
                 ("a * [1, 2, 3, 4][b * c] * d", "((a * ([1, 2, 3, 4][(b * c)])) * d)"),
                 ("add(a * b[2], b[1], 2 * [1, 2][1])",
                  "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))")];

    for (input, expected) in cases {
        let program = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(program.to_string(), expected, "for input: {input}");
    }
}

#[test]
fn statements_print_canonically() {
    let cases = [("let x = 5", "let x = 5;"),
                 ("let x = 5;", "let x = 5;"),
                 ("return 2 + 3;", "return (2 + 3);"),
                 ("let x = 5; return x;", "let x = 5; return x;"),
                 ("if (x < y) { x } else { y }", "if ((x < y)) { x } else { y }"),
                 ("if (x) { y }", "if (x) { y }"),
                 ("fn(a, b) { a + b; }", "fn(a, b) { (a + b) }"),
                 ("fn() {}", "fn() { }"),
                 ("let f = fn(x) { return x; }", "let f = fn(x) { return x; };"),
                 ("[1, 2, \"three\"]", "[1, 2, \"three\"]"),
                 ("{\"a\": 1, 2: true}", "{\"a\": 1, 2: true}"),
                 ("{}", "{}"),
                 ("h[\"key\"]", "(h[\"key\"])")];

    for (input, expected) in cases {
        let program = parse(input).unwrap_or_else(|e| panic!("{input}: {e}"));
        assert_eq!(program.to_string(), expected, "for input: {input}");
    }
}

// The canonical printer emits reparsable source: parsing what it printed
// and printing again must reach a fixed point.
#[test]
fn printer_output_reparses_to_itself() {
    let inputs = ["let add = fn(a, b) { a + b; }; add(1, 2 * 3);",
                  "if (x > 3) { return x * 2; } else { return 0; }",
                  "let make = fn(x) { fn(y) { x + y } };",
                  "let h = {\"one\": 1, true: [1, 2], 3: fn(x) { x }};",
                  "let a = [1, \"two\", !ok, -n]; a[1 + 1];",
                  "return push(tail(a), first(a));"];

    for input in inputs {
        let printed = parse(input).unwrap_or_else(|e| panic!("{input}: {e}")).to_string();
        let reprinted = parse(&printed).unwrap_or_else(|e| panic!("{printed}: {e}")).to_string();
        assert_eq!(reprinted, printed, "for input: {input}");
    }
}

#[test]
fn parse_errors_name_the_offending_token() {
    let errors = parse("let 5 = 3;").unwrap_err();
    assert!(errors.0[0].to_string().contains("Expected token identifier"), "{errors}");

    let errors = parse("let x 5;").unwrap_err();
    assert!(errors.0[0].to_string().contains("Expected token Assign"), "{errors}");

    let errors = parse("@").unwrap_err();
    assert!(errors.0[0].to_string().contains("No prefix parse rule"), "{errors}");
    assert!(errors.0[0].to_string().contains("Illegal"), "{errors}");

    let errors = parse("let x = 99999999999999999999;").unwrap_err();
    assert!(errors.0[0].to_string()
                       .contains("Unable to parse \"99999999999999999999\" as integer"),
            "{errors}");
}

#[test]
fn parser_recovers_and_reports_every_statement_error() {
    let errors = parse("let = 1; let y 2; @").unwrap_err();
    assert_eq!(errors.0.len(), 3, "{errors}");

    // Statements after a bad one still parse.
    let errors = parse("let = 1; let z = 3;").unwrap_err();
    assert_eq!(errors.0.len(), 1, "{errors}");
}

#[test]
fn unterminated_constructs_are_errors() {
    assert!(parse("(1 + 2").is_err());
    assert!(parse("[1, 2").is_err());
    assert!(parse("{\"a\": 1").is_err());
    assert!(parse("if (true) { let x = 1;").is_err());
    assert!(parse("fn(a, b { a }").is_err());
    assert!(parse("h[0").is_err());
}

#[test]
fn parse_error_lines_point_at_the_source() {
    let errors = parse("let a = 1;\nlet b = ;\n").unwrap_err();
    assert!(errors.0[0].to_string().contains("line 2"), "{errors}");
}

#[test]
fn lexer_token_stream() {
    let tokens: Vec<Token> = lex("let five = 5;").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens,
               vec![Token::Let,
                    Token::Ident("five".to_string()),
                    Token::Assign,
                    Token::Int("5".to_string()),
                    Token::Semicolon]);

    let tokens: Vec<Token> = lex("== != = ! <>").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens,
               vec![Token::EqualEqual,
                    Token::BangEqual,
                    Token::Assign,
                    Token::Bang,
                    Token::Less,
                    Token::Greater]);
}

#[test]
fn lexer_strings() {
    let tokens: Vec<Token> = lex("\"hello world\"").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, vec![Token::Str("hello world".to_string())]);

    // No escapes: a backslash is just content.
    let tokens: Vec<Token> = lex(r#""a\b""#).into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, vec![Token::Str(r"a\b".to_string())]);

    // A missing closing quote takes the rest of the input.
    let tokens: Vec<Token> = lex("\"abc").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, vec![Token::Str("abc".to_string())]);

    let tokens: Vec<Token> = lex("\"\"").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens, vec![Token::Str(String::new())]);
}

#[test]
fn lexer_tracks_lines() {
    let tokens = lex("let x = 1;\nlet y = 2;");

    assert!(tokens.iter().take(5).all(|(_, line)| *line == 1));
    assert!(tokens.iter().skip(5).all(|(_, line)| *line == 2));
}

#[test]
fn lexer_marks_unknown_characters_illegal() {
    let tokens: Vec<Token> = lex("let @ = 1;").into_iter().map(|(t, _)| t).collect();
    assert!(tokens.contains(&Token::Illegal("@".to_string())));

    let tokens: Vec<Token> = lex("a $ b").into_iter().map(|(t, _)| t).collect();
    assert_eq!(tokens[1], Token::Illegal("$".to_string()));
}

#[test]
fn lexer_keywords_do_not_swallow_identifiers() {
    let tokens: Vec<Token> = lex("lettuce iffy fnord return_value true1")
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(tokens,
               vec![Token::Ident("lettuce".to_string()),
                    Token::Ident("iffy".to_string()),
                    Token::Ident("fnord".to_string()),
                    Token::Ident("return_value".to_string()),
                    Token::Ident("true1".to_string())]);
}

// Concatenating every lexeme reproduces the source, modulo whitespace and
// the quotes the string rule strips.
#[test]
fn lexemes_concatenate_back_to_the_source() {
    let source = "let add=fn(a,b){a+b};add(1,2)==3;\"hi\"+\"there\";![x]";

    let mut rebuilt = String::new();
    for (token, _) in lex(source) {
        rebuilt.push_str(&token_text(&token));
    }

    let stripped: String = source.chars().filter(|c| !c.is_whitespace() && *c != '"').collect();
    assert_eq!(rebuilt, stripped);
}

fn token_text(token: &Token) -> String {
    match token {
        Token::Let => "let".to_string(),
        Token::Fn => "fn".to_string(),
        Token::If => "if".to_string(),
        Token::Else => "else".to_string(),
        Token::Return => "return".to_string(),
        Token::True => "true".to_string(),
        Token::False => "false".to_string(),
        Token::Ident(s) | Token::Int(s) | Token::Str(s) | Token::Illegal(s) => s.clone(),
        Token::Assign => "=".to_string(),
        Token::Plus => "+".to_string(),
        Token::Minus => "-".to_string(),
        Token::Bang => "!".to_string(),
        Token::Star => "*".to_string(),
        Token::Slash => "/".to_string(),
        Token::Less => "<".to_string(),
        Token::Greater => ">".to_string(),
        Token::EqualEqual => "==".to_string(),
        Token::BangEqual => "!=".to_string(),
        Token::LParen => "(".to_string(),
        Token::RParen => ")".to_string(),
        Token::LBrace => "{".to_string(),
        Token::RBrace => "}".to_string(),
        Token::LBracket => "[".to_string(),
        Token::RBracket => "]".to_string(),
        Token::Comma => ",".to_string(),
        Token::Semicolon => ";".to_string(),
        Token::Colon => ":".to_string(),
        Token::NewLine | Token::Ignored => String::new(),
    }
}
