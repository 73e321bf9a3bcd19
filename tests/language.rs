use std::fs;

use sable::{interpreter::value::core::Value, run};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_code_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run(&code) {
                panic!("Example {} in {:?} failed:\n{}\nError: {}", i + 1, path, code, e);
            }
        }
    }

    assert!(count > 0, "No sable examples found in book/src");
}

fn extract_code_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```sable") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn eval_ok(src: &str) -> Value {
    match run(src) {
        Ok(value) => value,
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn eval_err(src: &str) -> String {
    match run(src) {
        Ok(value) => panic!("Script succeeded but was expected to fail: {src}\nValue: {value}"),
        Err(e) => e.to_string(),
    }
}

#[test]
fn integer_arithmetic() {
    assert_eq!(eval_ok("1 + 2 * 3"), Value::Integer(7));
    assert_eq!(eval_ok("(1 + 2) * 3"), Value::Integer(9));
    assert_eq!(eval_ok("8 - 5"), Value::Integer(3));
    assert_eq!(eval_ok("10 / 3"), Value::Integer(3));
    assert_eq!(eval_ok("-5 + 5"), Value::Integer(0));
    assert_eq!(eval_ok("2 * -3"), Value::Integer(-6));
}

#[test]
fn comparisons_and_equality() {
    assert_eq!(eval_ok("2 < 3"), Value::Bool(true));
    assert_eq!(eval_ok("3 > 2"), Value::Bool(true));
    assert_eq!(eval_ok("2 > 3"), Value::Bool(false));
    assert_eq!(eval_ok("2 == 2"), Value::Bool(true));
    assert_eq!(eval_ok("2 != 2"), Value::Bool(false));
    assert_eq!(eval_ok("true == true"), Value::Bool(true));
    assert_eq!(eval_ok("true != false"), Value::Bool(true));
    assert_eq!(eval_ok("(1 < 2) == true"), Value::Bool(true));
}

#[test]
fn null_equality() {
    // Calling an empty function is the way to spell `null`.
    assert_eq!(eval_ok("fn() {}() == fn() {}()"), Value::Bool(true));
    assert_eq!(eval_ok("fn() {}() != fn() {}()"), Value::Bool(false));
}

#[test]
fn bang_operator_follows_truthiness() {
    assert_eq!(eval_ok("!true"), Value::Bool(false));
    assert_eq!(eval_ok("!false"), Value::Bool(true));
    assert_eq!(eval_ok("!5"), Value::Bool(false));
    assert_eq!(eval_ok("!!5"), Value::Bool(true));
    assert_eq!(eval_ok("!0"), Value::Bool(false));
    assert_eq!(eval_ok("!\"\""), Value::Bool(false));
    assert_eq!(eval_ok("!fn() {}()"), Value::Bool(true));
}

#[test]
fn string_concatenation() {
    assert_eq!(eval_ok("\"foo\" + \"bar\""), Value::from("foobar"));
    assert_eq!(eval_ok("\"a\" + \"b\" + \"c\""), Value::from("abc"));
    assert_eq!(eval_ok("len(\"hello\")"), Value::Integer(5));
    assert_eq!(eval_ok("len(\"\")"), Value::Integer(0));
}

#[test]
fn if_else_and_truthiness() {
    assert_eq!(eval_ok("if (true) { 10 }"), Value::Integer(10));
    assert_eq!(eval_ok("if (false) { 10 }"), Value::Null);
    assert_eq!(eval_ok("if (1 < 2) { 10 } else { 20 }"), Value::Integer(10));
    assert_eq!(eval_ok("if (1 > 2) { 10 } else { 20 }"), Value::Integer(20));
    // Zero and empty values are truthy; only null and false are not.
    assert_eq!(eval_ok("if (0) { 1 } else { 2 }"), Value::Integer(1));
    assert_eq!(eval_ok("if (\"\") { 1 } else { 2 }"), Value::Integer(1));
    assert_eq!(eval_ok("if (fn() {}()) { 1 } else { 2 }"), Value::Integer(2));
}

#[test]
fn let_bindings() {
    assert_eq!(eval_ok("let a = 5; a"), Value::Integer(5));
    assert_eq!(eval_ok("let a = 5; let b = a; b"), Value::Integer(5));
    assert_eq!(eval_ok("let a = 5; let b = a + 1; a + b"), Value::Integer(11));
    // Re-binding a name replaces it in the same frame.
    assert_eq!(eval_ok("let x = 1; let x = x + 1; x"), Value::Integer(2));
    // A let statement itself has no value.
    assert_eq!(eval_ok("let x = 1;"), Value::Null);
}

#[test]
fn function_application() {
    assert_eq!(eval_ok("let add = fn(a, b) { a + b; }; add(2, 3);"), Value::Integer(5));
    assert_eq!(eval_ok("let identity = fn(x) { x }; identity(42)"), Value::Integer(42));
    assert_eq!(eval_ok("fn(x) { x * 2 }(21)"), Value::Integer(42));
    assert_eq!(eval_ok("fn() {}()"), Value::Null);
}

#[test]
fn closures_capture_their_definition_environment() {
    assert_eq!(eval_ok("let make = fn(x) { fn(y) { x + y; } }; let add2 = make(2); add2(40);"),
               Value::Integer(42));
    assert_eq!(eval_ok("let counter = fn() { let i = 0; fn() { i } }; counter()()"),
               Value::Integer(0));
    // The captured frame is shared, not copied at call time.
    assert_eq!(eval_ok("let make = fn(x) { fn() { x } }; let f = make(1); let g = make(2); f() + g()"),
               Value::Integer(3));
}

#[test]
fn function_shadowing_keeps_outer_binding_intact() {
    assert_eq!(eval_ok("let x = 1; let f = fn() { let x = 2; x }; f() + x"), Value::Integer(3));
}

#[test]
fn higher_order_functions() {
    assert_eq!(eval_ok("let twice = fn(f, x) { f(f(x)) }; twice(fn(n) { n + 1 }, 5)"),
               Value::Integer(7));
    assert_eq!(eval_ok("let apply = fn(f) { f() }; apply(fn() { 9 })"), Value::Integer(9));
}

#[test]
fn recursion_through_the_captured_environment() {
    assert_eq!(eval_ok("let fact = fn(n) { if (n < 2) { return 1; } fact(n - 1) * n }; fact(5)"),
               Value::Integer(120));
    assert_eq!(eval_ok("let fib = fn(n) { if (n < 2) { return n; } fib(n - 1) + fib(n - 2) }; fib(10)"),
               Value::Integer(55));
}

#[test]
fn return_semantics() {
    assert_eq!(eval_ok("fn() { 1; 2 }()"), Value::Integer(2));
    assert_eq!(eval_ok("fn() { return 1; 2 }()"), Value::Integer(1));
    // A return deep in nested blocks exits the whole function.
    assert_eq!(eval_ok("fn() { if (true) { if (true) { return 10; } } return 1; }()"),
               Value::Integer(10));
    // An inner function's return does not exit the outer one.
    assert_eq!(eval_ok("fn() { let inner = fn() { return 1; }; inner(); 2 }()"),
               Value::Integer(2));
}

#[test]
fn top_level_return_ends_the_program() {
    assert_eq!(eval_ok("let x = 5; if (x > 3) { return x * 2; } else { return 0; };"),
               Value::Integer(10));
    assert_eq!(eval_ok("return 7; 8"), Value::Integer(7));
}

#[test]
fn array_literals_and_indexing() {
    assert_eq!(eval_ok("[1, 2 * 2, 3 + 3]"),
               Value::from(vec![Value::Integer(1), Value::Integer(4), Value::Integer(6)]));
    assert_eq!(eval_ok("let a = [1, 2, 3]; a[0] + a[1] + a[2]"), Value::Integer(6));
    assert_eq!(eval_ok("[1, 2, 3][1 + 1]"), Value::Integer(3));
    assert_eq!(eval_ok("let a = [[1, 2], [3, 4]]; a[1][0]"), Value::Integer(3));
}

#[test]
fn array_builtins() {
    assert_eq!(eval_ok("let a = [1, 2, 3]; len(a) + first(a) + last(a);"), Value::Integer(7));
    assert_eq!(eval_ok("len([])"), Value::Integer(0));
    assert_eq!(eval_ok("first([])"), Value::Null);
    assert_eq!(eval_ok("last([])"), Value::Null);
    assert_eq!(eval_ok("tail([1, 2, 3])"),
               Value::from(vec![Value::Integer(2), Value::Integer(3)]));
    assert_eq!(eval_ok("tail([1])"), Value::from(vec![]));
    assert_eq!(eval_ok("tail([])"), Value::from(vec![]));
}

#[test]
fn push_appends_without_touching_the_original() {
    assert_eq!(eval_ok("push([1], 2)"),
               Value::from(vec![Value::Integer(1), Value::Integer(2)]));
    assert_eq!(eval_ok("push([1], 2, 3)"),
               Value::from(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]));
    // The first element survives and the source array is unchanged.
    assert_eq!(eval_ok("let a = [1, 2]; let b = push(a, 3); first(b)"), Value::Integer(1));
    assert_eq!(eval_ok("let a = [1, 2]; let b = push(a, 3); len(a)"), Value::Integer(2));
}

#[test]
fn builtins_are_first_class_values() {
    assert_eq!(eval_ok("let f = len; f([1, 2])"), Value::Integer(2));
    assert_eq!(eval_ok("let apply = fn(f, x) { f(x) }; apply(first, [7, 8])"), Value::Integer(7));
}

#[test]
fn hash_literals_and_lookup() {
    assert_eq!(eval_ok("let h = {\"one\": 1, \"two\": 2}; h[\"one\"] + h[\"two\"]"),
               Value::Integer(3));
    // All three hashable key types can coexist.
    assert_eq!(eval_ok("let h = {\"a\": 1, 7: 2, true: 3}; h[\"a\"] + h[7] + h[true]"),
               Value::Integer(6));
    // Keys are expressions, evaluated when the literal is built.
    assert_eq!(eval_ok("let two = \"two\"; let h = {\"one\": 10 - 9, two: 1 + 1}; h[two]"),
               Value::Integer(2));
    // A later equal key overwrites the earlier pair.
    assert_eq!(eval_ok("{\"k\": 1, \"k\": 2}[\"k\"]"), Value::Integer(2));
    assert_eq!(eval_ok("{}[\"anything\"]"), Value::Null);
}

#[test]
fn missing_hash_key_yields_null() {
    assert_eq!(eval_ok("let h = {\"a\": 1}; h[\"b\"]"), Value::Null);
    // ...which then fails loudly when used as a number.
    let message = eval_err("let h = {\"one\": 1, \"two\": 2}; h[\"two\"] + h[\"missing\"];");
    assert!(message.contains("Type mismatch: INTEGER + NULL"), "{message}");
}

#[test]
fn unusable_hash_keys_are_errors() {
    let message = eval_err("{[1]: 2}");
    assert!(message.contains("Unusable as hash key: ARRAY"), "{message}");

    let message = eval_err("let h = {\"a\": 1}; h[[1]]");
    assert!(message.contains("Unusable as hash key: ARRAY"), "{message}");
}

#[test]
fn array_index_bounds_are_checked() {
    let message = eval_err("[1, 2, 3][3]");
    assert!(message.contains("Index 3 exceeds bounds of array of length 3"), "{message}");

    let message = eval_err("[1, 2, 3][-1]");
    assert!(message.contains("Index -1 exceeds bounds of array of length 3"), "{message}");

    let message = eval_err("let a = [1]; a[len(a)]");
    assert!(message.contains("exceeds bounds"), "{message}");
}

#[test]
fn index_operator_rejects_other_types() {
    let message = eval_err("5[0]");
    assert!(message.contains("Index operator not supported: INTEGER"), "{message}");

    let message = eval_err("\"str\"[0]");
    assert!(message.contains("Index operator not supported: STRING"), "{message}");

    let message = eval_err("[1, 2][\"0\"]");
    assert!(message.contains("Index operator not supported: ARRAY"), "{message}");
}

#[test]
fn type_mismatch_errors() {
    let message = eval_err("5 + true");
    assert!(message.contains("Type mismatch: INTEGER + BOOLEAN"), "{message}");

    let message = eval_err("5 == \"5\"");
    assert!(message.contains("Type mismatch: INTEGER == STRING"), "{message}");

    let message = eval_err("\"a\" + 1");
    assert!(message.contains("Type mismatch: STRING + INTEGER"), "{message}");
}

#[test]
fn unknown_operator_errors() {
    let message = eval_err("true + false");
    assert!(message.contains("Unknown operator: BOOLEAN + BOOLEAN"), "{message}");

    let message = eval_err("\"a\" == \"a\"");
    assert!(message.contains("Unknown operator: STRING == STRING"), "{message}");

    let message = eval_err("-true");
    assert!(message.contains("Unknown operator: -BOOLEAN"), "{message}");

    let message = eval_err("[1] + [2]");
    assert!(message.contains("Unknown operator: ARRAY + ARRAY"), "{message}");
}

#[test]
fn division_by_zero_is_an_error() {
    let message = eval_err("1 / 0");
    assert!(message.contains("Division by zero"), "{message}");

    let message = eval_err("let f = fn(d) { 10 / d }; f(0)");
    assert!(message.contains("Division by zero"), "{message}");
}

#[test]
fn integer_overflow_is_an_error() {
    let message = eval_err("9223372036854775807 + 1");
    assert!(message.contains("Integer overflow"), "{message}");

    let message = eval_err("-9223372036854775807 - 2");
    assert!(message.contains("Integer overflow"), "{message}");

    let message = eval_err("9223372036854775807 * 2");
    assert!(message.contains("Integer overflow"), "{message}");
}

#[test]
fn call_arity_is_checked() {
    let message = eval_err("let f = fn(a, b) { a }; f(1)");
    assert!(message.contains("Wrong number of arguments: got 1, want 2"), "{message}");

    let message = eval_err("let f = fn() { 1 }; f(1)");
    assert!(message.contains("Wrong number of arguments: got 1, want 0"), "{message}");

    let message = eval_err("len(\"a\", \"b\")");
    assert!(message.contains("Wrong number of arguments: got 2, want 1"), "{message}");

    let message = eval_err("push([1])");
    assert!(message.contains("got 1, want at least 2"), "{message}");
}

#[test]
fn builtin_argument_types_are_checked() {
    let message = eval_err("len(5)");
    assert!(message.contains("Argument to `len` not supported, got INTEGER"), "{message}");

    let message = eval_err("first(\"abc\")");
    assert!(message.contains("Argument to `first` not supported, got STRING"), "{message}");

    let message = eval_err("push(5, 1)");
    assert!(message.contains("Argument to `push` not supported, got INTEGER"), "{message}");
}

#[test]
fn calling_a_non_function_is_an_error() {
    let message = eval_err("5(1)");
    assert!(message.contains("Not a function: INTEGER"), "{message}");

    let message = eval_err("let x = \"f\"; x()");
    assert!(message.contains("Not a function: STRING"), "{message}");
}

#[test]
fn unresolved_identifiers_are_errors() {
    let message = eval_err("foobar");
    assert!(message.contains("Identifier not found: 'foobar'"), "{message}");

    let message = eval_err("let f = fn() { ghost }; f()");
    assert!(message.contains("Identifier not found: 'ghost'"), "{message}");
}

#[test]
fn errors_cut_evaluation_short() {
    // The error from the first element stops the array literal.
    let message = eval_err("[1 / 0, ghost]");
    assert!(message.contains("Division by zero"), "{message}");

    // Arguments evaluate left to right; the first failure wins.
    let message = eval_err("len(ghost, 1 / 0)");
    assert!(message.contains("Identifier not found: 'ghost'"), "{message}");
}

#[test]
fn inspection_output() {
    assert_eq!(eval_ok("[1, \"two\", true]").to_string(), "[1, two, true]");
    assert_eq!(eval_ok("fn() {}()").to_string(), "null");
    assert_eq!(eval_ok("fn(a, b) { a + b }").to_string(), "fn(a, b) { (a + b) }");
    assert_eq!(eval_ok("len").to_string(), "builtin function");
    assert_eq!(eval_ok("{\"k\": [1]}").to_string(), "{k: [1]}");
}

#[test]
fn example_script_runs() {
    let script = fs::read_to_string("tests/example.sable").expect("missing file");
    assert_eq!(eval_ok(&script), Value::Integer(30));
}
