use std::fs;

use tally::{
    ast::{Expression, Node, Span, Statement},
    error::{Error, RuntimeError},
    interpreter::{evaluator::Evaluator, value::Value},
    run,
};
use walkdir::WalkDir;

#[test]
fn script_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "tally"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let expected = extract_expectations(&content);
        match run(&content) {
            Ok(results) => assert_eq!(results, expected, "results of {path:?} differ"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

/// Collects the `// expect: a, b, ...` comment lines of a script.
///
/// Each listed entry is one statement result; `null` stands for an empty
/// statement.
fn extract_expectations(content: &str) -> Vec<Option<f64>> {
    content.lines()
           .filter_map(|line| line.trim_start().strip_prefix("// expect:"))
           .flat_map(|list| list.split(','))
           .map(str::trim)
           .filter(|item| !item.is_empty())
           .map(|item| {
               if item == "null" {
                   None
               } else {
                   Some(item.parse().unwrap_or_else(|e| panic!("bad expectation {item:?}: {e}")))
               }
           })
           .collect()
}

fn assert_results(src: &str, expected: &[Option<f64>]) {
    match run(src) {
        Ok(results) => assert_eq!(results, expected, "results of {src:?} differ"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_value(src: &str, expected: f64) {
    assert_results(src, &[Some(expected)]);
}

fn assert_failure(src: &str) {
    if let Ok(results) = run(src) {
        panic!("Script {src:?} succeeded with {results:?} but was expected to fail")
    }
}

#[test]
fn simple_number() {
    assert_value("42", 42.0);
    assert_value("007", 7.0);
}

#[test]
fn basic_arithmetic() {
    assert_value("2 + 2", 4.0);
    assert_value("2 - 10", -8.0);
    assert_value("5 * 5", 25.0);
    assert_value("10 / 2", 5.0);
    assert_value("7 / 2", 3.5);
}

#[test]
fn left_associativity() {
    assert_value("2 + 3 - 1", 4.0);
    assert_value("10 - 4 - 3", 3.0);
    assert_value("64 / 4 / 2", 8.0);
}

#[test]
fn precedence() {
    assert_value("1 * 2 + 3", 5.0);
    assert_value("1 + 2 * 3", 7.0);
    assert_value("2 + 2 * 2", 6.0);
}

#[test]
fn parenthesised_expressions() {
    assert_value("(2 + 2) * 2", 8.0);
    assert_value("(1 * 2 * 3) / 2 * (4 * 5 * 6)", 360.0);
    assert_value("1 + (2 + 3 * (4 - (3 * 12) / 4))", -12.0);
}

#[test]
fn unary_minus() {
    assert_value("2+(-3)", -1.0);
    assert_value("-4 * -2", 8.0);
    assert_value("1 - -1", 2.0);
}

#[test]
fn empty_and_multiple_statements() {
    assert_results("", &[None]);
    assert_results(";", &[None]);
    assert_results("1;;;;", &[Some(1.0), None, None, None]);
    assert_results("1; 2 * 3; (4)", &[Some(1.0), Some(6.0), Some(4.0)]);
}

#[test]
fn text_after_the_final_semicolon_adds_an_empty_statement() {
    assert_results("1;", &[Some(1.0)]);
    assert_results("1; ", &[Some(1.0), None]);
    assert_results("1;\n", &[Some(1.0), None]);
    assert_results("1; // c", &[Some(1.0), None]);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(run("1 + 1 / 0"),
               Err(Error::Runtime(RuntimeError::DivisionByZero { span: Span::new(4, 9) })));
    assert_failure("0 / 0");
    assert_failure("1 / (2 - 2)");
}

#[test]
fn division_by_zero_message() {
    let error = run("8 / 0").unwrap_err();

    insta::assert_snapshot!(error, @"Error at 0..5: Division by zero.");
}

#[test]
fn a_failing_statement_fails_the_program() {
    assert_failure("1; 2 / 0; 3");
}

#[test]
fn malformed_input_is_error() {
    assert_failure("2 +");
    assert_failure("t+");
    assert_failure("-(1 + 2)");
    assert_failure("+1");
    assert_failure("(1");
    assert_failure("1 2");
}

#[test]
fn evaluator_accepts_any_node() {
    let program = tally::parse("(2 + 2) * 2;;-3").unwrap();
    let evaluator = Evaluator::new();

    assert_eq!(evaluator.eval(&program).unwrap(),
               Value::Sequence(vec![Some(8.0), None, Some(-3.0)]));
    assert_eq!(evaluator.eval(&program.body[0]).unwrap(), Value::Number(8.0));
    assert_eq!(evaluator.eval(&program.body[1]).unwrap(), Value::Null);
    assert_eq!(evaluator.eval(&program.body[2]).unwrap(), Value::Number(-3.0));
}

#[test]
fn evaluator_accepts_inner_nodes() {
    let program = tally::parse("(2 + 2) * 2;;-3").unwrap();
    let evaluator = Evaluator::new();

    let (Statement::Expression(product), Statement::Empty(empty), Statement::Expression(negation)) =
        (&program.body[0], &program.body[1], &program.body[2])
    else {
        panic!("unexpected statement kinds in {program:?}");
    };
    let Expression::BinaryExpression(binary) = &product.expression else {
        panic!("expected a binary expression, got {:?}", product.expression);
    };
    let Expression::BinaryExpression(sum) = binary.left.as_ref() else {
        panic!("expected a binary expression, got {:?}", binary.left);
    };
    let Expression::UnaryExpression(unary) = &negation.expression else {
        panic!("expected a unary expression, got {:?}", negation.expression);
    };

    assert_eq!(evaluator.eval(product).unwrap(), Value::Number(8.0));
    assert_eq!(evaluator.eval(empty).unwrap(), Value::Null);
    assert_eq!(evaluator.eval(binary).unwrap(), Value::Number(8.0));
    assert_eq!(evaluator.eval(sum).unwrap(), Value::Number(4.0));
    assert_eq!(evaluator.eval(unary).unwrap(), Value::Number(-3.0));
    assert_eq!(Node::from(product).span(), Span::new(0, 12));
    assert_eq!(Node::from(empty).span(), Span::new(12, 13));
}

#[test]
fn values_display() {
    insta::assert_snapshot!(Value::Sequence(vec![Some(6.0), None, Some(0.5)]), @"[6, null, 0.5]");
    insta::assert_snapshot!(Value::Null, @"null");
    insta::assert_snapshot!(Value::Number(-12.0), @"-12");
}

#[test]
fn values_serialize_untagged() {
    let value = Value::Sequence(vec![Some(1.5), None]);

    assert_eq!(serde_json::to_string(&value).unwrap(), "[1.5,null]");
    assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
}
