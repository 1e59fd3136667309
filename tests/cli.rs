use std::process::{Command, Output};

fn tally(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tally")).args(args)
                                             .env_remove("TALLY_LOG")
                                             .output()
                                             .expect("failed to run the tally binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn prints_one_result_per_statement() {
    let output = tally(&["2 + 2 * 2;; (2 + 2) * 2"]);

    assert!(output.status.success());
    insta::assert_snapshot!(stdout(&output), @r"
    6
    null
    8
    ");
}

#[test]
fn reads_scripts_from_files() {
    let output = tally(&["--file", "tests/scripts/nested.tally"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().collect::<Vec<_>>(), ["360", "-12", "-1"]);
}

#[test]
fn missing_file_fails() {
    let output = tally(&["--file", "tests/scripts/does-not-exist.tally"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does-not-exist.tally"));
}

#[test]
fn emits_the_ast_as_json() {
    let output = tally(&["--emit", "ast", "7"]);
    let ast: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(ast["type"], "Program");
    assert_eq!(ast["body"][0]["expression"]["raw"], "7");
}

#[test]
fn emits_the_tokens_as_json() {
    let output = tally(&["--emit", "tokens", "1+"]);
    let tokens: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert!(output.status.success());
    assert_eq!(tokens.as_array().map(Vec::len), Some(3));
    assert_eq!(tokens[2]["lexeme"], "");
}

#[test]
fn parse_errors_fail_with_a_message() {
    let output = tally(&["2 +"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    insta::assert_snapshot!(String::from_utf8_lossy(&output.stderr).trim_end(), @"Error at 3..3: Unexpected literal ';'.");
}

#[test]
fn division_by_zero_fails() {
    let output = tally(&["1 / 0"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Division by zero"));
}
