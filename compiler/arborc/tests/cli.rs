//! Tests for the `arbor` binary.

use std::process::Command;

use pretty_assertions::assert_eq;

fn arbor(args: &[&str]) -> std::process::Output {
    match Command::new(env!("CARGO_BIN_EXE_arbor"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
    {
        Ok(output) => output,
        Err(e) => panic!("failed to start arbor: {e}"),
    }
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn eval_prints_console_output() {
    let output = arbor(&["eval", "console.log(1 + 2, 'x');", "--color=never"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3 x\n");
}

#[test]
fn eval_error_exits_nonzero_with_diagnostic() {
    let output = arbor(&["eval", "var a = 1; var a = 2;", "--color=never"]);
    assert!(!output.status.success());
    let err = stderr(&output);
    assert!(err.contains("E6001"), "{err}");
    assert!(err.contains("<eval>"), "{err}");
}

#[test]
fn parse_error_exits_nonzero() {
    let output = arbor(&["eval", "var = 1;", "--color=never"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("E1"));
}

#[test]
fn missing_file_is_reported() {
    let output = arbor(&["run", "/no/such/file.js"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("cannot find file '/no/such/file.js'"));
}

#[test]
fn unknown_option_is_rejected() {
    let output = arbor(&["eval", "1;", "--fast"]);
    assert!(!output.status.success());
    assert!(stderr(&output).contains("unknown option '--fast'"));
}

#[test]
fn run_file_from_disk() {
    let path = std::env::temp_dir().join(format!("arbor-cli-{}.js", std::process::id()));
    let source = "function sq(n) { return n * n; }\nconsole.log(sq(9));\n";
    if let Err(e) = std::fs::write(&path, source) {
        panic!("cannot write {}: {e}", path.display());
    }
    let output = arbor(&["run", &path.to_string_lossy(), "--color=never"]);
    let _ = std::fs::remove_file(&path);

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "81\n");
}

#[test]
fn explain_known_code() {
    let output = arbor(&["explain", "E6003"]);
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("E6003: only `+`, `-`, `*` and `/` can be evaluated"));

    let output = arbor(&["explain", "E4242"]);
    assert!(!output.status.success());
}

#[test]
fn help_lists_commands() {
    let output = arbor(&["help"]);
    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["run", "eval", "parse", "lex", "explain"] {
        assert!(text.contains(command), "missing {command}");
    }
}
