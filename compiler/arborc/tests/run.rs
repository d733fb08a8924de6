//! End-to-end runs through the library entry points.

use pretty_assertions::assert_eq;

use arbor_diagnostic::{ColorMode, TerminalEmitter};
use arbor_eval::{buffer_handler, EvalOptions, RedeclarationCheck};
use arborc::{RunConfig, RunStatus, Runtime};

struct Outcome {
    status: RunStatus,
    stdout: String,
    stderr: String,
    diagnostics: String,
}

fn run_with(source: &str, eval: EvalOptions) -> Outcome {
    let print = buffer_handler();
    let config = RunConfig {
        source_name: "test.js".to_string(),
        color: ColorMode::Never,
        eval,
    };
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let mut runtime = Runtime::with_emitter(config, emitter).with_print_handler(print.clone());

    let status = match runtime.run(source) {
        Ok(status) => status,
        Err(e) => panic!("parse failed: {e}"),
    };
    Outcome {
        status,
        stdout: print.get_output(),
        stderr: print.get_errors(),
        diagnostics: String::from_utf8_lossy(&runtime.into_emitter().into_inner()).into_owned(),
    }
}

fn run(source: &str) -> Outcome {
    run_with(source, EvalOptions::default())
}

#[test]
fn arithmetic_and_concatenation() {
    let out = run(r#"var a = 1 + 2; var s = "a" + "b"; console.log(a, s, a + s);"#);
    assert_eq!(out.status, RunStatus::Completed);
    assert_eq!(out.stdout, "3 ab 3ab\n");
    assert_eq!(out.diagnostics, "");
}

#[test]
fn functions_double_their_argument() {
    let out = run("function f(x){ return x * 2; } var y = f(21); console.log(y);");
    assert_eq!(out.stdout, "42\n");
}

#[test]
fn console_methods_route_to_streams() {
    let out =
        run(r#"console.log(1,2,3); console.info("i"); console.error("e"); console.warn("w");"#);
    assert_eq!(out.status, RunStatus::Completed);
    assert_eq!(out.stdout, "1 2 3\ni\n");
    assert_eq!(out.stderr, "e\nw\n");
}

#[test]
fn unreached_statement_after_return() {
    let out = run(r#"function f() { return 1; console.log("unreached"); } console.log(f());"#);
    assert_eq!(out.stdout, "1\n");
}

#[test]
fn closures_use_defining_scope() {
    let out = run(
        r#"
        var who = "global";
        function name() { return who + ""; }
        function shadow() { var who = "local"; return name(); }
        console.log(shadow());
        "#,
    );
    assert_eq!(out.stdout, "global\n");
}

#[test]
fn duplicate_declaration_aborts_with_diagnostic() {
    let out = run("var a = 1;\nvar a = 2;\nconsole.log(a);");
    assert_eq!(out.status, RunStatus::Aborted);
    assert_eq!(out.stdout, "");
    assert!(out.diagnostics.contains("E6001"));
    assert!(out.diagnostics.contains("duplicate declaration of `a`"));
    assert!(out.diagnostics.contains("var a = 2;"));
}

#[test]
fn truthy_redeclaration_accepts_falsy_binding() {
    let eval = EvalOptions {
        redeclaration: RedeclarationCheck::Truthy,
        ..EvalOptions::default()
    };
    let out = run_with("var a = 0; var a = 1; console.log(a);", eval);
    assert_eq!(out.status, RunStatus::Completed);
    assert_eq!(out.stdout, "1\n");
}

#[test]
fn unsupported_syntax_names_the_node_kind() {
    let out = run("console.log(1);\nwhile (true) { }\nconsole.log(2);");
    assert_eq!(out.status, RunStatus::Aborted);
    assert_eq!(out.stdout, "1\n");
    assert!(out.diagnostics.contains("E6002"));
    assert!(out.diagnostics.contains("unsupported syntax: WhileStatement"));
}

#[test]
fn unsupported_operator_is_reported() {
    let out = run("var r = 5 % 2;");
    assert_eq!(out.status, RunStatus::Aborted);
    assert!(out.diagnostics.contains("E6003"));
    assert!(out.diagnostics.contains("unsupported operator: %"));
}

#[test]
fn runaway_recursion_is_reported() {
    let eval = EvalOptions {
        max_call_depth: 100,
        ..EvalOptions::default()
    };
    let out = run_with("function loop() { return loop(); } loop();", eval);
    assert_eq!(out.status, RunStatus::Aborted);
    assert!(out.diagnostics.contains("E6006"));
    assert!(out.diagnostics.contains("maximum call stack size exceeded"));
}

#[test]
fn colored_console_output() {
    let eval = EvalOptions {
        color: true,
        ..EvalOptions::default()
    };
    let out = run_with(r#"console.log("ok"); console.error("bad");"#, eval);
    assert_eq!(out.stdout, "\x1b[32mok\x1b[0m\n");
    assert_eq!(out.stderr, "\x1b[31mbad\x1b[0m\n");
}

#[test]
fn parse_errors_are_returned() {
    let emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    let mut runtime = Runtime::with_emitter(RunConfig::default(), emitter)
        .with_print_handler(buffer_handler());

    match runtime.run("function (") {
        Ok(status) => panic!("expected a parse error, got {status:?}"),
        Err(err) => assert!(err.code().is_syntax_error()),
    }
    assert!(runtime.into_emitter().into_inner().is_empty());
}

#[test]
fn top_level_run_rejects_bad_syntax() {
    assert!(arborc::run("var = ;").is_err());
    assert!(arborc::run(";").is_ok());
}
