use pretty_assertions::assert_eq;

use arbor_diagnostic::ColorMode;
use arbor_eval::{RedeclarationCheck, DEFAULT_MAX_CALL_DEPTH};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn defaults_without_flags() {
    let options = match parse_run_options(&args(&["main.js"])) {
        Ok(o) => o,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(options.input.as_deref(), Some("main.js"));
    assert_eq!(options.config.color, ColorMode::Auto);
    assert_eq!(options.config.eval.max_call_depth, DEFAULT_MAX_CALL_DEPTH);
    assert_eq!(options.config.eval.redeclaration, RedeclarationCheck::Presence);
}

#[test]
fn flags_in_any_position() {
    let options = match parse_run_options(&args(&[
        "--color=never",
        "main.js",
        "--max-call-depth=50",
        "--truthy-redeclaration",
    ])) {
        Ok(o) => o,
        Err(e) => panic!("{e}"),
    };
    assert_eq!(options.input.as_deref(), Some("main.js"));
    assert_eq!(options.config.color, ColorMode::Never);
    assert_eq!(options.config.eval.max_call_depth, 50);
    assert_eq!(options.config.eval.redeclaration, RedeclarationCheck::Truthy);
}

#[test]
fn bad_flags_are_rejected() {
    for bad in [
        &["--color=sometimes"][..],
        &["--max-call-depth=lots"],
        &["--verbose"],
        &["a.js", "b.js"],
    ] {
        assert!(parse_run_options(&args(bad)).is_err(), "{bad:?}");
    }
}

#[test]
fn missing_file_is_io_error() {
    match read_file("/definitely/not/here.js") {
        Err(RunError::Io { path, .. }) => assert_eq!(path, "/definitely/not/here.js"),
        other => panic!("expected an io error, got {other:?}"),
    }
}
