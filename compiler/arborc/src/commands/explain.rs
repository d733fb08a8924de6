//! The `explain` command: describe a diagnostic code.

use std::process::ExitCode;

use arbor_diagnostic::ErrorCode;

/// Print the description of an error code such as `E6001`.
pub fn explain_error(code: &str) -> ExitCode {
    let Some(code) = ErrorCode::from_code(code) else {
        eprintln!("Unknown error code: {code}");
        eprintln!();
        eprintln!("Codes have the format EXXXX where X is a digit.");
        eprintln!("Examples: E0001, E1001, E6001");
        return ExitCode::FAILURE;
    };

    let phase = if code.is_syntax_error() {
        "syntax"
    } else {
        "evaluation"
    };
    println!("{code}: {} ({phase} error)", code.description());
    ExitCode::SUCCESS
}
