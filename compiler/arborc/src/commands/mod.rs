//! Command handlers for the `arbor` CLI.
//!
//! Each submodule implements one subcommand. Shared helpers (reading
//! files, option parsing, parse-error reporting) live here.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use arbor_diagnostic::{ColorMode, DiagnosticEmitter, Diagnostic, SourceText, TerminalEmitter};
use arbor_eval::RedeclarationCheck;

use crate::{RunConfig, RunError};

mod debug;
mod explain;
mod run;

pub use debug::{lex_file, parse_file};
pub use explain::explain_error;
pub use run::{eval_source, run_file};

/// Options shared by `run` and `eval`.
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// The first non-flag argument (file path or source text).
    pub input: Option<String>,
    pub config: RunConfig,
}

/// Parse `run`/`eval` arguments.
///
/// Accepts `--color=auto|always|never`, `--max-call-depth=<n>` and
/// `--truthy-redeclaration` anywhere; the first other argument is the input.
pub fn parse_run_options(args: &[String]) -> Result<RunOptions, String> {
    let mut options = RunOptions::default();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--color=") {
            options.config.color = ColorMode::from_flag(value).ok_or_else(|| {
                format!("invalid color mode '{value}' (expected auto, always or never)")
            })?;
        } else if let Some(value) = arg.strip_prefix("--max-call-depth=") {
            options.config.eval.max_call_depth = value
                .parse()
                .map_err(|_| format!("invalid call depth '{value}'"))?;
        } else if arg == "--truthy-redeclaration" {
            options.config.eval.redeclaration = RedeclarationCheck::Truthy;
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{arg}'"));
        } else if options.input.is_none() {
            options.input = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument '{arg}'"));
        }
    }

    Ok(options)
}

/// Read a source file.
pub fn read_file(path: &str) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|source| RunError::Io {
        path: path.to_string(),
        source,
    })
}

/// Read `path`, printing a friendly error on failure.
fn read_or_report(path: &str) -> Option<String> {
    match read_file(path) {
        Ok(content) => Some(content),
        Err(RunError::Io { source, .. }) => {
            let msg = match source.kind() {
                io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
                io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
                _ => format!("cannot read '{path}': {source}"),
            };
            eprintln!("error: {msg}");
            None
        }
        Err(err) => {
            eprintln!("error: {err}");
            None
        }
    }
}

/// Emit a single front-end diagnostic to stderr.
fn report_to_stderr(diagnostic: &Diagnostic, name: &str, source: &str, color: ColorMode) {
    let mut emitter = TerminalEmitter::stderr(color, io::stderr().is_terminal());
    emitter.emit(diagnostic, &SourceText::new(name, source));
    emitter.flush();
}

fn failure(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests;
