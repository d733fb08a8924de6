//! The `run` and `eval` commands.

use std::process::ExitCode;

use super::{failure, read_or_report};
use crate::{RunConfig, RunStatus, Runtime};

/// Run a source file.
pub fn run_file(path: &str, mut config: RunConfig) -> ExitCode {
    let Some(source) = read_or_report(path) else {
        return ExitCode::FAILURE;
    };
    config.source_name = path.to_string();
    failure(run_source(&source, config))
}

/// Run source text given on the command line.
pub fn eval_source(source: &str, mut config: RunConfig) -> ExitCode {
    config.source_name = "<eval>".to_string();
    failure(run_source(source, config))
}

/// Returns whether the program parsed and ran to completion.
fn run_source(source: &str, config: RunConfig) -> bool {
    let mut runtime = Runtime::new(config);
    match runtime.run(source) {
        Ok(RunStatus::Completed) => true,
        Ok(RunStatus::Aborted) => false,
        Err(err) => {
            tracing::debug!(error = %err, "parse failed");
            runtime.report_parse_error(&err, source);
            false
        }
    }
}
