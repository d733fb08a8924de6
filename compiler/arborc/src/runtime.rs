//! Running a program end to end.

use std::io::{self, IsTerminal, Write};

use arbor_diagnostic::{ColorMode, DiagnosticEmitter, SourceText, TerminalEmitter};
use arbor_eval::{stdout_handler, EvalOptions, InterpreterBuilder, SharedPrintHandler};
use arbor_ir::StringInterner;
use arbor_parse::ParseError;

/// Settings for one run.
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Name shown in diagnostics (usually the file path).
    pub source_name: String,
    pub color: ColorMode,
    pub eval: EvalOptions,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            source_name: "<input>".to_string(),
            color: ColorMode::Auto,
            eval: EvalOptions::default(),
        }
    }
}

/// How a run that got past parsing ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RunStatus {
    /// Every statement evaluated.
    Completed,
    /// An evaluation error was reported and the run stopped.
    Aborted,
}

/// A failure that stops a run before evaluation starts.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Parses and evaluates programs, reporting evaluation errors through a
/// diagnostic emitter.
pub struct Runtime<W: Write> {
    config: RunConfig,
    emitter: TerminalEmitter<W>,
    print_handler: SharedPrintHandler,
}

impl Runtime<io::Stderr> {
    /// Runtime reporting to stderr and printing console output to stdout.
    ///
    /// `ColorMode::Auto` colors diagnostics when stderr is a terminal and
    /// console output when stdout is.
    pub fn new(mut config: RunConfig) -> Self {
        let emitter = TerminalEmitter::stderr(config.color, io::stderr().is_terminal());
        config.eval.color = config.color.should_use_colors(io::stdout().is_terminal());
        Runtime::with_emitter(config, emitter)
    }
}

impl<W: Write> Runtime<W> {
    /// Runtime reporting through `emitter`. `config.eval.color` is used as is.
    pub fn with_emitter(config: RunConfig, emitter: TerminalEmitter<W>) -> Self {
        Runtime {
            config,
            emitter,
            print_handler: stdout_handler(),
        }
    }

    /// Send console output somewhere other than stdout/stderr.
    #[must_use]
    pub fn with_print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = handler;
        self
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn emitter(&self) -> &TerminalEmitter<W> {
        &self.emitter
    }

    pub fn into_emitter(self) -> TerminalEmitter<W> {
        self.emitter
    }

    /// Parse `source` and evaluate it against a fresh global scope.
    ///
    /// Parse errors are returned without being reported. An evaluation
    /// error is emitted once, with a source excerpt, and ends the run.
    #[tracing::instrument(level = "debug", skip_all, fields(source = %self.config.source_name))]
    pub fn run(&mut self, source: &str) -> Result<RunStatus, ParseError> {
        let interner = StringInterner::new();
        let program = arbor_parse::parse(source, &interner)?;

        let mut interpreter = InterpreterBuilder::new(&interner)
            .print_handler(self.print_handler.clone())
            .options(self.config.eval.clone())
            .build();

        match interpreter.eval_program(&program) {
            Ok(()) => Ok(RunStatus::Completed),
            Err(err) => {
                tracing::error!(error = %err, span = ?err.span, "evaluation aborted");
                let source = SourceText::new(&self.config.source_name, source);
                self.emitter.emit(&err.to_diagnostic(), &source);
                self.emitter.flush();
                Ok(RunStatus::Aborted)
            }
        }
    }

    /// Report a parse error returned by [`run`](Self::run).
    pub fn report_parse_error(&mut self, err: &ParseError, source: &str) {
        let source = SourceText::new(&self.config.source_name, source);
        self.emitter.emit(&err.to_diagnostic(), &source);
        self.emitter.flush();
    }
}

/// Run `source` with default settings: console output to stdout,
/// evaluation errors to stderr.
///
/// Fails only when `source` does not parse.
pub fn run(source: &str) -> Result<(), ParseError> {
    Runtime::new(RunConfig::default()).run(source).map(|_| ())
}
