//! Arbor driver.
//!
//! Ties the front-end and the evaluator together:
//! - [`run`] / [`Runtime::run`]: parse, evaluate, report
//! - [`commands`]: the CLI subcommands
//! - [`init_tracing`]: opt-in logging via `RUST_LOG`
//!
//! Parse errors are returned to the caller. Evaluation errors are reported
//! once through the runtime's diagnostic emitter and end the run.

pub mod commands;
mod runtime;
mod tracing_setup;

pub use runtime::{run, RunConfig, RunError, RunStatus, Runtime};
pub use tracing_setup::init_tracing;
