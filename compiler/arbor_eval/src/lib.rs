//! Arbor Eval - tree-walking evaluator.
//!
//! Evaluates a syntax tree produced by `arbor_parse` against an arena of
//! lexical scopes:
//! - `Value` for runtime values (closures borrow the tree)
//! - `Scopes`/`ScopeId` for the scope arena
//! - `Interpreter` for dispatch, calls and property access
//! - `PrintHandlerImpl` so console output can be captured
//! - `EvalError` with conversion to E6xxx diagnostics

mod builtins;
mod diagnostics;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod scope;
mod value;

pub use builtins::{
    console_error, console_info, console_log, console_object, console_warn, NativeCtx, Tint,
};
pub use diagnostics::error_code_for_kind;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{
    EvalOptions, Flow, Interpreter, InterpreterBuilder, RedeclarationCheck,
    DEFAULT_MAX_CALL_DEPTH,
};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdioPrintHandler, Stream,
};
pub use scope::{ScopeId, Scopes};
pub use value::{
    format_console_args, format_number, inspect, Closure, HostObject, NativeFn, NativeFunction,
    Value,
};
