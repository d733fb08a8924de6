//! Diagnostic system for error reporting.
//!
//! Every phase reports failures as a [`Diagnostic`]:
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Primary span (where it went wrong)
//! - Notes (extra context)
//!
//! Rendering against the original source text lives in [`emitter`]; the
//! excerpt itself is drawn by [`render_snippet`].

mod diagnostic;
pub mod emitter;
mod error_code;
mod snippet;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
pub use error_code::ErrorCode;
pub use snippet::{render_snippet, SourceText};
