//! Diagnostic Emitters
//!
//! Emitters decide where rendered diagnostics go. The terminal emitter
//! writes source excerpts to any `io::Write`, which keeps reporting
//! testable against an in-memory buffer.

mod terminal;

pub use terminal::TerminalEmitter;

use crate::{Diagnostic, SourceText};

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic against the source it refers to.
    fn emit(&mut self, diagnostic: &Diagnostic, source: &SourceText<'_>);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic], source: &SourceText<'_>) {
        for diag in diagnostics {
            self.emit(diag, source);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Color output mode for emitters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean.
    ///
    /// `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse a `--color` flag value.
    pub fn from_flag(value: &str) -> Option<ColorMode> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}
