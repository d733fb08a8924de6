//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use crate::{render_snippet, Diagnostic, SourceText};

use super::{ColorMode, DiagnosticEmitter};

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Whether this emitter writes ANSI escapes.
    pub fn uses_colors(&self) -> bool {
        self.colors
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic, source: &SourceText<'_>) {
        let rendered = render_snippet(diagnostic, source, self.colors);
        let _ = self.writer.write_all(rendered.as_bytes());
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
