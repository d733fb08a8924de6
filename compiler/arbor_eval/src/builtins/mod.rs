//! Host functions and objects seeded into the global scope.

mod console;

use arbor_ir::StringInterner;

use crate::print_handler::{PrintHandlerImpl, Stream};

pub use console::{console_error, console_info, console_log, console_object, console_warn};

/// What a host function can reach while it runs.
pub struct NativeCtx<'i> {
    pub interner: &'i StringInterner,
    pub print: &'i PrintHandlerImpl,
    /// Whether console output is wrapped in ANSI colors.
    pub color: bool,
}

impl NativeCtx<'_> {
    /// Write one line to `stream`, tinted when colors are on.
    pub fn print_line(&self, stream: Stream, tint: Tint, line: &str) {
        if self.color {
            self.print
                .println(stream, &format!("\x1b[{}m{line}\x1b[0m", tint.ansi_code()));
        } else {
            self.print.println(stream, line);
        }
    }
}

/// Console output colors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tint {
    Green,
    Red,
    Yellow,
}

impl Tint {
    fn ansi_code(self) -> u8 {
        match self {
            Tint::Red => 31,
            Tint::Green => 32,
            Tint::Yellow => 33,
        }
    }
}
