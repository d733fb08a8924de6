//! Print handler for configurable console output.
//!
//! Console builtins never write to the process streams directly; they go
//! through a [`PrintHandlerImpl`] so output can be directed elsewhere:
//! - `arbor run`: stdout and stderr (default)
//! - Tests: separate buffers for assertions
//! - Hosts that only want diagnostics: discarded
//!
//! Uses enum dispatch instead of trait objects, matching the small fixed
//! set of destinations.

use std::sync::Arc;

use parking_lot::Mutex;

/// Which process stream a console line is meant for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Stream {
    /// `console.log`, `console.info`.
    Out,
    /// `console.error`, `console.warn`.
    Err,
}

/// Default print handler that writes to the process streams.
#[derive(Default)]
pub struct StdioPrintHandler;

impl StdioPrintHandler {
    /// Print a line (with newline).
    pub fn println(&self, stream: Stream, msg: &str) {
        match stream {
            Stream::Out => println!("{msg}"),
            Stream::Err => eprintln!("{msg}"),
        }
    }
}

/// Print handler that captures each stream to its own buffer.
pub struct BufferPrintHandler {
    out: Mutex<String>,
    err: Mutex<String>,
}

impl BufferPrintHandler {
    /// Create a new buffer print handler.
    pub fn new() -> Self {
        BufferPrintHandler {
            out: Mutex::new(String::new()),
            err: Mutex::new(String::new()),
        }
    }

    fn buffer(&self, stream: Stream) -> &Mutex<String> {
        match stream {
            Stream::Out => &self.out,
            Stream::Err => &self.err,
        }
    }

    /// Print a line (with newline).
    pub fn println(&self, stream: Stream, msg: &str) {
        let mut buf = self.buffer(stream).lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Captured standard output.
    pub fn get_output(&self) -> String {
        self.out.lock().clone()
    }

    /// Captured standard error.
    pub fn get_errors(&self) -> String {
        self.err.lock().clone()
    }
}

impl Default for BufferPrintHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Print handler implementation using enum dispatch.
pub enum PrintHandlerImpl {
    /// Writes to stdout/stderr (default).
    Stdio(StdioPrintHandler),
    /// Captures to buffers (testing).
    Buffer(BufferPrintHandler),
    /// Discards all output silently.
    Silent,
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    pub fn println(&self, stream: Stream, msg: &str) {
        match self {
            Self::Stdio(h) => h.println(stream, msg),
            Self::Buffer(h) => h.println(stream, msg),
            Self::Silent => {}
        }
    }

    /// Captured standard output.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdio(_) | Self::Silent => String::new(),
        }
    }

    /// Captured standard error.
    ///
    /// Returns an empty string for handlers that don't capture.
    pub fn get_errors(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_errors(),
            Self::Stdio(_) | Self::Silent => String::new(),
        }
    }
}

/// Shared print handler that can be passed around.
pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

/// Create a print handler that writes to stdout and stderr.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdio(StdioPrintHandler))
}

/// Create a buffer print handler for capturing output.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(BufferPrintHandler::new()))
}

/// Create a silent print handler that discards all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Silent)
}
