//! `InterpreterBuilder` for creating Interpreter instances with various configurations.

use arbor_ir::StringInterner;

use super::Interpreter;
use crate::builtins::console_object;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::{ScopeId, Scopes, Value};

/// Default bound on nested closure invocations.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 10_000;

/// How a declaration decides that its name is already taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RedeclarationCheck {
    /// Any existing local binding counts, whatever its value.
    #[default]
    Presence,
    /// Only a local binding holding a truthy value counts, so
    /// `var a = 0; var a = 1;` is accepted.
    Truthy,
}

/// Evaluation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalOptions {
    /// Maximum number of nested closure calls before `StackOverflow`.
    pub max_call_depth: usize,
    pub redeclaration: RedeclarationCheck,
    /// Wrap console output in ANSI colors.
    pub color: bool,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            redeclaration: RedeclarationCheck::default(),
            color: false,
        }
    }
}

/// Builder for creating Interpreter instances with various configurations.
pub struct InterpreterBuilder<'a> {
    interner: &'a StringInterner,
    print_handler: Option<SharedPrintHandler>,
    options: EvalOptions,
    seed_console: bool,
    globals: Vec<(String, Value<'a>)>,
}

impl<'a> InterpreterBuilder<'a> {
    /// Create a new builder with default options.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            print_handler: None,
            options: EvalOptions::default(),
            seed_console: true,
            globals: Vec::new(),
        }
    }

    /// Set where console output goes. Default is stdout/stderr.
    #[must_use]
    pub fn print_handler(mut self, handler: SharedPrintHandler) -> Self {
        self.print_handler = Some(handler);
        self
    }

    /// Replace all evaluation options.
    #[must_use]
    pub fn options(mut self, options: EvalOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn max_call_depth(mut self, depth: usize) -> Self {
        self.options.max_call_depth = depth;
        self
    }

    #[must_use]
    pub fn redeclaration(mut self, check: RedeclarationCheck) -> Self {
        self.options.redeclaration = check;
        self
    }

    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.options.color = color;
        self
    }

    /// Whether to bind `console` in the global scope (default: yes).
    #[must_use]
    pub fn seed_console(mut self, seed: bool) -> Self {
        self.seed_console = seed;
        self
    }

    /// Bind an extra global before the program runs.
    #[must_use]
    pub fn global(mut self, name: impl Into<String>, value: Value<'a>) -> Self {
        self.globals.push((name.into(), value));
        self
    }

    /// Build the interpreter.
    pub fn build(self) -> Interpreter<'a> {
        let mut scopes = Scopes::new();
        if self.seed_console {
            scopes.set(ScopeId::GLOBAL, self.interner.intern("console"), console_object());
        }
        for (name, value) in self.globals {
            scopes.set(ScopeId::GLOBAL, self.interner.intern(&name), value);
        }

        Interpreter {
            interner: self.interner,
            scopes,
            print_handler: self.print_handler.unwrap_or_else(stdout_handler),
            options: self.options,
            call_depth: 0,
            this_name: self.interner.intern("this"),
        }
    }
}
