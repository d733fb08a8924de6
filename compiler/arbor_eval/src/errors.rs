//! Evaluation errors and their constructors.
//!
//! Every failure during evaluation is an [`EvalError`]: a structured kind,
//! the span of the innermost node being evaluated, and optional notes.
//! Construct errors through the free functions below rather than building
//! kinds by hand, so messages stay in one place.

use arbor_ir::{BinaryOp, Span};

/// Result of evaluating anything.
pub type EvalResult<T> = Result<T, EvalError>;

/// Structured error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A name was declared twice in the same scope.
    #[error("duplicate declaration of `{name}`")]
    DuplicateDeclaration { name: String },

    /// A syntax node with no evaluation rule.
    #[error("unsupported syntax: {kind}")]
    UnsupportedNode { kind: &'static str },

    /// A binary operator other than `+ - * /`.
    #[error("unsupported operator: {op}")]
    UnsupportedOperator { op: BinaryOp },

    /// Calling something that is not a function.
    #[error("{callee} is not a function")]
    NotCallable { callee: String },

    /// Reading a property of `undefined` or `null`.
    #[error("cannot read properties of {base} (reading '{property}')")]
    InvalidPropertyAccess { base: &'static str, property: String },

    /// Closure nesting exceeded the configured depth.
    #[error("maximum call stack size exceeded")]
    StackOverflow { limit: usize },

    /// Any other runtime failure.
    #[error("{message}")]
    Custom { message: String },
}

/// An evaluation error.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Innermost node being evaluated when the error was raised.
    pub span: Option<Span>,
    /// Additional context.
    pub notes: Vec<String>,
}

impl EvalError {
    /// Create a `Custom` error with just a message.
    ///
    /// Prefer the specific constructors when a structured kind exists.
    #[cold]
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_kind(EvalErrorKind::Custom {
            message: message.into(),
        })
    }

    fn from_kind(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            span: None,
            notes: Vec::new(),
        }
    }

    /// Attach a source span, replacing any existing one.
    #[must_use]
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach `span` only if no inner node already did.
    #[must_use]
    pub fn or_span(mut self, span: Span) -> Self {
        self.span.get_or_insert(span);
        self
    }

    /// Add a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Whether the error is a resource-limit failure rather than a program bug.
    pub fn is_resource_error(&self) -> bool {
        matches!(self.kind, EvalErrorKind::StackOverflow { .. })
    }
}

// Declaration errors

/// A name was declared twice in one scope.
#[cold]
pub fn duplicate_declaration(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::DuplicateDeclaration {
        name: name.to_string(),
    })
}

// Dispatch errors

/// A syntax node with no evaluation rule.
#[cold]
pub fn unsupported_node(kind: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedNode { kind })
}

/// A binary operator without an evaluation rule.
#[cold]
pub fn unsupported_operator(op: BinaryOp) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedOperator { op })
}

// Call and access errors

/// Calling a value that is not callable.
#[cold]
pub fn not_callable(callee: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        callee: callee.into(),
    })
}

/// Reading `property` from `undefined` or `null`.
#[cold]
pub fn invalid_property_access(base: &'static str, property: impl Into<String>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::InvalidPropertyAccess {
        base,
        property: property.into(),
    })
}

/// Closure nesting exceeded `limit`.
#[cold]
pub fn stack_overflow(limit: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::StackOverflow { limit })
        .with_note(format!("calls may nest at most {limit} deep"))
}
