//! Parse error types.
//!
//! Structured errors with a "while parsing X" context, converted to
//! diagnostics at the reporting boundary.

use arbor_diagnostic::{Diagnostic, ErrorCode};
use arbor_ir::Span;
use arbor_lexer::LexError;

/// What was being parsed when an error occurred.
///
/// Used for messages like "while parsing a function declaration".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    VariableDeclaration,
    FunctionDeclaration,
    FunctionParams,
    Block,
    CallArguments,
    ArrayLiteral,
    Parenthesized,
    MemberAccess,
    /// Skipping over syntax that has no evaluation rule.
    UnsupportedSyntax,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::VariableDeclaration => "a variable declaration",
            Self::FunctionDeclaration => "a function declaration",
            Self::FunctionParams => "function parameters",
            Self::Block => "a block",
            Self::CallArguments => "call arguments",
            Self::ArrayLiteral => "an array literal",
            Self::Parenthesized => "a parenthesized expression",
            Self::MemberAccess => "a member access",
            Self::UnsupportedSyntax => "an unsupported construct",
        }
    }
}

/// Structured parse error kinds.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Expected a specific token, found something else.
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: &'static str,
    },

    /// Expected an expression but found something else.
    #[error("expected an expression, found {found}")]
    ExpectedExpression { found: &'static str },

    /// End of input reached before a closing delimiter.
    #[error("unclosed delimiter {delimiter}")]
    UnclosedDelimiter {
        delimiter: &'static str,
        open: Span,
    },

    /// Expected an identifier.
    #[error("expected an identifier, found {found}")]
    ExpectedIdentifier { found: &'static str },

    /// `return` outside of any function body.
    #[error("`return` outside of a function")]
    ReturnOutsideFunction,

    /// The source did not tokenize.
    #[error(transparent)]
    Lex(LexError),
}

/// A parse error: kind, location and the construct being parsed.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    pub context: Option<ErrorContext>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    /// Attach a context unless an inner one is already set.
    #[must_use]
    pub fn in_context(mut self, context: ErrorContext) -> Self {
        self.context.get_or_insert(context);
        self
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match &self.kind {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpectedExpression { .. } => ErrorCode::E1002,
            ParseErrorKind::UnclosedDelimiter { .. } => ErrorCode::E1003,
            ParseErrorKind::ExpectedIdentifier { .. } => ErrorCode::E1004,
            ParseErrorKind::ReturnOutsideFunction => ErrorCode::E1005,
            ParseErrorKind::Lex(err) => err.code(),
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        if let ParseErrorKind::Lex(err) = &self.kind {
            return err.to_diagnostic();
        }

        let mut diag = Diagnostic::error(self.code()).with_message(self.to_string());
        diag = match &self.kind {
            ParseErrorKind::UnclosedDelimiter { delimiter, open } => diag
                .with_label(self.span, "input ends here")
                .with_secondary_label(*open, format!("{delimiter} opened here")),
            ParseErrorKind::ReturnOutsideFunction => diag
                .with_label(self.span, "not inside a function body")
                .with_note("`return` is only valid inside a function declaration"),
            _ => diag.with_label(self.span, "unexpected here"),
        };
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {}", context.description()));
        }
        diag
    }
}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        let span = err.span;
        ParseError::new(ParseErrorKind::Lex(err), span)
    }
}
