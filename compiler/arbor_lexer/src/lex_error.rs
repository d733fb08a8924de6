//! Lexer error types.

use arbor_diagnostic::{Diagnostic, ErrorCode};
use arbor_ir::Span;

/// A lexer error: what went wrong and where.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// What kind of lexer error occurred.
#[derive(Clone, Debug, Eq, PartialEq, Hash, thiserror::Error)]
pub enum LexErrorKind {
    /// A character that starts no token.
    #[error("unexpected character `{found}`")]
    UnexpectedChar { found: char },
    /// Missing closing quote for a string literal.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// `/*` without a matching `*/`.
    #[error("unterminated block comment")]
    UnterminatedComment,
    /// Malformed numeric literal (`1e`, `0x`, overflowing hex).
    #[error("invalid number literal `{text}`")]
    InvalidNumber { text: String },
    /// Malformed `\u` or `\x` escape.
    #[error("invalid escape sequence `{text}`")]
    InvalidEscape { text: String },
}

impl LexError {
    #[cold]
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        LexError { kind, span }
    }

    /// The error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self.kind {
            LexErrorKind::UnexpectedChar { .. } | LexErrorKind::UnterminatedComment => {
                ErrorCode::E0001
            }
            LexErrorKind::UnterminatedString => ErrorCode::E0002,
            LexErrorKind::InvalidNumber { .. } => ErrorCode::E0003,
            LexErrorKind::InvalidEscape { .. } => ErrorCode::E0004,
        }
    }

    /// Convert to a diagnostic for rendering.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnexpectedChar { .. } => "not valid here",
            LexErrorKind::UnterminatedString => "string starts here",
            LexErrorKind::UnterminatedComment => "comment starts here",
            LexErrorKind::InvalidNumber { .. } => "malformed number",
            LexErrorKind::InvalidEscape { .. } => "malformed escape",
        };
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span, label);
        match self.kind {
            LexErrorKind::UnterminatedString => {
                diag.with_note("string literals must close on the line they start")
            }
            _ => diag,
        }
    }
}

#[cfg(test)]
mod tests;
