//! Evaluation error to diagnostic conversion.
//!
//! Every [`EvalError`] maps to an E6xxx code:
//!
//! - E6001: duplicate declaration
//! - E6002: unsupported syntax
//! - E6003: unsupported operator
//! - E6004: not callable
//! - E6005: property read on `undefined`/`null`
//! - E6006: stack overflow
//! - E6099: anything else

use arbor_diagnostic::{Diagnostic, ErrorCode};

use crate::{EvalError, EvalErrorKind};

impl EvalError {
    /// Convert into a diagnostic with a primary label at the error span.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag =
            Diagnostic::error(error_code_for_kind(&self.kind)).with_message(self.to_string());

        if let Some(span) = self.span {
            diag = diag.with_label(span, label_for_kind(&self.kind));
        }

        for note in &self.notes {
            diag = diag.with_note(note);
        }

        if let Some(help) = help_for_kind(&self.kind) {
            diag = diag.with_note(help);
        }

        diag
    }
}

/// Map an error kind to its code.
pub fn error_code_for_kind(kind: &EvalErrorKind) -> ErrorCode {
    match kind {
        EvalErrorKind::DuplicateDeclaration { .. } => ErrorCode::E6001,
        EvalErrorKind::UnsupportedNode { .. } => ErrorCode::E6002,
        EvalErrorKind::UnsupportedOperator { .. } => ErrorCode::E6003,
        EvalErrorKind::NotCallable { .. } => ErrorCode::E6004,
        EvalErrorKind::InvalidPropertyAccess { .. } => ErrorCode::E6005,
        EvalErrorKind::StackOverflow { .. } => ErrorCode::E6006,
        EvalErrorKind::Custom { .. } => ErrorCode::E6099,
    }
}

fn label_for_kind(kind: &EvalErrorKind) -> String {
    match kind {
        EvalErrorKind::DuplicateDeclaration { name } => format!("`{name}` declared again here"),
        EvalErrorKind::UnsupportedNode { kind } => format!("{kind} cannot be evaluated"),
        EvalErrorKind::UnsupportedOperator { op } => format!("`{op}` used here"),
        EvalErrorKind::NotCallable { .. } => "called here".to_string(),
        EvalErrorKind::InvalidPropertyAccess { base, .. } => format!("this is {base}"),
        EvalErrorKind::StackOverflow { .. } => "call nested too deeply".to_string(),
        EvalErrorKind::Custom { .. } => "error occurred here".to_string(),
    }
}

fn help_for_kind(kind: &EvalErrorKind) -> Option<&'static str> {
    match kind {
        EvalErrorKind::UnsupportedOperator { .. } => {
            Some("help: only `+`, `-`, `*` and `/` can be evaluated")
        }
        EvalErrorKind::DuplicateDeclaration { .. } => {
            Some("help: a name can be declared once per scope")
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use arbor_ir::{BinaryOp, Span};

    use super::*;
    use crate::errors;

    #[test]
    fn codes_cover_every_kind() {
        let cases = [
            (errors::duplicate_declaration("a"), ErrorCode::E6001),
            (errors::unsupported_node("IfStatement"), ErrorCode::E6002),
            (errors::unsupported_operator(BinaryOp::Rem), ErrorCode::E6003),
            (errors::not_callable("f"), ErrorCode::E6004),
            (errors::invalid_property_access("null", "x"), ErrorCode::E6005),
            (errors::stack_overflow(1), ErrorCode::E6006),
            (EvalError::new("other"), ErrorCode::E6099),
        ];
        for (err, code) in cases {
            assert_eq!(err.to_diagnostic().code, code, "{err}");
        }
    }

    #[test]
    fn diagnostic_carries_message_span_and_notes() {
        let err = errors::duplicate_declaration("a").with_span(Span::new(15, 16));
        let diag = err.to_diagnostic();

        assert_eq!(diag.message, "duplicate declaration of `a`");
        assert_eq!(diag.primary_span(), Some(Span::new(15, 16)));
        assert_eq!(diag.labels[0].message, "`a` declared again here");
        assert_eq!(
            diag.notes,
            vec!["help: a name can be declared once per scope".to_string()]
        );
    }

    #[test]
    fn spanless_error_has_no_label() {
        let diag = errors::stack_overflow(5).to_diagnostic();
        assert!(diag.labels.is_empty());
        assert_eq!(diag.notes, vec!["calls may nest at most 5 deep".to_string()]);
    }
}
