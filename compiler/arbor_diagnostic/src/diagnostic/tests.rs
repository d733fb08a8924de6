use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("duplicate declaration: `a`")
        .with_label(Span::new(10, 11), "declared again here")
        .with_secondary_label(Span::new(4, 5), "first declared here")
        .with_note("each name can be declared once per scope");

    assert_eq!(diag.code, ErrorCode::E6001);
    assert!(diag.is_error());
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.primary_span(), Some(Span::new(10, 11)));
    assert_eq!(diag.notes, vec!["each name can be declared once per scope"]);
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E6003).with_message("unsupported operator: %");
    assert_eq!(diag.to_string(), "error[E6003]: unsupported operator: %");
}

#[test]
fn test_warning_keeps_code() {
    let diag = Diagnostic::warning(ErrorCode::E6099).with_message("careful");
    assert!(!diag.is_error());
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.primary_span(), None);
}
