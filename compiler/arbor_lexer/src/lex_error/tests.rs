use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_messages() {
    let err = LexError::new(LexErrorKind::UnexpectedChar { found: '#' }, Span::new(0, 1));
    assert_eq!(err.to_string(), "unexpected character `#`");

    let err = LexError::new(
        LexErrorKind::InvalidNumber {
            text: "1e".to_string(),
        },
        Span::new(0, 2),
    );
    assert_eq!(err.to_string(), "invalid number literal `1e`");
}

#[test]
fn test_codes() {
    let span = Span::new(0, 1);
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedString, span).code(),
        ErrorCode::E0002
    );
    assert_eq!(
        LexError::new(LexErrorKind::UnterminatedComment, span).code(),
        ErrorCode::E0001
    );
    assert_eq!(
        LexError::new(
            LexErrorKind::InvalidEscape {
                text: "\\u12".to_string()
            },
            span
        )
        .code(),
        ErrorCode::E0004
    );
}

#[test]
fn test_to_diagnostic() {
    let err = LexError::new(LexErrorKind::UnterminatedString, Span::new(8, 12));
    let diag = err.to_diagnostic();
    assert_eq!(diag.code, ErrorCode::E0002);
    assert_eq!(diag.message, "unterminated string literal");
    assert_eq!(diag.primary_span(), Some(Span::new(8, 12)));
    assert_eq!(diag.notes.len(), 1);
}
