use super::*;
use pretty_assertions::assert_eq;

fn cook(body: &str) -> String {
    match cook_string(body, 0) {
        Ok(s) => s,
        Err(e) => panic!("unexpected error: {e}"),
    }
}

#[test]
fn test_plain_body_is_unchanged() {
    assert_eq!(cook("hello world"), "hello world");
}

#[test]
fn test_common_escapes() {
    assert_eq!(cook(r"a\nb\tc"), "a\nb\tc");
    assert_eq!(cook(r#"say \"hi\""#), "say \"hi\"");
    assert_eq!(cook(r"it\'s"), "it's");
    assert_eq!(cook(r"back\\slash"), "back\\slash");
    assert_eq!(cook(r"nul\0"), "nul\0");
}

#[test]
fn test_unknown_escape_is_identity() {
    assert_eq!(cook(r"\q\d"), "qd");
}

#[test]
fn test_unicode_and_hex_escapes() {
    assert_eq!(cook(r"A\x42"), "AB");
    assert_eq!(cook(r"\u{1F600}"), "\u{1F600}");
}

#[test]
fn test_short_unicode_escape_is_an_error() {
    let Err(err) = cook_string(r"ab\u12", 10) else {
        panic!("expected an error");
    };
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidEscape {
            text: r"\u12".to_string()
        }
    );
    assert_eq!(err.span, Span::new(12, 16));
}

#[test]
fn test_unclosed_braced_escape_is_an_error() {
    assert!(cook_string(r"\u{41", 0).is_err());
}
