use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    match lex(source, &interner) {
        Ok(tokens) => tokens.iter().map(|t| t.kind.clone()).collect(),
        Err(e) => panic!("lex failed: {e}"),
    }
}

fn lex_err(source: &str) -> LexError {
    let interner = StringInterner::new();
    match lex(source, &interner) {
        Ok(tokens) => panic!("expected an error, got {tokens:?}"),
        Err(e) => e,
    }
}

#[test]
fn test_declaration() {
    let interner = StringInterner::new();
    let a = interner.intern("a");
    let tokens = match lex("var a = 1;", &interner) {
        Ok(t) => t,
        Err(e) => panic!("{e}"),
    };
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind.clone()).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Var,
            TokenKind::Ident(a),
            TokenKind::Eq,
            TokenKind::Number(1.0),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_spans() {
    let interner = StringInterner::new();
    let Ok(tokens) = lex("f(12)", &interner) else {
        panic!("lex failed");
    };
    let spans: Vec<_> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 1),
            Span::new(1, 2),
            Span::new(2, 4),
            Span::new(4, 5),
            Span::point(5),
        ]
    );
}

#[test]
fn test_keywords_beat_identifiers() {
    assert_eq!(kinds("return")[0], TokenKind::Return);
    assert!(matches!(kinds("returned")[0], TokenKind::Ident(_)));
    assert!(matches!(kinds("$el")[0], TokenKind::Ident(_)));
}

#[test]
fn test_numbers() {
    assert_eq!(kinds("3.25")[0], TokenKind::Number(3.25));
    assert_eq!(kinds(".5")[0], TokenKind::Number(0.5));
    assert_eq!(kinds("2e3")[0], TokenKind::Number(2000.0));
    assert_eq!(kinds("1E-2")[0], TokenKind::Number(0.01));
    assert_eq!(kinds("0xff")[0], TokenKind::Number(255.0));
}

#[test]
fn test_strings_both_quotes() {
    assert_eq!(kinds("'a'")[0], TokenKind::String("a".to_string()));
    assert_eq!(kinds(r#""b\n""#)[0], TokenKind::String("b\n".to_string()));
    assert_eq!(
        kinds(r#"'say "hi"'"#)[0],
        TokenKind::String("say \"hi\"".to_string())
    );
}

#[test]
fn test_operators_longest_match() {
    assert_eq!(
        kinds("=== !== == != = ** *"),
        vec![
            TokenKind::EqEqEq,
            TokenKind::NotEqEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Eq,
            TokenKind::StarStar,
            TokenKind::Star,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_comments_are_skipped() {
    assert_eq!(
        kinds("1 // one\n/* two\n lines */ 2"),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
    );
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \n\t"), vec![TokenKind::Eof]);
}

#[test]
fn test_unexpected_character() {
    let err = lex_err("var a = #;");
    assert_eq!(err.kind, LexErrorKind::UnexpectedChar { found: '#' });
    assert_eq!(err.span, Span::new(8, 9));
}

#[test]
fn test_unterminated_string() {
    let err = lex_err("var s = 'abc\n;");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(8, 12));
}

#[test]
fn test_unterminated_comment() {
    assert_eq!(lex_err("1 /* never closed").kind, LexErrorKind::UnterminatedComment);
}

#[test]
fn test_unterminated_string_at_end_of_input() {
    let err = lex_err("var s = \"abc\\");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span, Span::new(8, 13));
}

#[test]
fn test_escaped_quotes_stay_inside_string() {
    assert_eq!(
        kinds(r#"'it\'s' "say \"hi\"" "a'b""#),
        vec![
            TokenKind::String("it's".to_string()),
            TokenKind::String("say \"hi\"".to_string()),
            TokenKind::String("a'b".to_string()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_long_string_literal() {
    let body = "x".repeat(200_000);
    assert_eq!(
        kinds(&format!("\"{body}\";")),
        vec![TokenKind::String(body), TokenKind::Semicolon, TokenKind::Eof]
    );
}

#[test]
fn test_long_block_comment() {
    let source = format!("1 /* {} */ 2", "* /".repeat(50_000));
    assert_eq!(
        kinds(&source),
        vec![TokenKind::Number(1.0), TokenKind::Number(2.0), TokenKind::Eof]
    );
}

#[test]
fn test_division_is_not_a_comment() {
    assert_eq!(
        kinds("6 / 2"),
        vec![
            TokenKind::Number(6.0),
            TokenKind::Slash,
            TokenKind::Number(2.0),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_invalid_numbers() {
    assert_eq!(
        lex_err("1e").kind,
        LexErrorKind::InvalidNumber {
            text: "1e".to_string()
        }
    );
    assert_eq!(
        lex_err("0x").kind,
        LexErrorKind::InvalidNumber {
            text: "0x".to_string()
        }
    );
}

#[test]
fn test_invalid_escape_points_into_literal() {
    let err = lex_err(r#"x = "\u00""#);
    assert_eq!(
        err.kind,
        LexErrorKind::InvalidEscape {
            text: r"\u00".to_string()
        }
    );
    assert_eq!(err.span, Span::new(5, 9));
}
