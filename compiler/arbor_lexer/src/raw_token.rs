//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before
//! string cooking, interning and final token conversion.

use logos::{Filter, Lexer, Logos};

/// Raw token from logos (before interning).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub(crate) enum RawToken {
    // Closed block comments are skipped; an unclosed one runs to end of input.
    #[token("/*", scan_block_comment)]
    UnterminatedComment,

    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("function")]
    Function,
    #[token("return")]
    Return,
    #[token("this")]
    This,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("null")]
    Null,
    #[token("new")]
    New,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("do")]
    Do,
    #[token("switch")]
    Switch,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("throw")]
    Throw,
    #[token("class")]
    Class,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("typeof")]
    Typeof,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("?")]
    Question,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("===")]
    EqEqEq,
    #[token("!==")]
    NotEqEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("!")]
    Bang,

    // Hex integer
    #[regex(r"0[xX][0-9a-fA-F]+")]
    HexNumber,

    // Decimal, fraction and exponent forms: `1`, `1.5`, `.5`, `1.`, `2e10`
    #[regex(r"[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?")]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,

    // Exponent marker with no digits (`1e`, `2.5e+`)
    #[regex(r"[0-9]+(\.[0-9]*)?[eE][+-]?")]
    #[regex(r"0[xX]")]
    MalformedNumber,

    // String literals (no unescaped newlines allowed)
    #[token("\"", |lex| scan_string(lex, b'"'))]
    #[token("'", |lex| scan_string(lex, b'\''))]
    String(Quote),

    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Ident,
}

/// Whether a string literal reached its closing quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Quote {
    Closed,
    /// Stopped at a line break or end of input.
    Unclosed,
}

/// Consume a string body after its opening quote.
///
/// Scanned by hand rather than by regex so long literals do not deepen the
/// generated matcher.
fn scan_string(lex: &mut Lexer<'_, RawToken>, quote: u8) -> Quote {
    let rest = lex.remainder().as_bytes();
    let mut len = 0;
    while let Some(&byte) = rest.get(len) {
        match byte {
            b'\n' | b'\r' => break,
            b'\\' => {
                if matches!(rest.get(len + 1), None | Some(b'\n' | b'\r')) {
                    len += 1;
                    break;
                }
                len += 2;
            }
            _ if byte == quote => {
                lex.bump(len + 1);
                return Quote::Closed;
            }
            _ => len += 1,
        }
    }
    lex.bump(len);
    Quote::Unclosed
}

/// Skip a block comment after its `/*`, or emit it when `*/` never comes.
fn scan_block_comment(lex: &mut Lexer<'_, RawToken>) -> Filter<()> {
    match lex.remainder().find("*/") {
        Some(end) => {
            lex.bump(end + 2);
            Filter::Skip
        }
        None => {
            lex.bump(lex.remainder().len());
            Filter::Emit(())
        }
    }
}
