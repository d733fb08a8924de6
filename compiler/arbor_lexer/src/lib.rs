//! Lexer for Arbor using logos with string interning.
//!
//! Produces a [`TokenList`] terminated by a single `Eof` token. Whitespace
//! and comments never reach the parser. The first malformed token stops
//! lexing with a [`LexError`].

mod escape;
mod lex_error;
mod raw_token;

use logos::Logos;

use arbor_ir::{Span, StringInterner, Token, TokenKind, TokenList};

pub use lex_error::{LexError, LexErrorKind};
use raw_token::{Quote, RawToken};

/// Lex source code into a `TokenList`.
pub fn lex(source: &str, interner: &StringInterner) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = to_span(logos.span());
        let slice = logos.slice();

        let kind = match token_result {
            Ok(raw) => convert_token(raw, slice, span, interner)?,
            Err(()) => {
                let found = slice.chars().next().unwrap_or('\0');
                return Err(LexError::new(LexErrorKind::UnexpectedChar { found }, span));
            }
        };
        result.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    result.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    tracing::trace!(tokens = result.len(), "lexed source");
    Ok(result)
}

fn to_span(range: std::ops::Range<usize>) -> Span {
    Span::try_from_range(range).unwrap_or(Span::DUMMY)
}

/// Convert a raw token to a `TokenKind`, interning identifiers and cooking
/// string literals.
fn convert_token(
    raw: RawToken,
    slice: &str,
    span: Span,
    interner: &StringInterner,
) -> Result<TokenKind, LexError> {
    let kind = match raw {
        // Literals
        RawToken::Number => match slice.parse::<f64>() {
            Ok(n) => TokenKind::Number(n),
            Err(_) => return Err(invalid_number(slice, span)),
        },
        RawToken::HexNumber => match u64::from_str_radix(&slice[2..], 16) {
            #[expect(clippy::cast_precision_loss, reason = "JS numbers are f64")]
            Ok(n) => TokenKind::Number(n as f64),
            Err(_) => return Err(invalid_number(slice, span)),
        },
        RawToken::MalformedNumber => return Err(invalid_number(slice, span)),
        RawToken::String(Quote::Closed) => {
            let body = &slice[1..slice.len() - 1];
            TokenKind::String(escape::cook_string(body, span.start + 1)?)
        }
        RawToken::String(Quote::Unclosed) => {
            return Err(LexError::new(LexErrorKind::UnterminatedString, span));
        }
        RawToken::UnterminatedComment => {
            return Err(LexError::new(LexErrorKind::UnterminatedComment, span));
        }
        RawToken::Ident => TokenKind::Ident(interner.intern(slice)),

        // Keywords
        RawToken::Var => TokenKind::Var,
        RawToken::Let => TokenKind::Let,
        RawToken::Const => TokenKind::Const,
        RawToken::Function => TokenKind::Function,
        RawToken::Return => TokenKind::Return,
        RawToken::This => TokenKind::This,
        RawToken::True => TokenKind::True,
        RawToken::False => TokenKind::False,
        RawToken::Null => TokenKind::Null,
        RawToken::New => TokenKind::New,
        RawToken::If => TokenKind::If,
        RawToken::Else => TokenKind::Else,
        RawToken::While => TokenKind::While,
        RawToken::For => TokenKind::For,
        RawToken::Do => TokenKind::Do,
        RawToken::Switch => TokenKind::Switch,
        RawToken::Try => TokenKind::Try,
        RawToken::Catch => TokenKind::Catch,
        RawToken::Finally => TokenKind::Finally,
        RawToken::Throw => TokenKind::Throw,
        RawToken::Class => TokenKind::Class,
        RawToken::Break => TokenKind::Break,
        RawToken::Continue => TokenKind::Continue,
        RawToken::Typeof => TokenKind::Typeof,

        // Delimiters
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::Semicolon => TokenKind::Semicolon,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Question => TokenKind::Question,

        // Operators
        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Percent => TokenKind::Percent,
        RawToken::Eq => TokenKind::Eq,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::EqEqEq => TokenKind::EqEqEq,
        RawToken::NotEqEq => TokenKind::NotEqEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,
        RawToken::AmpAmp => TokenKind::AmpAmp,
        RawToken::PipePipe => TokenKind::PipePipe,
        RawToken::Bang => TokenKind::Bang,
    };
    Ok(kind)
}

#[cold]
fn invalid_number(slice: &str, span: Span) -> LexError {
    LexError::new(
        LexErrorKind::InvalidNumber {
            text: slice.to_string(),
        },
        span,
    )
}

#[cfg(test)]
mod tests;
