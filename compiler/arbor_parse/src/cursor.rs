//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.

use arbor_ir::{Span, Token, TokenKind, TokenList};

/// Cursor for navigating tokens.
///
/// Invariant: the list ends with `Eof` and the position never moves past it.
pub struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    pub fn new(tokens: &'a TokenList) -> Self {
        Cursor { tokens, pos: 0 }
    }

    /// Current position in the token stream.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the current token. Past the end this is a synthetic `Eof`.
    #[inline]
    pub fn current(&self) -> &'a Token {
        static EOF: Token = Token {
            kind: TokenKind::Eof,
            span: Span::DUMMY,
        };
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.get(self.tokens.len().saturating_sub(1)))
            .unwrap_or(&EOF)
    }

    #[inline]
    pub fn current_kind(&self) -> &'a TokenKind {
        &self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the most recently consumed token.
    #[inline]
    pub fn previous_span(&self) -> Span {
        match self.pos.checked_sub(1).and_then(|p| self.tokens.get(p)) {
            Some(token) => token.span,
            None => Span::DUMMY,
        }
    }

    /// Kind of the token after the current one (`Eof` at the end).
    pub fn peek_next_kind(&self) -> &'a TokenKind {
        match self.tokens.get(self.pos + 1) {
            Some(token) => &token.kind,
            None => self.current_kind(),
        }
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Check if the current token matches the given kind.
    ///
    /// Payload-carrying kinds compare by discriminant only.
    #[inline]
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(self.current_kind()) == std::mem::discriminant(kind)
    }

    /// Advance to the next token, returning the one consumed.
    pub fn advance(&mut self) -> &'a Token {
        let token = self.current();
        if !self.is_at_end() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }
}
