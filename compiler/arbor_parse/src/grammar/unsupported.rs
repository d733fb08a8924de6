//! Skipping over constructs that have no evaluation rule.
//!
//! These are recognised just well enough to find where they end, so that
//! they become a single `Unsupported` node and parsing resumes after them.

use arbor_ir::{Node, NodeKind, Span, TokenKind};

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Skip a statement introduced by a keyword such as `if` or `while`.
    ///
    /// The statement ends at a `;` or at the `}` closing its last body,
    /// both at nesting depth zero, unless the next token continues it
    /// (`else`, `catch`, `finally`, or the `while` of a `do`/`while`).
    /// A `}` that closes an enclosing block is left in place.
    pub(crate) fn skip_statement(&mut self, kind: &'static str) -> Result<Node, ParseError> {
        let start = self.current_span();
        let mut open: Vec<(TokenKind, Span)> = Vec::new();

        loop {
            let token = self.current();
            match &token.kind {
                TokenKind::Eof => {
                    return match open.pop() {
                        Some((open_kind, open_span)) => Err(self.unclosed(&open_kind, open_span)),
                        None => Ok(self.unsupported_node(kind, start)),
                    };
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    open.push((token.kind.clone(), token.span));
                    self.advance();
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if open.pop().is_none() {
                        // Belongs to an enclosing block.
                        return Ok(self.unsupported_node(kind, start));
                    }
                    self.advance();
                    if open.is_empty()
                        && matches!(token.kind, TokenKind::RBrace)
                        && !self.continues_statement(kind)
                    {
                        self.eat(&TokenKind::Semicolon);
                        return Ok(self.unsupported_node(kind, start));
                    }
                }
                TokenKind::Semicolon if open.is_empty() => {
                    self.advance();
                    if !self.continues_statement(kind) {
                        return Ok(self.unsupported_node(kind, start));
                    }
                }
                _ => {
                    self.advance();
                }
            }
        }
    }

    /// `{ ... }` in expression position: skipped as an object literal.
    pub(crate) fn skip_object_literal(&mut self) -> Result<Node, ParseError> {
        let start = self.current_span();
        let mut depth = 0usize;
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::LBrace | TokenKind::LParen | TokenKind::LBracket => depth += 1,
                TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Ok(self.unsupported_node("ObjectExpression", start));
                    }
                }
                TokenKind::Eof => {
                    return Err(self
                        .unclosed(&TokenKind::LBrace, start)
                        .in_context(ErrorContext::UnsupportedSyntax));
                }
                _ => {}
            }
        }
    }

    /// Whether the current token continues the compound statement `kind`.
    fn continues_statement(&self, kind: &str) -> bool {
        match self.current_kind() {
            TokenKind::Else | TokenKind::Catch | TokenKind::Finally => true,
            TokenKind::While => kind == "DoWhileStatement",
            _ => false,
        }
    }

    fn unsupported_node(&self, kind: &'static str, start: Span) -> Node {
        tracing::debug!(kind, "skipped unsupported construct");
        Node::new(NodeKind::Unsupported { kind }, self.span_from(start))
    }

    #[cold]
    fn unclosed(&self, open_kind: &TokenKind, open: Span) -> ParseError {
        ParseError::new(
            ParseErrorKind::UnclosedDelimiter {
                delimiter: open_kind.display_name(),
                open,
            },
            self.current_span(),
        )
        .in_context(ErrorContext::UnsupportedSyntax)
    }
}
