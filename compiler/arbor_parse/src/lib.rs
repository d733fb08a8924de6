//! Recursive descent parser for Arbor.
//!
//! Produces a tree of [`Node`]s rooted at a `Program`. Constructs outside
//! the evaluable subset are still recognised and become
//! `NodeKind::Unsupported` nodes so the evaluator can report them with a
//! span instead of failing the whole parse.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};

use arbor_ir::{Node, NodeKind, Span, StringInterner, Token, TokenKind, TokenList};

/// Parse source text into a `Program` node.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn parse(source: &str, interner: &StringInterner) -> Result<Node, ParseError> {
    let tokens = arbor_lexer::lex(source, interner)?;
    parse_tokens(&tokens, interner)
}

/// Parse an already lexed token stream into a `Program` node.
pub fn parse_tokens(tokens: &TokenList, interner: &StringInterner) -> Result<Node, ParseError> {
    Parser::new(tokens, interner).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    interner: &'a StringInterner,
    /// Number of function bodies enclosing the current position.
    function_depth: u32,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    pub fn new(tokens: &'a TokenList, interner: &'a StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            interner,
            function_depth: 0,
        }
    }

    /// Parse a whole program.
    pub fn parse_program(&mut self) -> Result<Node, ParseError> {
        let start = self.current_span();
        let mut body = Vec::new();
        while !self.is_at_end() {
            body.push(self.parse_statement()?);
        }
        let span = start.merge(self.current_span());
        tracing::debug!(statements = body.len(), "parsed program");
        Ok(Node::new(NodeKind::Program { body }, span))
    }

    // Cursor delegation

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: &TokenKind) -> bool {
        self.cursor.eat(kind)
    }

    /// Span from `start` to the end of the last consumed token.
    fn span_from(&self, start: Span) -> Span {
        start.merge(self.previous_span())
    }

    /// Consume `kind` or report what was found instead.
    fn expect(&mut self, kind: &TokenKind) -> Result<Span, ParseError> {
        if self.check(kind) {
            return Ok(self.advance().span);
        }
        Err(ParseError::new(
            ParseErrorKind::UnexpectedToken {
                expected: kind.display_name(),
                found: self.current_kind().display_name(),
            },
            self.current_span(),
        ))
    }

    /// Consume a closing delimiter opened at `open`.
    ///
    /// Running out of input is reported as an unclosed delimiter rather
    /// than an unexpected token.
    fn expect_closing(
        &mut self,
        close: &TokenKind,
        open_kind: &TokenKind,
        open: Span,
    ) -> Result<Span, ParseError> {
        if self.is_at_end() {
            return Err(ParseError::new(
                ParseErrorKind::UnclosedDelimiter {
                    delimiter: open_kind.display_name(),
                    open,
                },
                self.current_span(),
            ));
        }
        self.expect(close)
    }

    /// Consume an identifier, returning its interned name and span.
    fn expect_ident(&mut self) -> Result<arbor_ir::Ident, ParseError> {
        if let TokenKind::Ident(name) = *self.current_kind() {
            let span = self.advance().span;
            return Ok(arbor_ir::Ident { name, span });
        }
        Err(ParseError::new(
            ParseErrorKind::ExpectedIdentifier {
                found: self.current_kind().display_name(),
            },
            self.current_span(),
        ))
    }
}

#[cfg(test)]
mod tests;
