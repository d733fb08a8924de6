//! Expression parsing.
//!
//! Precedence, loosest first: assignment, `?:`, `||`, `&&`, equality,
//! relational, additive, multiplicative, `**` (right-associative),
//! prefix unary, then member access and calls.

use arbor_ir::{BinaryOp, Node, NodeKind, TokenKind};
use arbor_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse a full expression.
    pub(crate) fn parse_expression(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    fn parse_assignment(&mut self) -> Result<Node, ParseError> {
        let left = self.parse_conditional()?;
        if self.eat(&TokenKind::Eq) {
            let right = self.parse_expression()?;
            return Ok(unsupported("AssignmentExpression", &left, &right));
        }
        Ok(left)
    }

    /// `test ? consequent : alternate`
    fn parse_conditional(&mut self) -> Result<Node, ParseError> {
        let test = self.parse_logical_or()?;
        if !self.eat(&TokenKind::Question) {
            return Ok(test);
        }
        self.parse_expression()?;
        self.expect(&TokenKind::Colon)?;
        let alternate = self.parse_expression()?;
        Ok(unsupported("ConditionalExpression", &test, &alternate))
    }

    fn parse_logical_or(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_logical_and()?;
        while self.eat(&TokenKind::PipePipe) {
            let right = self.parse_logical_and()?;
            left = unsupported("LogicalExpression", &left, &right);
        }
        Ok(left)
    }

    fn parse_logical_and(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_equality()?;
        while self.eat(&TokenKind::AmpAmp) {
            let right = self.parse_equality()?;
            left = unsupported("LogicalExpression", &left, &right);
        }
        Ok(left)
    }

    fn parse_equality(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_relational()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::EqEq => BinaryOp::Eq,
                TokenKind::NotEq => BinaryOp::NotEq,
                TokenKind::EqEqEq => BinaryOp::StrictEq,
                TokenKind::NotEqEq => BinaryOp::StrictNotEq,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_relational()?;
            left = binary(op, left, right);
        }
    }

    fn parse_relational(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_additive()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Lt => BinaryOp::Lt,
                TokenKind::LtEq => BinaryOp::LtEq,
                TokenKind::Gt => BinaryOp::Gt,
                TokenKind::GtEq => BinaryOp::GtEq,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_additive()?;
            left = binary(op, left, right);
        }
    }

    fn parse_additive(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_multiplicative()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_multiplicative()?;
            left = binary(op, left, right);
        }
    }

    fn parse_multiplicative(&mut self) -> Result<Node, ParseError> {
        let mut left = self.parse_exponent()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Rem,
                _ => return Ok(left),
            };
            self.advance();
            let right = self.parse_exponent()?;
            left = binary(op, left, right);
        }
    }

    fn parse_exponent(&mut self) -> Result<Node, ParseError> {
        let base = self.parse_unary()?;
        if self.eat(&TokenKind::StarStar) {
            let exponent = ensure_sufficient_stack(|| self.parse_exponent())?;
            return Ok(binary(BinaryOp::Exp, base, exponent));
        }
        Ok(base)
    }

    fn parse_unary(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            TokenKind::Bang | TokenKind::Minus | TokenKind::Plus | TokenKind::Typeof => {
                let start = self.advance().span;
                let operand = ensure_sufficient_stack(|| self.parse_unary())?;
                Ok(Node::new(
                    NodeKind::Unsupported {
                        kind: "UnaryExpression",
                    },
                    start.merge(operand.span),
                ))
            }
            _ => self.parse_postfix(),
        }
    }

    /// Member access and calls: `a.b`, `a[b]`, `a(b)`.
    fn parse_postfix(&mut self) -> Result<Node, ParseError> {
        let mut expr = self.parse_primary()?;
        loop {
            match self.current_kind() {
                TokenKind::Dot => {
                    self.advance();
                    let property = self
                        .parse_property_name()
                        .map_err(|e| e.in_context(ErrorContext::MemberAccess))?;
                    let span = expr.span.merge(property.span);
                    expr = Node::new(
                        NodeKind::MemberExpression {
                            object: Box::new(expr),
                            property: Box::new(property),
                            computed: false,
                        },
                        span,
                    );
                }
                TokenKind::LBracket => {
                    let open = self.advance().span;
                    let property = self
                        .parse_expression()
                        .map_err(|e| e.in_context(ErrorContext::MemberAccess))?;
                    self.expect_closing(&TokenKind::RBracket, &TokenKind::LBracket, open)
                        .map_err(|e| e.in_context(ErrorContext::MemberAccess))?;
                    let span = self.span_from(expr.span);
                    expr = Node::new(
                        NodeKind::MemberExpression {
                            object: Box::new(expr),
                            property: Box::new(property),
                            computed: true,
                        },
                        span,
                    );
                }
                TokenKind::LParen => {
                    let arguments = self
                        .parse_arguments()
                        .map_err(|e| e.in_context(ErrorContext::CallArguments))?;
                    let span = self.span_from(expr.span);
                    expr = Node::new(
                        NodeKind::CallExpression {
                            callee: Box::new(expr),
                            arguments,
                        },
                        span,
                    );
                }
                _ => return Ok(expr),
            }
        }
    }

    /// The name after `.`; keywords are allowed (`a.new`, `a.return`).
    fn parse_property_name(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        let name = match &token.kind {
            TokenKind::Ident(name) => *name,
            kind => match keyword_text(kind) {
                Some(text) => self.interner.intern(text),
                None => {
                    return Err(ParseError::new(
                        ParseErrorKind::ExpectedIdentifier {
                            found: kind.display_name(),
                        },
                        token.span,
                    ));
                }
            },
        };
        self.advance();
        Ok(Node::new(NodeKind::Identifier { name }, token.span))
    }

    /// `( expr, expr, ... )` with an optional trailing comma.
    fn parse_arguments(&mut self) -> Result<Vec<Node>, ParseError> {
        let open = self.expect(&TokenKind::LParen)?;
        let arguments = self.parse_comma_list(&TokenKind::RParen)?;
        self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, open)?;
        Ok(arguments)
    }

    /// Expressions separated by commas, stopping before `close`.
    fn parse_comma_list(&mut self, close: &TokenKind) -> Result<Vec<Node>, ParseError> {
        let mut items = Vec::new();
        while !self.check(close) && !self.is_at_end() {
            items.push(self.parse_expression()?);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        Ok(items)
    }

    fn parse_primary(&mut self) -> Result<Node, ParseError> {
        let token = self.current();
        let kind = match &token.kind {
            TokenKind::Number(value) => NodeKind::NumericLiteral { value: *value },
            TokenKind::String(value) => NodeKind::StringLiteral {
                value: value.clone(),
            },
            TokenKind::Ident(name) => NodeKind::Identifier { name: *name },
            TokenKind::True => NodeKind::BooleanLiteral { value: true },
            TokenKind::False => NodeKind::BooleanLiteral { value: false },
            TokenKind::Null => NodeKind::NullLiteral,
            TokenKind::This => NodeKind::ThisExpression,
            TokenKind::LParen => return self.parse_parenthesized(),
            TokenKind::LBracket => return self.parse_array(),
            TokenKind::LBrace => return self.skip_object_literal(),
            TokenKind::Function => return self.parse_function_expression(),
            TokenKind::New => return self.parse_new(),
            other => {
                return Err(ParseError::new(
                    ParseErrorKind::ExpectedExpression {
                        found: other.display_name(),
                    },
                    token.span,
                ));
            }
        };
        self.advance();
        Ok(Node::new(kind, token.span))
    }

    /// `( expr )` yields the inner expression.
    fn parse_parenthesized(&mut self) -> Result<Node, ParseError> {
        let open = self.advance().span;
        let inner = self
            .parse_expression()
            .map_err(|e| e.in_context(ErrorContext::Parenthesized))?;
        self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, open)
            .map_err(|e| e.in_context(ErrorContext::Parenthesized))?;
        Ok(inner)
    }

    /// `[a, b, c]`
    fn parse_array(&mut self) -> Result<Node, ParseError> {
        let open = self.advance().span;
        let elements = self
            .parse_comma_list(&TokenKind::RBracket)
            .map_err(|e| e.in_context(ErrorContext::ArrayLiteral))?;
        self.expect_closing(&TokenKind::RBracket, &TokenKind::LBracket, open)
            .map_err(|e| e.in_context(ErrorContext::ArrayLiteral))?;
        Ok(Node::new(
            NodeKind::ArrayExpression { elements },
            self.span_from(open),
        ))
    }

    /// `function [name](params) { body }` in expression position.
    fn parse_function_expression(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        if matches!(self.current_kind(), TokenKind::Ident(_)) {
            self.advance();
        }
        self.parse_params_and_body()?;
        Ok(Node::new(
            NodeKind::Unsupported {
                kind: "FunctionExpression",
            },
            self.span_from(start),
        ))
    }

    /// `new Callee(args)`
    fn parse_new(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        ensure_sufficient_stack(|| self.parse_primary())?;
        while self.eat(&TokenKind::Dot) {
            self.parse_property_name()?;
        }
        if self.check(&TokenKind::LParen) {
            self.parse_arguments()?;
        }
        Ok(Node::new(
            NodeKind::Unsupported {
                kind: "NewExpression",
            },
            self.span_from(start),
        ))
    }
}

fn binary(operator: BinaryOp, left: Node, right: Node) -> Node {
    let span = left.span.merge(right.span);
    Node::new(
        NodeKind::BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    )
}

/// An expression the evaluator has no rule for, spanning both operands.
fn unsupported(kind: &'static str, left: &Node, right: &Node) -> Node {
    Node::new(NodeKind::Unsupported { kind }, left.span.merge(right.span))
}

/// Source text of a keyword token, for use as a property name.
fn keyword_text(kind: &TokenKind) -> Option<&'static str> {
    match kind {
        TokenKind::Var
        | TokenKind::Let
        | TokenKind::Const
        | TokenKind::Function
        | TokenKind::Return
        | TokenKind::This
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Null
        | TokenKind::New
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::While
        | TokenKind::For
        | TokenKind::Do
        | TokenKind::Switch
        | TokenKind::Try
        | TokenKind::Catch
        | TokenKind::Finally
        | TokenKind::Throw
        | TokenKind::Class
        | TokenKind::Break
        | TokenKind::Continue
        | TokenKind::Typeof => Some(kind.display_name().trim_matches('`')),
        _ => None,
    }
}
