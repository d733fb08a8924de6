//! Statement parsing.

use arbor_ir::{DeclarationKind, FunctionDecl, Ident, Node, NodeKind, TokenKind};
use arbor_stack::ensure_sufficient_stack;

use crate::{ErrorContext, ParseError, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Parse one statement.
    pub(crate) fn parse_statement(&mut self) -> Result<Node, ParseError> {
        ensure_sufficient_stack(|| self.parse_statement_inner())
    }

    fn parse_statement_inner(&mut self) -> Result<Node, ParseError> {
        match self.current_kind() {
            TokenKind::Var => self.parse_variable_declaration(DeclarationKind::Var),
            TokenKind::Let => self.parse_variable_declaration(DeclarationKind::Let),
            TokenKind::Const => self.parse_variable_declaration(DeclarationKind::Const),
            TokenKind::Function => self.parse_function_declaration(),
            TokenKind::Return => self.parse_return(),
            TokenKind::LBrace => self.parse_block(),
            TokenKind::Semicolon => {
                let span = self.advance().span;
                Ok(Node::new(NodeKind::EmptyStatement, span))
            }
            TokenKind::If => self.skip_statement("IfStatement"),
            TokenKind::While => self.skip_statement("WhileStatement"),
            TokenKind::For => self.skip_statement("ForStatement"),
            TokenKind::Do => self.skip_statement("DoWhileStatement"),
            TokenKind::Switch => self.skip_statement("SwitchStatement"),
            TokenKind::Try => self.skip_statement("TryStatement"),
            TokenKind::Throw => self.skip_statement("ThrowStatement"),
            TokenKind::Class => self.skip_statement("ClassDeclaration"),
            TokenKind::Break => self.skip_statement("BreakStatement"),
            TokenKind::Continue => self.skip_statement("ContinueStatement"),
            _ => self.parse_expression_statement(),
        }
    }

    /// `var a = 1, b;`
    fn parse_variable_declaration(&mut self, kind: DeclarationKind) -> Result<Node, ParseError> {
        let start = self.advance().span;
        let mut declarations = Vec::new();
        loop {
            let declarator = self
                .parse_declarator()
                .map_err(|e| e.in_context(ErrorContext::VariableDeclaration))?;
            declarations.push(declarator);
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.consume_semicolon();
        Ok(Node::new(
            NodeKind::VariableDeclaration { kind, declarations },
            self.span_from(start),
        ))
    }

    fn parse_declarator(&mut self) -> Result<Node, ParseError> {
        let ident = self.expect_ident()?;
        let id = Node::new(NodeKind::Identifier { name: ident.name }, ident.span);
        let init = if self.eat(&TokenKind::Eq) {
            Some(Box::new(self.parse_expression()?))
        } else {
            None
        };
        Ok(Node::new(
            NodeKind::VariableDeclarator {
                id: Box::new(id),
                init,
            },
            self.span_from(ident.span),
        ))
    }

    /// `function name(a, b) { ... }`
    fn parse_function_declaration(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        let decl = self
            .parse_named_function()
            .map_err(|e| e.in_context(ErrorContext::FunctionDeclaration))?;
        Ok(Node::new(
            NodeKind::FunctionDeclaration(decl),
            self.span_from(start),
        ))
    }

    fn parse_named_function(&mut self) -> Result<FunctionDecl, ParseError> {
        let ident = self.expect_ident()?;
        let (params, body) = self.parse_params_and_body()?;
        Ok(FunctionDecl {
            id: Box::new(Node::new(
                NodeKind::Identifier { name: ident.name },
                ident.span,
            )),
            params,
            body: Box::new(body),
        })
    }

    /// Parameter list and body, shared by declarations and function
    /// expressions.
    pub(crate) fn parse_params_and_body(&mut self) -> Result<(Vec<Ident>, Node), ParseError> {
        let open = self.expect(&TokenKind::LParen)?;
        let mut params = Vec::new();
        while !self.check(&TokenKind::RParen) && !self.is_at_end() {
            params.push(
                self.expect_ident()
                    .map_err(|e| e.in_context(ErrorContext::FunctionParams))?,
            );
            if !self.eat(&TokenKind::Comma) {
                break;
            }
        }
        self.expect_closing(&TokenKind::RParen, &TokenKind::LParen, open)
            .map_err(|e| e.in_context(ErrorContext::FunctionParams))?;

        self.function_depth += 1;
        let body = self.parse_block();
        self.function_depth -= 1;
        Ok((params, body?))
    }

    /// `return;` / `return expr;`
    fn parse_return(&mut self) -> Result<Node, ParseError> {
        let start = self.advance().span;
        if self.function_depth == 0 {
            return Err(ParseError::new(
                ParseErrorKind::ReturnOutsideFunction,
                start,
            ));
        }
        let argument = if matches!(
            self.current_kind(),
            TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            None
        } else {
            Some(Box::new(self.parse_expression()?))
        };
        self.consume_semicolon();
        Ok(Node::new(
            NodeKind::ReturnStatement { argument },
            self.span_from(start),
        ))
    }

    /// `{ ... }`
    pub(crate) fn parse_block(&mut self) -> Result<Node, ParseError> {
        let open = self.expect(&TokenKind::LBrace)?;
        let mut body = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.is_at_end() {
            body.push(self.parse_statement()?);
        }
        self.expect_closing(&TokenKind::RBrace, &TokenKind::LBrace, open)
            .map_err(|e| e.in_context(ErrorContext::Block))?;
        Ok(Node::new(
            NodeKind::BlockStatement { body },
            self.span_from(open),
        ))
    }

    fn parse_expression_statement(&mut self) -> Result<Node, ParseError> {
        let expression = self.parse_expression()?;
        let start = expression.span;
        self.consume_semicolon();
        Ok(Node::new(
            NodeKind::ExpressionStatement {
                expression: Box::new(expression),
            },
            self.span_from(start),
        ))
    }

    /// Semicolons are optional: consume one if present. Otherwise the
    /// statement ends where the next one begins.
    fn consume_semicolon(&mut self) {
        self.eat(&TokenKind::Semicolon);
    }
}
