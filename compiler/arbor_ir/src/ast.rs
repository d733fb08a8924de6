//! Syntax tree.
//!
//! A closed sum type over the node kinds the evaluator understands, plus
//! [`NodeKind::Unsupported`] for constructs the front-end recognises but the
//! evaluator has no rule for. Every node carries its source span.
//!
//! Children are owned (`Box`/`Vec`); the evaluator only ever borrows the
//! tree, so closures can hold `&FunctionDecl` for as long as the tree lives.

use std::fmt::{self, Write};

use crate::{Name, Span, StringInterner};

/// A syntax node: kind-specific payload plus its location.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    /// The Babel kind name of this node (`"CallExpression"`, ...).
    pub fn kind_name(&self) -> &str {
        self.kind.name()
    }

    /// Returns the identifier name if this node is an `Identifier`.
    #[inline]
    pub fn as_identifier(&self) -> Option<Name> {
        match self.kind {
            NodeKind::Identifier { name } => Some(name),
            _ => None,
        }
    }
}

/// `var`, `let` or `const`. Recorded but not distinguished at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Var,
    Let,
    Const,
}

impl DeclarationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            DeclarationKind::Var => "var",
            DeclarationKind::Let => "let",
            DeclarationKind::Const => "const",
        }
    }
}

/// A parameter or other bare binding name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
}

/// Function declaration payload. Closures borrow this directly.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    /// The declared name (an `Identifier` node).
    pub id: Box<Node>,
    pub params: Vec<Ident>,
    /// The body (a `BlockStatement` node).
    pub body: Box<Node>,
}

/// Binary operators.
///
/// The front-end parses the full comparison/arithmetic set; only
/// `+ - * /` have evaluation rules.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    Eq,
    NotEq,
    StrictEq,
    StrictNotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn as_symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Exp => "**",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::StrictEq => "===",
            BinaryOp::StrictNotEq => "!==",
            BinaryOp::Lt => "<",
            BinaryOp::LtEq => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::GtEq => ">=",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Node kinds, named after their Babel counterparts.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    // Statements
    Program {
        body: Vec<Node>,
    },
    VariableDeclaration {
        kind: DeclarationKind,
        declarations: Vec<Node>,
    },
    VariableDeclarator {
        id: Box<Node>,
        init: Option<Box<Node>>,
    },
    FunctionDeclaration(FunctionDecl),
    ReturnStatement {
        argument: Option<Box<Node>>,
    },
    BlockStatement {
        body: Vec<Node>,
    },
    ExpressionStatement {
        expression: Box<Node>,
    },
    EmptyStatement,

    // Expressions
    BinaryExpression {
        operator: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Identifier {
        name: Name,
    },
    NumericLiteral {
        value: f64,
    },
    StringLiteral {
        value: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,
    ThisExpression,
    ArrayExpression {
        elements: Vec<Node>,
    },
    MemberExpression {
        object: Box<Node>,
        property: Box<Node>,
        computed: bool,
    },
    CallExpression {
        callee: Box<Node>,
        arguments: Vec<Node>,
    },

    /// A construct recognised by the front-end that has no evaluation rule.
    /// `kind` is its Babel kind name.
    Unsupported {
        kind: &'static str,
    },
}

impl NodeKind {
    /// The Babel kind name.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Program { .. } => "Program",
            NodeKind::VariableDeclaration { .. } => "VariableDeclaration",
            NodeKind::VariableDeclarator { .. } => "VariableDeclarator",
            NodeKind::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeKind::ReturnStatement { .. } => "ReturnStatement",
            NodeKind::BlockStatement { .. } => "BlockStatement",
            NodeKind::ExpressionStatement { .. } => "ExpressionStatement",
            NodeKind::EmptyStatement => "EmptyStatement",
            NodeKind::BinaryExpression { .. } => "BinaryExpression",
            NodeKind::Identifier { .. } => "Identifier",
            NodeKind::NumericLiteral { .. } => "NumericLiteral",
            NodeKind::StringLiteral { .. } => "StringLiteral",
            NodeKind::BooleanLiteral { .. } => "BooleanLiteral",
            NodeKind::NullLiteral => "NullLiteral",
            NodeKind::ThisExpression => "ThisExpression",
            NodeKind::ArrayExpression { .. } => "ArrayExpression",
            NodeKind::MemberExpression { .. } => "MemberExpression",
            NodeKind::CallExpression { .. } => "CallExpression",
            NodeKind::Unsupported { kind } => *kind,
        }
    }
}

/// Render a node as an indented outline, one node per line.
///
/// Used by `arbor parse` and by tests that want to assert tree shape
/// without spelling out spans.
pub fn dump(node: &Node, interner: &StringInterner) -> String {
    let mut out = String::new();
    dump_into(&mut out, node, interner, 0);
    out
}

fn dump_into(out: &mut String, node: &Node, interner: &StringInterner, depth: usize) {
    let indent = "  ".repeat(depth);
    let _ = write!(out, "{indent}{}", node.kind_name());
    match &node.kind {
        NodeKind::VariableDeclaration { kind, .. } => {
            let _ = write!(out, " {}", kind.as_str());
        }
        NodeKind::FunctionDeclaration(func) => {
            let params: Vec<_> = func.params.iter().map(|p| interner.lookup(p.name)).collect();
            let _ = write!(out, " ({})", params.join(", "));
        }
        NodeKind::BinaryExpression { operator, .. } => {
            let _ = write!(out, " {operator}");
        }
        NodeKind::Identifier { name } => {
            let _ = write!(out, " {}", interner.lookup(*name));
        }
        NodeKind::NumericLiteral { value } => {
            let _ = write!(out, " {value}");
        }
        NodeKind::StringLiteral { value } => {
            let _ = write!(out, " {value:?}");
        }
        NodeKind::BooleanLiteral { value } => {
            let _ = write!(out, " {value}");
        }
        NodeKind::MemberExpression { computed: true, .. } => out.push_str(" computed"),
        _ => {}
    }
    out.push('\n');

    for child in children(node) {
        dump_into(out, child, interner, depth + 1);
    }
}

/// Direct children in source order.
pub fn children(node: &Node) -> Vec<&Node> {
    match &node.kind {
        NodeKind::Program { body } | NodeKind::BlockStatement { body } => body.iter().collect(),
        NodeKind::VariableDeclaration { declarations, .. } => declarations.iter().collect(),
        NodeKind::VariableDeclarator { id, init } => {
            let mut nodes = vec![id.as_ref()];
            nodes.extend(init.as_deref());
            nodes
        }
        NodeKind::FunctionDeclaration(func) => vec![func.id.as_ref(), func.body.as_ref()],
        NodeKind::ReturnStatement { argument } => argument.as_deref().into_iter().collect(),
        NodeKind::ExpressionStatement { expression } => vec![expression.as_ref()],
        NodeKind::BinaryExpression { left, right, .. } => vec![left.as_ref(), right.as_ref()],
        NodeKind::ArrayExpression { elements } => elements.iter().collect(),
        NodeKind::MemberExpression {
            object, property, ..
        } => vec![object.as_ref(), property.as_ref()],
        NodeKind::CallExpression { callee, arguments } => {
            let mut nodes = vec![callee.as_ref()];
            nodes.extend(arguments.iter());
            nodes
        }
        NodeKind::EmptyStatement
        | NodeKind::Identifier { .. }
        | NodeKind::NumericLiteral { .. }
        | NodeKind::StringLiteral { .. }
        | NodeKind::BooleanLiteral { .. }
        | NodeKind::NullLiteral
        | NodeKind::ThisExpression
        | NodeKind::Unsupported { .. } => Vec::new(),
    }
}

#[cfg(test)]
mod tests;
