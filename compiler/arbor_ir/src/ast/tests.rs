use super::*;
use pretty_assertions::assert_eq;

fn ident(interner: &StringInterner, text: &str, start: u32) -> Node {
    let end = start + u32::try_from(text.len()).unwrap_or(0);
    Node::new(
        NodeKind::Identifier {
            name: interner.intern(text),
        },
        Span::new(start, end),
    )
}

#[test]
fn test_kind_names_match_babel() {
    let unsupported = Node::new(NodeKind::Unsupported { kind: "IfStatement" }, Span::DUMMY);
    assert_eq!(unsupported.kind_name(), "IfStatement");
    assert_eq!(NodeKind::NullLiteral.name(), "NullLiteral");
    assert_eq!(
        NodeKind::ArrayExpression {
            elements: Vec::new()
        }
        .name(),
        "ArrayExpression"
    );
}

#[test]
fn test_as_identifier() {
    let interner = StringInterner::new();
    let node = ident(&interner, "a", 0);
    assert_eq!(node.as_identifier(), Some(interner.intern("a")));

    let literal = Node::new(NodeKind::NumericLiteral { value: 1.0 }, Span::DUMMY);
    assert_eq!(literal.as_identifier(), None);
}

#[test]
fn test_binary_op_symbols() {
    assert_eq!(BinaryOp::Add.to_string(), "+");
    assert_eq!(BinaryOp::Rem.as_symbol(), "%");
    assert_eq!(BinaryOp::StrictNotEq.as_symbol(), "!==");
}

#[test]
fn test_dump_outline() {
    let interner = StringInterner::new();
    // var a = b + 1;
    let declarator = Node::new(
        NodeKind::VariableDeclarator {
            id: Box::new(ident(&interner, "a", 4)),
            init: Some(Box::new(Node::new(
                NodeKind::BinaryExpression {
                    operator: BinaryOp::Add,
                    left: Box::new(ident(&interner, "b", 8)),
                    right: Box::new(Node::new(
                        NodeKind::NumericLiteral { value: 1.0 },
                        Span::new(12, 13),
                    )),
                },
                Span::new(8, 13),
            ))),
        },
        Span::new(4, 13),
    );
    let program = Node::new(
        NodeKind::Program {
            body: vec![Node::new(
                NodeKind::VariableDeclaration {
                    kind: DeclarationKind::Var,
                    declarations: vec![declarator],
                },
                Span::new(0, 14),
            )],
        },
        Span::new(0, 14),
    );

    let expected = "\
Program
  VariableDeclaration var
    VariableDeclarator
      Identifier a
      BinaryExpression +
        Identifier b
        NumericLiteral 1
";
    assert_eq!(dump(&program, &interner), expected);
}

#[test]
fn test_children_of_call() {
    let interner = StringInterner::new();
    let call = Node::new(
        NodeKind::CallExpression {
            callee: Box::new(ident(&interner, "f", 0)),
            arguments: vec![ident(&interner, "x", 2), ident(&interner, "y", 5)],
        },
        Span::new(0, 7),
    );
    let names: Vec<&str> = children(&call).iter().map(|n| n.kind_name()).collect();
    assert_eq!(names, vec!["Identifier", "Identifier", "Identifier"]);
}
