use super::*;
use arbor_ir::ast;
use pretty_assertions::assert_eq;

fn outline(source: &str) -> String {
    let interner = StringInterner::new();
    match parse(source, &interner) {
        Ok(program) => ast::dump(&program, &interner),
        Err(e) => panic!("parse failed: {e}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let interner = StringInterner::new();
    match parse(source, &interner) {
        Ok(program) => panic!("expected an error, got {program:?}"),
        Err(e) => e,
    }
}

#[test]
fn test_declaration_with_binary_init() {
    assert_eq!(
        outline("var a = b + 1;"),
        "\
Program
  VariableDeclaration var
    VariableDeclarator
      Identifier a
      BinaryExpression +
        Identifier b
        NumericLiteral 1
"
    );
}

#[test]
fn test_multiple_declarators_without_semicolon() {
    assert_eq!(
        outline("let x = 1, y\nconst z = 'q'"),
        "\
Program
  VariableDeclaration let
    VariableDeclarator
      Identifier x
      NumericLiteral 1
    VariableDeclarator
      Identifier y
  VariableDeclaration const
    VariableDeclarator
      Identifier z
      StringLiteral \"q\"
"
    );
}

#[test]
fn test_function_declaration_and_call() {
    assert_eq!(
        outline("function f(a, b) { return a * b; }\nconsole.log(f(6, 7));"),
        "\
Program
  FunctionDeclaration (a, b)
    Identifier f
    BlockStatement
      ReturnStatement
        BinaryExpression *
          Identifier a
          Identifier b
  ExpressionStatement
    CallExpression
      MemberExpression
        Identifier console
        Identifier log
      CallExpression
        Identifier f
        NumericLiteral 6
        NumericLiteral 7
"
    );
}

#[test]
fn test_precedence_and_parentheses() {
    assert_eq!(
        outline("(1 + 2) * 3 - 4 / 2"),
        "\
Program
  ExpressionStatement
    BinaryExpression -
      BinaryExpression *
        BinaryExpression +
          NumericLiteral 1
          NumericLiteral 2
        NumericLiteral 3
      BinaryExpression /
        NumericLiteral 4
        NumericLiteral 2
"
    );
}

#[test]
fn test_exponent_is_right_associative() {
    assert_eq!(
        outline("2 ** 3 ** 2"),
        "\
Program
  ExpressionStatement
    BinaryExpression **
      NumericLiteral 2
      BinaryExpression **
        NumericLiteral 3
        NumericLiteral 2
"
    );
}

#[test]
fn test_computed_member_and_array() {
    assert_eq!(
        outline("[1, 'two',][0]"),
        "\
Program
  ExpressionStatement
    MemberExpression computed
      ArrayExpression
        NumericLiteral 1
        StringLiteral \"two\"
      NumericLiteral 0
"
    );
}

#[test]
fn test_keyword_property_name() {
    let out = outline("a.new");
    assert!(out.contains("Identifier new"), "{out}");
}

#[test]
fn test_unsupported_statements_become_single_nodes() {
    assert_eq!(
        outline(
            "if (a) { b(); } else if (c) d(); else { e() }\n\
             while (x) { y() }\n\
             do { z() } while (w);\n\
             try { t() } catch (err) { } finally { }\n\
             1;"
        ),
        "\
Program
  IfStatement
  WhileStatement
  DoWhileStatement
  TryStatement
  ExpressionStatement
    NumericLiteral 1
"
    );
}

#[test]
fn test_unsupported_statement_inside_block_leaves_closing_brace() {
    assert_eq!(
        outline("function f() { for (;;) g() }"),
        "\
Program
  FunctionDeclaration ()
    Identifier f
    BlockStatement
      ForStatement
"
    );
}

#[test]
fn test_unsupported_expressions() {
    assert_eq!(
        outline("a = 1; c ? 1 : 2; x && y; -1; ({ k: 1 }); new Foo(1); (function () { return 1; })"),
        "\
Program
  ExpressionStatement
    AssignmentExpression
  ExpressionStatement
    ConditionalExpression
  ExpressionStatement
    LogicalExpression
  ExpressionStatement
    UnaryExpression
  ExpressionStatement
    ObjectExpression
  ExpressionStatement
    NewExpression
  ExpressionStatement
    FunctionExpression
"
    );
}

#[test]
fn test_unsupported_span_covers_construct() {
    let interner = StringInterner::new();
    let Ok(program) = parse("if (a) { b() }", &interner) else {
        panic!("parse failed");
    };
    let NodeKind::Program { body } = &program.kind else {
        panic!("not a program");
    };
    assert_eq!(body[0].span, Span::new(0, 14));
}

#[test]
fn test_empty_program() {
    assert_eq!(outline(""), "Program\n");
    assert_eq!(outline(";"), "Program\n  EmptyStatement\n");
}

#[test]
fn test_return_outside_function() {
    let err = parse_err("return 1;");
    assert_eq!(err.kind, ParseErrorKind::ReturnOutsideFunction);
    assert_eq!(err.span, Span::new(0, 6));
}

#[test]
fn test_return_inside_function_expression_is_allowed() {
    assert!(outline("(function () { return 2; })").contains("FunctionExpression"));
}

#[test]
fn test_expected_expression() {
    let err = parse_err("var a = ;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedExpression { found: "`;`" });
    assert_eq!(err.context, Some(ErrorContext::VariableDeclaration));
}

#[test]
fn test_expected_identifier() {
    let err = parse_err("var 1 = 2;");
    assert_eq!(err.kind, ParseErrorKind::ExpectedIdentifier { found: "number" });
}

#[test]
fn test_unclosed_block() {
    let err = parse_err("function f() { return 1;");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnclosedDelimiter {
            delimiter: "`{`",
            open: Span::new(13, 14),
        }
    );
}

#[test]
fn test_unexpected_token_in_call() {
    let err = parse_err("f(1 2)");
    assert_eq!(
        err.kind,
        ParseErrorKind::UnexpectedToken {
            expected: "`)`",
            found: "number",
        }
    );
    assert_eq!(err.context, Some(ErrorContext::CallArguments));
}

#[test]
fn test_lex_error_surfaces_through_parse() {
    let err = parse_err("var s = \"open");
    assert!(matches!(err.kind, ParseErrorKind::Lex(_)));
}

#[test]
fn test_deeply_nested_parentheses() {
    let depth = 5_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(outline(&source), "Program\n  ExpressionStatement\n    NumericLiteral 1\n");
}
