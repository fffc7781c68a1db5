//! Snapshot tests of tree dumps and rendered diagnostics.
//!
//! A dump line is `Kind@start..end`, with the source text appended for leaves, indented two spaces per level.

use angel_syntax::{Span, parse_full_script, parse_statement_block_at};

fn dump(source: &str) -> String {
    let output = parse_full_script(source);
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
    output.root.display(source).to_string()
}

fn rendered_diagnostics(source: &str) -> String {
    let output = parse_full_script(source);
    output
        .diagnostics
        .sorted()
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn class_with_property() {
    insta::assert_snapshot!(dump("class A { int x; }"), @r###"
    Script@0..18
      Class@0..18
        Identifier@6..7 "A"
        Declaration@10..16
          DataType@10..13
            DataType@10..13 "int"
          Identifier@14..15 "x"
    "###);
}

#[test]
fn deep_parsed_return_with_prefix_operator() {
    let source = "{ return -x; }";
    let output = parse_statement_block_at(source, Span::new(0, 1));
    assert!(output.diagnostics.is_empty(), "{:?}", output.diagnostics.sorted());
    insta::assert_snapshot!(output.root.display(source).to_string(), @r###"
    StatementBlock@0..14
      Return@2..12
        Assignment@9..11
          Condition@9..11
            Expression@9..11
              ExprTerm@9..11
                ExprPreOp@9..10 "-"
                ExprValue@10..11
                  VariableAccess@10..11
                    Identifier@10..11 "x"
    "###);
}

#[test]
fn unterminated_body_diagnostics() {
    insta::assert_snapshot!(rendered_diagnostics("void f() {"), @r###"
    1:10: info: While parsing statement block
    1:11: error: Unexpected end of file
    "###);
}

#[test]
fn broken_declaration_diagnostics() {
    insta::assert_snapshot!(rendered_diagnostics("int a\nint b;"), @r###"
    2:1: error: Expected '('
    2:1: error: Instead found reserved keyword 'int'
    "###);
}
