//! Integration tests over the fixture scripts in `tests/fixtures`.
//!
//! Valid fixtures must parse cleanly in both phases: the full-script parse, then a deep parse of every captured
//! function body and initializer. Invalid fixtures must report at least one error without panicking.

use std::fs;
use std::path::{Path, PathBuf};

use angel::{NodeKind, SyntaxNode, parse_full_script, parse_statement_block_at, parse_variable_initializer};

fn fixtures(kind: &str) -> Vec<PathBuf> {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(kind);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| path.extension().is_some_and(|e| e == "as"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {}", dir.display());
    paths
}

/// Every superficially captured body or initializer, in source order.
fn deferred_nodes(node: &SyntaxNode, bodies: &mut Vec<SyntaxNode>, inits: &mut Vec<SyntaxNode>) {
    for child in node.children() {
        match child.kind() {
            NodeKind::StatementBlock if child.children().is_empty() => bodies.push(child.clone()),
            NodeKind::Assignment if node.kind() == NodeKind::Declaration => inits.push(child.clone()),
            _ => deferred_nodes(child, bodies, inits),
        }
    }
}

#[test]
fn test_valid_fixtures_parse_in_depth() {
    for path in fixtures("valid") {
        let source = fs::read_to_string(&path).unwrap();
        let output = parse_full_script(&source);
        assert!(
            output.diagnostics.is_empty(),
            "{} has diagnostics: {:?}",
            path.display(),
            output.diagnostics.sorted()
        );

        let mut bodies = Vec::new();
        let mut inits = Vec::new();
        deferred_nodes(&output.root, &mut bodies, &mut inits);
        assert!(!bodies.is_empty(), "{} captured no bodies", path.display());

        for body in &bodies {
            let span = body.span().unwrap();
            let deep = parse_statement_block_at(&source, span);
            assert!(
                deep.diagnostics.is_empty(),
                "{}: body {:?} has diagnostics: {:?}",
                path.display(),
                body.text(&source),
                deep.diagnostics.sorted()
            );
            assert_eq!(deep.root.span(), Some(span), "deep parse must cover the captured block");
        }

        for init in &inits {
            let deep = parse_variable_initializer(&source, init.span().unwrap());
            assert!(
                deep.diagnostics.is_empty(),
                "{}: initializer {:?} has diagnostics: {:?}",
                path.display(),
                init.text(&source),
                deep.diagnostics.sorted()
            );
        }
    }
}

#[test]
fn test_invalid_fixtures_report_errors() {
    for path in fixtures("invalid") {
        let source = fs::read_to_string(&path).unwrap();
        let output = parse_full_script(&source);
        assert!(output.has_errors(), "expected {} to fail", path.display());
        assert_eq!(output.root.kind(), NodeKind::Script);
    }
}

#[test]
fn test_entities_fixture_shape() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/valid/entities.as");
    let source = fs::read_to_string(path).unwrap();
    let script = parse_full_script(&source).into_result().unwrap();

    let top: Vec<NodeKind> = script.children().iter().map(SyntaxNode::kind).collect();
    assert_eq!(top, vec![NodeKind::Namespace, NodeKind::Function]);

    let namespace = &script.children()[0];
    let members: Vec<NodeKind> = namespace.children()[1].children().iter().map(SyntaxNode::kind).collect();
    assert_eq!(
        members,
        vec![NodeKind::Enum, NodeKind::Interface, NodeKind::FuncDef, NodeKind::Class]
    );
}
