use super::*;
use crate::language::parse_cpp;

#[test]
fn extraction_is_idempotent() {
    for source in [CAMERA, OVERLOADS] {
        assert_eq!(extract(source), extract(source));
    }
}

#[test]
fn every_marker_node_yields_exactly_one_binding() {
    for source in [CAMERA, OVERLOADS] {
        let tree = parse_cpp(source).expect("parse");
        let markers = tree
            .descendants_of_kind(tree.root(), kinds::ATTRIBUTE_DECLARATION)
            .count();
        let extraction = extract_tree(source, &tree);
        assert_eq!(extraction.bindings.len(), markers);
        assert!(
            extraction
                .diagnostics
                .iter()
                .all(|d| d.kind != DiagnosticKind::MalformedAttribute)
        );
    }
}

#[test]
fn bindings_follow_document_order() {
    for source in [CAMERA, OVERLOADS] {
        let starts: Vec<_> = extract(source).bindings.iter().map(|b| b.span.start).collect();
        assert!(starts.windows(2).all(|w| w[0] < w[1]), "out of order: {starts:?}");
    }
}

#[test]
fn names_are_exact_source_substrings() {
    for source in [CAMERA, OVERLOADS] {
        for binding in extract(source).bindings {
            let marker = &source[binding.span.range()];
            assert!(marker.contains(&binding.attribute), "{marker:?}");
            assert!(source.contains(&binding.symbol), "{:?}", binding.symbol);
        }
    }
}

#[test]
fn child_spans_nest_inside_parents() {
    let tree = parse_cpp(CAMERA).expect("parse");
    for id in tree.preorder(tree.root()) {
        if let Some(parent) = tree.parent(id) {
            let (outer, inner) = (tree.span(parent), tree.span(id));
            assert!(outer.start <= inner.start && inner.end <= outer.end);
        }
    }
}

#[test]
fn traversal_covers_every_node_once() {
    let tree = parse_cpp(OVERLOADS).expect("parse");
    let mut seen = vec![false; tree.len()];
    for id in tree.preorder(tree.root()) {
        assert!(!seen[id.index()], "node visited twice");
        seen[id.index()] = true;
    }
    assert!(seen.into_iter().all(|s| s));
}
