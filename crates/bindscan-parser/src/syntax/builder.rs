use std::ops::Range;

use super::{NodeId, SyntaxNode, SyntaxTree};

/// Builds a [`SyntaxTree`] in pre-order.
///
/// Every `start_node` must be matched by a `finish_node`; the first node
/// started becomes the root and only one root is allowed.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<SyntaxNode>,
    open: Vec<NodeId>,
    extra_root: bool,
    errors: Vec<usize>,
}

impl TreeBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a node as the last child of the currently open node.
    pub fn start_node(
        &mut self,
        kind: &'static str,
        span: Range<usize>,
        field: Option<&'static str>,
        named: bool,
    ) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        let parent = self.open.last().copied();
        let sibling_index = match parent {
            Some(parent) => {
                let siblings = &mut self.nodes[parent.index()].children;
                siblings.push(id);
                siblings.len() - 1
            }
            None => {
                if !self.nodes.is_empty() {
                    self.extra_root = true;
                }
                0
            }
        };
        self.nodes.push(SyntaxNode {
            kind,
            named,
            span,
            parent,
            children: Vec::new(),
            sibling_index,
            field,
        });
        self.open.push(id);
        id
    }

    pub fn finish_node(&mut self) {
        self.open.pop();
    }

    /// Record an error or missing node the grammar inserted while recovering.
    pub fn record_error(&mut self, offset: usize) {
        self.errors.push(offset);
    }

    /// Returns `None` for an empty, unbalanced, or multi-rooted build.
    #[must_use]
    pub fn finish(self) -> Option<SyntaxTree> {
        if self.nodes.is_empty() || !self.open.is_empty() || self.extra_root {
            return None;
        }
        Some(SyntaxTree {
            nodes: self.nodes,
            errors: self.errors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_yields_no_tree() {
        assert!(TreeBuilder::new().finish().is_none());
    }

    #[test]
    fn unbalanced_build_yields_no_tree() {
        let mut b = TreeBuilder::new();
        b.start_node("unit", 0..4, None, true);
        b.start_node("decl", 0..4, None, true);
        b.finish_node();
        assert!(b.finish().is_none());
    }

    #[test]
    fn second_root_is_rejected() {
        let mut b = TreeBuilder::new();
        b.start_node("unit", 0..4, None, true);
        b.finish_node();
        b.start_node("unit", 4..8, None, true);
        b.finish_node();
        assert!(b.finish().is_none());
    }

    #[test]
    fn recorded_errors_carry_into_tree() {
        let mut b = TreeBuilder::new();
        b.start_node("unit", 0..1, None, true);
        b.finish_node();
        b.record_error(0);
        let tree = b.finish().expect("tree");
        assert!(tree.has_error());
        assert_eq!(tree.error_offsets(), [0]);
    }
}
