//! Tree cursor and pre-order traversal.

use std::iter::FusedIterator;

use super::{NodeId, SyntaxTree};

/// A movable position inside one subtree.
///
/// The cursor never moves above or beside the node it was created on, so a
/// walk started on a declaration stays inside that declaration.
#[derive(Debug, Clone)]
pub struct Cursor<'t> {
    tree: &'t SyntaxTree,
    start: NodeId,
    current: NodeId,
}

impl<'t> Cursor<'t> {
    #[must_use]
    pub const fn new(tree: &'t SyntaxTree, start: NodeId) -> Self {
        Self {
            tree,
            start,
            current: start,
        }
    }

    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.current
    }

    pub fn goto_first_child(&mut self) -> bool {
        match self.tree.child(self.current, 0) {
            Some(child) => {
                self.current = child;
                true
            }
            None => false,
        }
    }

    pub fn goto_next_sibling(&mut self) -> bool {
        if self.current == self.start {
            return false;
        }
        match self.tree.next_sibling(self.current) {
            Some(sibling) => {
                self.current = sibling;
                true
            }
            None => false,
        }
    }

    pub fn goto_parent(&mut self) -> bool {
        if self.current == self.start {
            return false;
        }
        match self.tree.parent(self.current) {
            Some(parent) => {
                self.current = parent;
                true
            }
            None => false,
        }
    }
}

/// Lazy depth-first pre-order walk: a node, then each child subtree in order.
///
/// Each call to [`SyntaxTree::preorder`] gets its own cursor, so walks are
/// independent and can be abandoned at any point.
#[derive(Debug, Clone)]
pub struct Preorder<'t> {
    cursor: Cursor<'t>,
    visited_children: bool,
    done: bool,
}

impl<'t> Preorder<'t> {
    pub(crate) const fn new(tree: &'t SyntaxTree, start: NodeId) -> Self {
        Self {
            cursor: Cursor::new(tree, start),
            visited_children: false,
            done: false,
        }
    }
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.done {
            return None;
        }
        loop {
            if !self.visited_children {
                let node = self.cursor.node();
                if !self.cursor.goto_first_child() {
                    self.visited_children = true;
                }
                return Some(node);
            } else if self.cursor.goto_next_sibling() {
                self.visited_children = false;
            } else if !self.cursor.goto_parent() {
                self.done = true;
                return None;
            }
        }
    }
}

impl FusedIterator for Preorder<'_> {}
