//! Arena-backed concrete syntax tree.
//!
//! Nodes live in one `Vec` owned by [`SyntaxTree`] and refer to each other by
//! [`NodeId`]. Parent links are plain indices, so the tree has no reference
//! cycles and is immutable once built.

mod builder;
mod cursor;
mod lower;

use std::ops::Range;

pub use builder::TreeBuilder;
pub use cursor::{Cursor, Preorder};
pub use lower::lower;

/// Index of a node inside its [`SyntaxTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root is always the first node built.
    pub const ROOT: Self = Self(0);

    #[allow(clippy::cast_possible_truncation)]
    const fn from_index(index: usize) -> Self {
        Self(index as u32)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone)]
pub struct SyntaxNode {
    kind: &'static str,
    named: bool,
    span: Range<usize>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    /// Position among the parent's children.
    sibling_index: usize,
    /// Field under which the parent holds this node.
    field: Option<&'static str>,
}

impl SyntaxNode {
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        self.kind
    }

    /// `false` for anonymous tokens such as `[[` or `;`.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        self.named
    }

    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[must_use]
    pub const fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        self.field
    }
}

/// An immutable syntax tree for one unit.
#[derive(Debug, Clone)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
    /// Start offsets of error and missing nodes, in document order.
    errors: Vec<usize>,
}

impl SyntaxTree {
    #[must_use]
    pub const fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a tree has at least its root.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the grammar had to recover from syntax errors.
    #[must_use]
    pub const fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }

    #[must_use]
    pub fn error_offsets(&self) -> &[usize] {
        &self.errors
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&SyntaxNode> {
        self.nodes.get(id.index())
    }

    /// # Panics
    /// Panics if `id` was not produced by this tree.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &SyntaxNode {
        &self.nodes[id.index()]
    }

    #[must_use]
    pub fn kind(&self, id: NodeId) -> &'static str {
        self.node(id).kind
    }

    #[must_use]
    pub fn span(&self, id: NodeId) -> Range<usize> {
        self.node(id).span()
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[must_use]
    pub fn child(&self, id: NodeId, nth: usize) -> Option<NodeId> {
        self.node(id).children.get(nth).copied()
    }

    #[must_use]
    pub fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id);
        let parent = node.parent?;
        self.child(parent, node.sibling_index + 1)
    }

    /// First child of `id` held under the named field `name`.
    #[must_use]
    pub fn field(&self, id: NodeId, name: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.node(child).field == Some(name))
    }

    #[must_use]
    pub fn first_child_of_kind(&self, id: NodeId, kind: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&child| self.kind(child) == kind)
    }

    pub fn named_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.node(child).named)
    }

    /// Pre-order walk over the subtree rooted at `start`, `start` included.
    #[must_use]
    pub fn preorder(&self, start: NodeId) -> Preorder<'_> {
        Preorder::new(self, start)
    }

    pub fn descendants_of_kind<'t>(
        &'t self,
        start: NodeId,
        kind: &'t str,
    ) -> impl Iterator<Item = NodeId> + 't {
        self.preorder(start).filter(move |&id| self.kind(id) == kind)
    }

    #[must_use]
    pub fn first_descendant_of_kind(&self, start: NodeId, kind: &str) -> Option<NodeId> {
        self.preorder(start).find(|&id| self.kind(id) == kind)
    }
}
