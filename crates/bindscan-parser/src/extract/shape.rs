//! Declaration shape classification for marker attributes.
//!
//! A marker's governing declaration is decided by its parent's kind alone:
//!
//! | parent kind            | shape                                       |
//! |------------------------|---------------------------------------------|
//! | `field_declaration`    | prototype if the declarator is a function, else unsupported |
//! | `function_definition`  | definition, named by the first function declarator below it |
//! | anything else / none   | unresolvable                                |

use bindscan_core::ShapeKind;

use super::kinds::{
    ATTRIBUTE, ATTRIBUTE_DECLARATION, FIELD_DECLARATION, FIELD_DECLARATOR, FIELD_NAME,
    FUNCTION_DECLARATOR, FUNCTION_DEFINITION, INLINE_METHOD_DEFINITION, POINTER_DECLARATOR,
    REFERENCE_DECLARATOR,
};
use crate::syntax::{NodeId, SyntaxTree};

/// Governing declaration of a marker, with the node naming its symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationShape {
    /// In-class member function prototype.
    Prototype(NodeId),
    /// Function definition with a body; the name may be qualified.
    Definition(NodeId),
    /// Member variable; symbol extraction is not performed.
    Unsupported,
    Unresolvable,
}

impl DeclarationShape {
    #[must_use]
    pub const fn kind(self) -> ShapeKind {
        match self {
            Self::Prototype(_) => ShapeKind::Prototype,
            Self::Definition(_) => ShapeKind::Definition,
            Self::Unsupported => ShapeKind::Unsupported,
            Self::Unresolvable => ShapeKind::Unresolvable,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> Option<NodeId> {
        match self {
            Self::Prototype(id) | Self::Definition(id) => Some(id),
            Self::Unsupported | Self::Unresolvable => None,
        }
    }
}

/// A classified marker attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub node: NodeId,
    /// The attribute's `name` node.
    pub name: NodeId,
    pub shape: DeclarationShape,
}

/// Structural faults that make a single marker node unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MarkerFault {
    #[error("expected an attribute declaration, found `{0}`")]
    NotAMarker(&'static str),

    #[error("attribute declaration has no attribute")]
    MissingAttribute,

    #[error("attribute has no name")]
    MissingName,

    #[error("attribute name span lies outside the source text")]
    NameOutOfBounds,
}

/// Classify the declaration governing the marker attribute `node`.
///
/// # Errors
/// Returns `MarkerFault` when `node` is not an attribute declaration or has
/// no name-bearing attribute child.
pub fn classify(tree: &SyntaxTree, node: NodeId) -> Result<Marker, MarkerFault> {
    let kind = tree.kind(node);
    if kind != ATTRIBUTE_DECLARATION {
        return Err(MarkerFault::NotAMarker(kind));
    }
    let attribute = tree
        .first_child_of_kind(node, ATTRIBUTE)
        .ok_or(MarkerFault::MissingAttribute)?;
    let name = tree
        .field(attribute, FIELD_NAME)
        .ok_or(MarkerFault::MissingName)?;

    let shape = tree
        .parent(node)
        .map_or(DeclarationShape::Unresolvable, |parent| {
            governing_shape(tree, parent)
        });

    Ok(Marker { node, name, shape })
}

fn governing_shape(tree: &SyntaxTree, parent: NodeId) -> DeclarationShape {
    match tree.kind(parent) {
        FIELD_DECLARATION => prototype_shape(tree, parent),
        FUNCTION_DEFINITION | INLINE_METHOD_DEFINITION => definition_shape(tree, parent),
        _ => DeclarationShape::Unresolvable,
    }
}

fn prototype_shape(tree: &SyntaxTree, field_declaration: NodeId) -> DeclarationShape {
    let Some(declarator) = tree.field(field_declaration, FIELD_DECLARATOR) else {
        return DeclarationShape::Unresolvable;
    };
    let declarator = strip_indirection(tree, declarator);
    if tree.kind(declarator) != FUNCTION_DECLARATOR {
        return DeclarationShape::Unsupported;
    }
    tree.field(declarator, FIELD_DECLARATOR)
        .map_or(DeclarationShape::Unresolvable, DeclarationShape::Prototype)
}

fn definition_shape(tree: &SyntaxTree, definition: NodeId) -> DeclarationShape {
    tree.first_descendant_of_kind(definition, FUNCTION_DECLARATOR)
        .and_then(|declarator| tree.field(declarator, FIELD_DECLARATOR))
        .map_or(DeclarationShape::Unresolvable, DeclarationShape::Definition)
}

/// Walk through `&`, `&&` and `*` declarators to the declarator they wrap.
///
/// `pointer_declarator` holds its inner declarator in a field,
/// `reference_declarator` only as its last named child.
fn strip_indirection(tree: &SyntaxTree, mut declarator: NodeId) -> NodeId {
    loop {
        let inner = match tree.kind(declarator) {
            POINTER_DECLARATOR => tree.field(declarator, FIELD_DECLARATOR),
            REFERENCE_DECLARATOR => tree.named_children(declarator).last(),
            _ => None,
        };
        match inner {
            Some(inner) => declarator = inner,
            None => return declarator,
        }
    }
}
