use super::{SyntaxTree, TreeBuilder};

/// Copy a tree-sitter tree into the arena with one cursor walk.
///
/// Anonymous tokens are kept so child positions match the grammar, and each
/// child remembers the field name its parent holds it under.
#[must_use]
pub fn lower(tree: &tree_sitter::Tree) -> Option<SyntaxTree> {
    let mut builder = TreeBuilder::new();

    let mut cursor = tree.walk();
    loop {
        let node = cursor.node();
        builder.start_node(
            node.kind(),
            node.byte_range(),
            cursor.field_name(),
            node.is_named(),
        );
        if node.is_error() || node.is_missing() {
            builder.record_error(node.start_byte());
        }
        if cursor.goto_first_child() {
            continue;
        }
        builder.finish_node();
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return builder.finish();
            }
            builder.finish_node();
        }
    }
}
