//! Symbol resolution: slicing attribute and symbol names out of the source.
//!
//! This is the only place source bytes are read. Text is returned exactly as
//! written, qualifiers and template arguments included.

use bindscan_core::{Binding, ByteSpan};

use super::shape::{Marker, MarkerFault};
use crate::syntax::{NodeId, SyntaxTree};

/// Source text of `id`, or `None` if its span is not a valid slice of `source`.
#[must_use]
pub fn node_text<'s>(source: &'s str, tree: &SyntaxTree, id: NodeId) -> Option<&'s str> {
    source.get(tree.span(id))
}

/// Build the binding for a classified marker.
///
/// An unresolvable shape, or a symbol span that does not slice cleanly,
/// yields an empty symbol.
///
/// # Errors
/// Returns `MarkerFault::NameOutOfBounds` if the attribute name cannot be sliced.
pub fn resolve(
    source: &str,
    tree: &SyntaxTree,
    marker: &Marker,
    lines: &LineIndex,
) -> Result<Binding, MarkerFault> {
    let attribute = node_text(source, tree, marker.name).ok_or(MarkerFault::NameOutOfBounds)?;
    let symbol = marker
        .shape
        .symbol()
        .and_then(|id| node_text(source, tree, id))
        .unwrap_or_default();
    let span = tree.span(marker.node);

    Ok(Binding {
        attribute: attribute.to_string(),
        symbol: symbol.to_string(),
        shape: marker.shape.kind(),
        line: lines.line(span.start),
        span: ByteSpan::from(span),
    })
}

/// Byte offset to 1-based line lookup for one source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    #[must_use]
    pub fn new(source: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn line(&self, offset: usize) -> u32 {
        self.starts.partition_point(|&start| start <= offset) as u32
    }
}
