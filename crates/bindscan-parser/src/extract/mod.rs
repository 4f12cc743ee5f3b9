//! Marker attribute extraction driver.
//!
//! Walks a unit's tree in pre-order, classifies every `attribute_declaration`
//! by its governing declaration, and resolves it to an `(attribute, symbol)`
//! pair. Every marker yields exactly one binding (possibly with an empty
//! symbol) unless the node itself is malformed, in which case it is skipped
//! and reported as a diagnostic.

pub mod kinds;
pub mod resolve;
pub mod shape;

use bindscan_core::{Binding, ByteSpan, Diagnostic, DiagnosticKind, ShapeKind, UnitReport};

use crate::error::ParserError;
use crate::language::parse_cpp;
use crate::syntax::SyntaxTree;
use resolve::LineIndex;
pub use shape::{DeclarationShape, Marker, MarkerFault};

/// Knobs for a single unit's extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Fail the unit instead of extracting from a tree the grammar had to
    /// recover.
    pub strict: bool,
}

/// Bindings and diagnostics for one unit, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub bindings: Vec<Binding>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Extraction {
    #[must_use]
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.bindings.iter().map(Binding::pair).collect()
    }

    #[must_use]
    pub fn into_report(self, path: impl Into<String>) -> UnitReport {
        UnitReport::extracted(path, self.bindings, self.diagnostics)
    }
}

/// Extract every marker attribute from an already parsed unit.
#[must_use]
pub fn extract_tree(source: &str, tree: &SyntaxTree) -> Extraction {
    let lines = LineIndex::new(source);
    let mut out = Extraction::default();

    for node in tree.descendants_of_kind(tree.root(), kinds::ATTRIBUTE_DECLARATION) {
        let span = tree.span(node);
        let line = lines.line(span.start);
        let resolved = shape::classify(tree, node)
            .and_then(|marker| resolve::resolve(source, tree, &marker, &lines));

        match resolved {
            Ok(binding) => {
                tracing::trace!(
                    attribute = %binding.attribute,
                    symbol = %binding.symbol,
                    shape = %binding.shape,
                    line,
                    "resolved marker"
                );
                if let Some(diagnostic) = unresolved_diagnostic(&binding) {
                    out.diagnostics.push(diagnostic);
                }
                out.bindings.push(binding);
            }
            Err(fault) => {
                tracing::warn!(line, span = ?span, %fault, "skipping malformed marker attribute");
                out.diagnostics.push(Diagnostic::warning(
                    DiagnosticKind::MalformedAttribute,
                    fault.to_string(),
                    ByteSpan::from(span),
                    line,
                ));
            }
        }
    }

    out
}

fn unresolved_diagnostic(binding: &Binding) -> Option<Diagnostic> {
    let (kind, message) = match binding.shape {
        ShapeKind::Prototype | ShapeKind::Definition => return None,
        ShapeKind::Unsupported => (
            DiagnosticKind::UnsupportedMemberShape,
            format!(
                "`{}` is attached to a member variable; no symbol extracted",
                binding.attribute
            ),
        ),
        ShapeKind::Unresolvable => (
            DiagnosticKind::UnresolvableShape,
            format!(
                "`{}` is not attached to a function prototype or definition",
                binding.attribute
            ),
        ),
    };
    Some(Diagnostic::info(kind, message, binding.span, binding.line))
}

/// Parse C++ source text and extract its marker attributes.
///
/// # Errors
/// Returns `ParserError` if the source cannot be parsed, or (with
/// `options.strict`) if the grammar had to recover from syntax errors.
pub fn extract_source(source: &str, options: ExtractOptions) -> Result<Extraction, ParserError> {
    let tree = parse_cpp(source)?;
    let Some(&offset) = tree.error_offsets().first() else {
        return Ok(extract_tree(source, &tree));
    };

    let count = tree.error_offsets().len();
    let line = LineIndex::new(source).line(offset);
    if options.strict {
        return Err(ParserError::SyntaxErrors { count, line });
    }

    let mut extraction = extract_tree(source, &tree);
    extraction.diagnostics.insert(
        0,
        Diagnostic::warning(
            DiagnosticKind::SyntaxError,
            format!("{count} syntax error(s); extracted from the recovered tree"),
            ByteSpan::new(offset, offset),
            line,
        ),
    );
    Ok(extraction)
}

#[cfg(test)]
mod tests;
