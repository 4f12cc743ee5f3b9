//! C++ grammar access, extension detection, and parsing into the arena.

use std::path::Path;

use ast_grep_language::{LanguageExt, SupportLang};

use crate::error::ParserError;
use crate::syntax::{self, SyntaxTree};

/// Extensions treated as C/C++ units. Headers are parsed with the C++
/// grammar too, since marker attributes are C++11 syntax.
pub const CPP_EXTENSIONS: &[&str] = &["c", "h", "cpp", "cc", "cxx", "hpp", "hxx", "hh", "inl"];

/// Whether `path` has one of `extensions` (case-insensitive, no leading dot).
#[must_use]
pub fn has_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            extensions
                .iter()
                .any(|candidate| candidate.as_ref().eq_ignore_ascii_case(ext))
        })
}

#[must_use]
pub fn is_cpp_path(path: &Path) -> bool {
    has_extension(path, CPP_EXTENSIONS)
}

/// The tree-sitter C++ grammar bundled with ast-grep.
#[must_use]
pub fn cpp_language() -> tree_sitter::Language {
    SupportLang::Cpp.get_ts_language()
}

/// Parse C++ source text into an arena syntax tree.
///
/// The grammar recovers from most syntax errors; the only failure is when
/// no tree is produced at all.
///
/// # Errors
/// Returns `ParserError` if the grammar cannot be loaded or produces no tree.
pub fn parse_cpp(source: &str) -> Result<SyntaxTree, ParserError> {
    let mut parser = tree_sitter::Parser::new();
    parser.set_language(&cpp_language())?;
    let tree = parser
        .parse(source, None)
        .ok_or_else(|| ParserError::ParseFailed("grammar produced no tree".to_string()))?;
    syntax::lower(&tree)
        .ok_or_else(|| ParserError::ParseFailed("syntax tree was empty".to_string()))
}
