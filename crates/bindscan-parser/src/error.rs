//! Parser error types for bindscan-parser.

/// Unit-level failures. Per-node faults never surface here; they become
/// diagnostics on the unit's extraction instead.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("Parse failed: {0}")]
    ParseFailed(String),

    #[error("Source has syntax errors (strict mode): {count} error node(s), first at line {line}")]
    SyntaxErrors { count: usize, line: u32 },

    #[error("Grammar rejected by tree-sitter: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("Source is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
