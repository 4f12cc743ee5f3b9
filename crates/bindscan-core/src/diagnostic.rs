//! Per-node diagnostics recorded during extraction.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ByteSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// What went wrong for a single node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// Marker parent is not a recognized governing declaration.
    UnresolvableShape,
    /// Marker sits on a member variable; no symbol is extracted.
    UnsupportedMemberShape,
    /// Marker node lacks its name-bearing child and was skipped.
    MalformedAttribute,
    /// The grammar recovered from syntax errors somewhere in the unit.
    SyntaxError,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::UnresolvableShape => "unresolvable_shape",
            Self::UnsupportedMemberShape => "unsupported_member_shape",
            Self::MalformedAttribute => "malformed_attribute",
            Self::SyntaxError => "syntax_error",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    pub span: ByteSpan,
    /// 1-based line of `span.start`.
    pub line: u32,
}

impl Diagnostic {
    #[must_use]
    pub fn warning(
        kind: DiagnosticKind,
        message: impl Into<String>,
        span: ByteSpan,
        line: u32,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            kind,
            message: message.into(),
            span,
            line,
        }
    }

    #[must_use]
    pub fn info(
        kind: DiagnosticKind,
        message: impl Into<String>,
        span: ByteSpan,
        line: u32,
    ) -> Self {
        Self {
            severity: Severity::Info,
            kind,
            message: message.into(),
            span,
            line,
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "line {} [{}] {}: {}",
            self.line, self.span, self.kind, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_by_urgency() {
        assert!(Severity::Info < Severity::Warning);
        assert!(Severity::Warning < Severity::Error);
    }

    #[test]
    fn display_includes_location_and_kind() {
        let d = Diagnostic::warning(
            DiagnosticKind::MalformedAttribute,
            "attribute has no name",
            ByteSpan::new(5, 9),
            2,
        );
        assert_eq!(
            d.to_string(),
            "line 2 [5..9] malformed_attribute: attribute has no name"
        );
    }

    #[test]
    fn kind_serializes_in_snake_case() {
        let value =
            serde_json::to_value(DiagnosticKind::UnsupportedMemberShape).expect("serialize kind");
        assert_eq!(value, "unsupported_member_shape");
    }
}
