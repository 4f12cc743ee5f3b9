//! Resolved marker-attribute bindings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ByteSpan;

/// Declaration shape that governed a marker attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// In-class member function prototype (`void f(int);`).
    Prototype,
    /// Function definition with a body, in-class or out-of-class.
    Definition,
    /// Recognized member-variable shape; symbol extraction is not performed.
    Unsupported,
    /// Parent declaration is not a recognized governing shape.
    Unresolvable,
}

impl ShapeKind {
    /// Whether this shape carries a resolved symbol.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Prototype | Self::Definition)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Prototype => "prototype",
            Self::Definition => "definition",
            Self::Unsupported => "unsupported",
            Self::Unresolvable => "unresolvable",
        };
        write!(f, "{s}")
    }
}

/// One `(attribute, symbol)` pair extracted from a unit.
///
/// `symbol` is the empty string when the marker's governing declaration could
/// not be resolved; `shape` says why. `span` and `line` locate the marker
/// attribute node itself, not the symbol.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Binding {
    pub attribute: String,
    pub symbol: String,
    pub shape: ShapeKind,
    pub span: ByteSpan,
    pub line: u32,
}

impl Binding {
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        !self.symbol.is_empty()
    }

    /// The `(attribute, symbol)` pair handed to binding generators.
    #[must_use]
    pub fn pair(&self) -> (&str, &str) {
        (&self.attribute, &self.symbol)
    }
}

/// Reference rendering: `<attribute> <symbol>`.
impl std::fmt::Display for Binding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.attribute, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KINDS: &[ShapeKind] = &[
        ShapeKind::Prototype,
        ShapeKind::Definition,
        ShapeKind::Unsupported,
        ShapeKind::Unresolvable,
    ];

    fn binding(symbol: &str, shape: ShapeKind) -> Binding {
        Binding {
            attribute: "LuaBinding".to_string(),
            symbol: symbol.to_string(),
            shape,
            span: ByteSpan::new(10, 24),
            line: 3,
        }
    }

    #[test]
    fn shape_serializes_as_display_string() {
        for kind in KINDS {
            let value = serde_json::to_value(kind).expect("serialize shape");
            assert_eq!(value.as_str(), Some(kind.to_string().as_str()));
        }
    }

    #[test]
    fn only_prototype_and_definition_are_resolved_shapes() {
        let resolved: Vec<_> = KINDS.iter().filter(|k| k.is_resolved()).collect();
        assert_eq!(resolved, [&ShapeKind::Prototype, &ShapeKind::Definition]);
    }

    #[test]
    fn renders_pair_separated_by_space() {
        let b = binding("SetDiffuseEnv", ShapeKind::Prototype);
        assert_eq!(b.to_string(), "LuaBinding SetDiffuseEnv");
        assert_eq!(b.pair(), ("LuaBinding", "SetDiffuseEnv"));
        assert!(b.is_resolved());
    }

    #[test]
    fn unresolved_binding_keeps_empty_symbol() {
        let b = binding("", ShapeKind::Unsupported);
        assert!(!b.is_resolved());
        assert_eq!(b.to_string(), "LuaBinding ");
    }
}
