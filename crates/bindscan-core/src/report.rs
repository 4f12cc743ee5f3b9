//! Per-unit and per-batch reports.
//!
//! A unit either extracted (bindings + diagnostics) or failed (error message);
//! a failed unit never hides the results of its siblings in the same batch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{Binding, Diagnostic};

/// Outcome of extracting one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct UnitReport {
    pub path: String,
    pub bindings: Vec<Binding>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl UnitReport {
    #[must_use]
    pub fn extracted(
        path: impl Into<String>,
        bindings: Vec<Binding>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        Self {
            path: path.into(),
            bindings,
            diagnostics,
            error: None,
        }
    }

    #[must_use]
    pub fn failed(path: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self {
            path: path.into(),
            bindings: Vec::new(),
            diagnostics: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        self.error.is_some()
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter().filter(|b| !b.is_resolved())
    }

    /// Keep only bindings whose attribute is in `names`; an empty list keeps
    /// everything.
    pub fn retain_attributes<S: AsRef<str>>(&mut self, names: &[S]) {
        if names.is_empty() {
            return;
        }
        self.bindings
            .retain(|b| names.iter().any(|name| name.as_ref() == b.attribute));
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchSummary {
    pub units: usize,
    pub failed_units: usize,
    pub bindings: usize,
    pub unresolved: usize,
}

/// All unit reports of one run, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct BatchReport {
    pub units: Vec<UnitReport>,
    pub summary: BatchSummary,
}

impl BatchReport {
    #[must_use]
    pub fn from_units(units: Vec<UnitReport>) -> Self {
        let summary = BatchSummary {
            units: units.len(),
            failed_units: units.iter().filter(|u| u.is_failed()).count(),
            bindings: units.iter().map(|u| u.bindings.len()).sum(),
            unresolved: units.iter().map(|u| u.unresolved().count()).sum(),
        };
        Self { units, summary }
    }

    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.summary.failed_units > 0
    }

    #[must_use]
    pub const fn has_unresolved(&self) -> bool {
        self.summary.unresolved > 0
    }
}
