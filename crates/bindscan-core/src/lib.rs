//! # bindscan-core
//!
//! Result types shared across bindscan crates:
//! - [`Binding`]: one resolved `(attribute, symbol)` pair plus the shape it came from
//! - [`Diagnostic`]: a per-node fault surfaced alongside the bindings of a unit
//! - [`UnitReport`] / [`BatchReport`]: per-file and per-run outcomes as emitted by the CLI
//!
//! Every type here is plain data. Serialization uses snake_case tags so the JSON
//! output stays stable for downstream binding generators.

pub mod binding;
pub mod diagnostic;
pub mod report;
pub mod span;

pub use binding::{Binding, ShapeKind};
pub use diagnostic::{Diagnostic, DiagnosticKind, Severity};
pub use report::{BatchReport, BatchSummary, UnitReport};
pub use span::ByteSpan;
