//! # bindscan-parser
//!
//! Marker attribute extraction for C++ sources.
//!
//! Source text is parsed with the tree-sitter C++ grammar bundled by
//! `ast-grep-language`, copied into an index-addressed [`SyntaxTree`], and
//! scanned for `[[Attribute]]` markers. Each marker is resolved to the
//! function it annotates:
//!
//! ```text
//! class Camera {
//!     [[LuaBinding]]
//!     void SetDiffuseEnv(Texture* cubemap);   // -> ("LuaBinding", "SetDiffuseEnv")
//! };
//! ```
//!
//! Entry points:
//! - [`extract_source`]: one unit of text to an [`Extraction`]
//! - [`extract_batch`] / [`extract_paths`]: many units in parallel, one
//!   [`UnitReport`](bindscan_core::UnitReport) each

pub mod batch;
pub mod error;
pub mod extract;
pub mod language;
pub mod syntax;

pub use batch::{SourceUnit, extract_batch, extract_paths, extract_unit, read_unit};
pub use error::ParserError;
pub use extract::{
    DeclarationShape, ExtractOptions, Extraction, Marker, MarkerFault, extract_source,
    extract_tree,
};
pub use language::{CPP_EXTENSIONS, has_extension, is_cpp_path, parse_cpp};
pub use syntax::{NodeId, SyntaxTree};
