//! tree-sitter-cpp node kinds and field names the extractor relies on.

pub const ATTRIBUTE_DECLARATION: &str = "attribute_declaration";
pub const ATTRIBUTE: &str = "attribute";

pub const FIELD_DECLARATION: &str = "field_declaration";
pub const FUNCTION_DEFINITION: &str = "function_definition";
/// Older grammar releases emit this for in-class bodies instead of aliasing
/// it to `function_definition`.
pub const INLINE_METHOD_DEFINITION: &str = "inline_method_definition";

pub const FUNCTION_DECLARATOR: &str = "function_declarator";
pub const REFERENCE_DECLARATOR: &str = "reference_declarator";
pub const POINTER_DECLARATOR: &str = "pointer_declarator";

pub const FIELD_NAME: &str = "name";
pub const FIELD_DECLARATOR: &str = "declarator";
