use super::*;

mod properties;

const CAMERA: &str = include_str!("../../../tests/fixtures/Camera.hpp");
const OVERLOADS: &str = include_str!("../../../tests/fixtures/Overloads.hpp");

fn extract(source: &str) -> Extraction {
    extract_source(source, ExtractOptions::default()).expect("extraction should succeed")
}

fn pairs(source: &str) -> Vec<(String, String)> {
    extract(source)
        .bindings
        .into_iter()
        .map(|b| (b.attribute, b.symbol))
        .collect()
}

fn pair(attribute: &str, symbol: &str) -> (String, String) {
    (attribute.to_string(), symbol.to_string())
}

/// Wrap member declarations in a class body.
fn in_class(members: &str) -> String {
    format!("class Camera\n{{\npublic:\n{members}\n}};\n")
}
