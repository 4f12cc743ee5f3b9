//! Output rendering settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<attribute> <symbol>` per line, grouped by unit.
    #[default]
    Text,
    /// Pretty-printed JSON report.
    Json,
    /// Single-line JSON report.
    Raw,
}

const fn default_show_unresolved() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Print bindings whose symbol could not be resolved.
    #[serde(default = "default_show_unresolved")]
    pub show_unresolved: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_unresolved: default_show_unresolved(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OutputConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_unresolved);
    }
}
