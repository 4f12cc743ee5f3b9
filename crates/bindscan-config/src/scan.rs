//! Extraction settings.

use bindscan_parser::CPP_EXTENSIONS;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_extensions() -> Vec<String> {
    CPP_EXTENSIONS.iter().map(ToString::to_string).collect()
}

const fn default_follow_gitignore() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Attribute names to report (e.g., `["LuaBinding"]`). Empty reports all.
    #[serde(default)]
    pub attributes: Vec<String>,

    /// File extensions (without the dot) treated as C++ units.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Fail units the grammar had to recover instead of extracting from them.
    #[serde(default)]
    pub strict: bool,

    /// Respect `.gitignore` and hidden-file rules when walking directories.
    #[serde(default = "default_follow_gitignore")]
    pub follow_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            attributes: Vec::new(),
            extensions: default_extensions(),
            strict: false,
            follow_gitignore: default_follow_gitignore(),
        }
    }
}

impl ScanConfig {
    /// Reject extensions that are empty or written with a dot.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidValue` naming the first bad entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(bad) = self
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.contains('.'))
        {
            return Err(ConfigError::InvalidValue {
                field: "scan.extensions".to_string(),
                reason: format!("'{bad}' must be a bare extension such as 'hpp'"),
            });
        }
        if let Some(bad) = self.attributes.iter().find(|name| name.trim().is_empty()) {
            return Err(ConfigError::InvalidValue {
                field: "scan.attributes".to_string(),
                reason: format!("'{bad}' is not an attribute name"),
            });
        }
        Ok(())
    }
}
