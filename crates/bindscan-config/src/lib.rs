//! # bindscan-config
//!
//! Layered configuration loading for bindscan using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BINDSCAN_*` prefix, `__` as separator)
//! 2. Project-level `.bindscan/config.toml`
//! 3. User-level `~/.config/bindscan/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BINDSCAN_SCAN__STRICT` -> `scan.strict`,
//! `BINDSCAN_OUTPUT__FORMAT` -> `output.format`, etc. Lists use figment's
//! inline syntax: `BINDSCAN_SCAN__ATTRIBUTES='["LuaBinding", "Editor"]'`.
//!
//! # Usage
//!
//! ```no_run
//! use bindscan_config::BindscanConfig;
//!
//! let config = BindscanConfig::load_with_dotenv().expect("config");
//! if config.scan.strict {
//!     println!("units with syntax errors will fail");
//! }
//! ```

mod error;
mod output;
mod scan;

pub use error::ConfigError;
pub use output::{OutputConfig, OutputFormat};
pub use scan::ScanConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BindscanConfig {
    #[serde(default)]
    pub scan: ScanConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl BindscanConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError` if extraction fails or a value is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.scan.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".bindscan/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("BINDSCAN_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("bindscan").join("config.toml"))
    }
}
