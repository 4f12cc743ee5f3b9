use anyhow::Context;
use bindscan_config::{BindscanConfig, OutputFormat};

use crate::cli::GlobalFlags;

/// Handle `bindscan config`: print the merged configuration.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = BindscanConfig::load_with_dotenv().context("failed to load bindscan config")?;
    let rendered = match flags.format.unwrap_or(OutputFormat::Json) {
        OutputFormat::Raw => serde_json::to_string(&config)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(&config)?,
    };
    println!("{rendered}");
    Ok(())
}
