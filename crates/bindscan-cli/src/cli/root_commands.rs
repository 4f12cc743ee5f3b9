use std::path::PathBuf;

use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Extract marker attributes from C++ files or directories.
    Scan(ScanArgs),
    /// Print the effective configuration.
    Config,
    /// Print the JSON schema of the scan report.
    Schema,
}

#[derive(Clone, Debug, Args)]
pub struct ScanArgs {
    /// Files or directories to scan.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Only report these attribute names (repeatable; overrides config).
    #[arg(short, long = "attribute")]
    pub attributes: Vec<String>,

    /// Fail units that contain syntax errors.
    #[arg(long)]
    pub strict: bool,

    /// Walk directories without honoring .gitignore or hidden-file rules.
    #[arg(long)]
    pub no_gitignore: bool,

    /// Omit bindings with an empty symbol from the output.
    #[arg(long)]
    pub hide_unresolved: bool,

    /// Exit with an error when any binding has an empty symbol.
    #[arg(long)]
    pub deny_unresolved: bool,
}
