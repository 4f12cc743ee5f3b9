use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{FormatArg, GlobalFlags};
pub use root_commands::Commands;

/// Top-level CLI parser for the `bindscan` binary.
#[derive(Debug, Parser)]
#[command(
    name = "bindscan",
    version,
    about = "Extract [[attribute]]-tagged C++ declarations for binding generators"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: text, json, raw (defaults to config `output.format`)
    #[arg(short, long, global = true)]
    pub format: Option<FormatArg>,

    /// Quiet mode (errors only on stderr)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format.map(Into::into),
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use bindscan_config::OutputFormat;
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, FormatArg};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["bindscan", "--format", "json", "--verbose", "scan", "src"])
            .expect("cli should parse");

        assert_eq!(cli.format, Some(FormatArg::Json));
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Scan(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["bindscan", "scan", "src", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.global_flags().format, Some(OutputFormat::Raw));
        assert!(cli.quiet);
    }

    #[test]
    fn format_defaults_to_config() {
        let cli = Cli::try_parse_from(["bindscan", "config"]).expect("cli should parse");
        assert_eq!(cli.global_flags().format, None);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["bindscan", "--format", "xml", "config"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn scan_requires_a_path() {
        assert!(Cli::try_parse_from(["bindscan", "scan"]).is_err());
    }

    #[test]
    fn scan_collects_repeated_attribute_filters() {
        let cli = Cli::try_parse_from([
            "bindscan",
            "scan",
            "Source",
            "Include",
            "--attribute",
            "LuaBinding",
            "-a",
            "Editor",
            "--strict",
        ])
        .expect("cli should parse");

        let Commands::Scan(args) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.attributes, ["LuaBinding", "Editor"]);
        assert!(args.strict);
        assert!(!args.no_gitignore);
    }
}
