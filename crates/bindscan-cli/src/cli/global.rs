use bindscan_config::OutputFormat;
use clap::ValueEnum;

/// `--format` values.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    Raw,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
            FormatArg::Raw => Self::Raw,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    /// Overrides `output.format` from config when set.
    pub format: Option<OutputFormat>,
    pub quiet: bool,
    pub verbose: bool,
}
