use anyhow::{Context, bail};
use bindscan_config::BindscanConfig;
use bindscan_core::{BatchReport, Severity, UnitReport};
use bindscan_parser::{ExtractOptions, extract_paths};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::output;
use crate::walk::{self, WalkOptions};

/// Settings for one scan after flags are layered over config.
#[derive(Debug, Clone)]
struct ScanPlan {
    attributes: Vec<String>,
    walk: WalkOptions,
    options: ExtractOptions,
    show_unresolved: bool,
}

impl ScanPlan {
    fn new(args: &ScanArgs, config: BindscanConfig) -> Self {
        let attributes = if args.attributes.is_empty() {
            config.scan.attributes
        } else {
            args.attributes.clone()
        };
        Self {
            attributes,
            walk: WalkOptions {
                extensions: config.scan.extensions,
                follow_gitignore: config.scan.follow_gitignore && !args.no_gitignore,
            },
            options: ExtractOptions {
                strict: config.scan.strict || args.strict,
            },
            show_unresolved: config.output.show_unresolved && !args.hide_unresolved,
        }
    }
}

/// Handle `bindscan scan`.
pub fn handle(args: &ScanArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let config = BindscanConfig::load_with_dotenv().context("failed to load bindscan config")?;
    let format = flags.format.unwrap_or(config.output.format);
    let plan = ScanPlan::new(args, config);

    let sources = walk::collect_sources(&args.paths, &plan.walk)?;
    tracing::debug!(units = sources.len(), strict = plan.options.strict, "scanning");

    let mut units = extract_paths(&sources, plan.options);
    for unit in &mut units {
        unit.retain_attributes(&plan.attributes);
        log_diagnostics(unit);
    }
    let report = BatchReport::from_units(units);

    output::output(&report, format, plan.show_unresolved)?;

    if report.has_failures() {
        bail!(
            "{} of {} units failed to extract",
            report.summary.failed_units,
            report.summary.units
        );
    }
    if args.deny_unresolved && report.has_unresolved() {
        bail!(
            "{} bindings have no resolvable symbol",
            report.summary.unresolved
        );
    }
    Ok(())
}

fn log_diagnostics(unit: &UnitReport) {
    for diagnostic in &unit.diagnostics {
        match diagnostic.severity {
            Severity::Info => tracing::info!(path = %unit.path, "{diagnostic}"),
            Severity::Warning => tracing::warn!(path = %unit.path, "{diagnostic}"),
            Severity::Error => tracing::error!(path = %unit.path, "{diagnostic}"),
        }
    }
}
