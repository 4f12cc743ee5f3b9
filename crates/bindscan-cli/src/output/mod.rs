//! Report rendering.
//!
//! Text output is the line-oriented `<attribute> <symbol>` form consumed by
//! binding generators, one `# <path>` header per unit. JSON and raw emit the
//! whole [`BatchReport`].

use std::fmt::Write as _;

use bindscan_config::OutputFormat;
use bindscan_core::BatchReport;

/// Render a batch report in the requested format.
pub fn render(
    report: &BatchReport,
    format: OutputFormat,
    show_unresolved: bool,
) -> anyhow::Result<String> {
    let visible;
    let report = if show_unresolved {
        report
    } else {
        visible = without_unresolved(report);
        &visible
    };

    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Raw => Ok(serde_json::to_string(report)?),
    }
}

/// Print a batch report in the requested format.
pub fn output(report: &BatchReport, format: OutputFormat, show_unresolved: bool) -> anyhow::Result<()> {
    let rendered = render(report, format, show_unresolved)?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }
    Ok(())
}

// Summary counts stay as extracted so callers can still see what was hidden.
fn without_unresolved(report: &BatchReport) -> BatchReport {
    let mut report = report.clone();
    for unit in &mut report.units {
        unit.bindings.retain(bindscan_core::Binding::is_resolved);
    }
    report
}

fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for unit in &report.units {
        if unit.bindings.is_empty() && !unit.is_failed() {
            continue;
        }
        if !out.is_empty() {
            out.push('\n');
        }
        match &unit.error {
            Some(error) => {
                let _ = writeln!(out, "# {}: error: {error}", unit.path);
            }
            None => {
                let _ = writeln!(out, "# {}", unit.path);
            }
        }
        for binding in &unit.bindings {
            let _ = writeln!(out, "{binding}");
        }
    }
    out.truncate(out.trim_end().len());
    out
}
