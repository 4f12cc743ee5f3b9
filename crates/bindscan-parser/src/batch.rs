//! Multi-unit extraction.
//!
//! Units share nothing, so they are extracted in parallel with rayon. Report
//! order always equals input order, and a unit that fails to read or parse
//! becomes a failed report without affecting its siblings.

use std::path::{Path, PathBuf};

use bindscan_core::UnitReport;
use rayon::prelude::*;

use crate::error::ParserError;
use crate::extract::{ExtractOptions, extract_source};

/// One source file's text, owned for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub text: String,
}

impl SourceUnit {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

/// Read a file as a UTF-8 source unit.
///
/// # Errors
/// Returns `ParserError::Io` or `ParserError::InvalidUtf8`.
pub fn read_unit(path: &Path) -> Result<SourceUnit, ParserError> {
    let bytes = std::fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(SourceUnit::new(path, text))
}

/// Extract one unit into a report, folding failure into the report.
#[must_use]
pub fn extract_unit(unit: &SourceUnit, options: ExtractOptions) -> UnitReport {
    let path = unit.display_path();
    match extract_source(&unit.text, options) {
        Ok(extraction) => {
            tracing::debug!(
                path = %path,
                bindings = extraction.bindings.len(),
                diagnostics = extraction.diagnostics.len(),
                "extracted unit"
            );
            extraction.into_report(path)
        }
        Err(error) => {
            tracing::warn!(path = %path, %error, "unit extraction failed");
            UnitReport::failed(path, error)
        }
    }
}

/// Extract every unit in parallel; reports come back in input order.
#[must_use]
pub fn extract_batch(units: &[SourceUnit], options: ExtractOptions) -> Vec<UnitReport> {
    units
        .par_iter()
        .map(|unit| extract_unit(unit, options))
        .collect()
}

/// Read and extract every path in parallel; unreadable files become failed
/// reports.
#[must_use]
pub fn extract_paths(paths: &[PathBuf], options: ExtractOptions) -> Vec<UnitReport> {
    paths
        .par_iter()
        .map(|path| match read_unit(path) {
            Ok(unit) => extract_unit(&unit, options),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read unit");
                UnitReport::failed(path.display().to_string(), error)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const WIDGET: &str = r"
class Widget
{
public:
    [[LuaBinding]]
    void Show();
};
";

    #[test]
    fn batch_preserves_input_order() {
        let units: Vec<_> = (0..8)
            .map(|i| SourceUnit::new(format!("unit_{i}.hpp"), WIDGET))
            .collect();
        let reports = extract_batch(&units, ExtractOptions::default());
        let paths: Vec<_> = reports.iter().map(|r| r.path.clone()).collect();
        let expected: Vec<_> = (0..8).map(|i| format!("unit_{i}.hpp")).collect();
        assert_eq!(paths, expected);
        assert!(reports.iter().all(|r| r.bindings.len() == 1));
    }

    #[test]
    fn strict_failure_does_not_affect_siblings() {
        let units = vec![
            SourceUnit::new("ok.hpp", WIDGET),
            SourceUnit::new("broken.hpp", "class Broken { void f( };"),
            SourceUnit::new("also_ok.hpp", WIDGET),
        ];
        let reports = extract_batch(&units, ExtractOptions { strict: true });

        assert!(!reports[0].is_failed());
        assert!(reports[1].is_failed());
        assert!(!reports[2].is_failed());
        assert_eq!(reports[2].bindings[0].pair(), ("LuaBinding", "Show"));
    }

    #[test]
    fn unreadable_path_becomes_failed_report() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("Widget.hpp");
        std::fs::write(&good, WIDGET).expect("write fixture");
        let missing = dir.path().join("Missing.hpp");
        let binary = dir.path().join("Binary.hpp");
        std::fs::write(&binary, [0xff, 0xfe, 0x00]).expect("write binary");

        let reports = extract_paths(&[good, missing, binary], ExtractOptions::default());

        assert!(!reports[0].is_failed());
        assert!(reports[1].error.as_deref().is_some_and(|e| e.starts_with("IO error")));
        assert!(
            reports[2]
                .error
                .as_deref()
                .is_some_and(|e| e.starts_with("Source is not valid UTF-8"))
        );
    }

    #[test]
    fn read_unit_keeps_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("Camera.hpp");
        std::fs::write(&path, "class Camera {};").expect("write fixture");
        let unit = read_unit(&path).expect("read unit");
        assert_eq!(unit.path, path);
        assert_eq!(unit.text, "class Camera {};");
    }
}
