//! Source file discovery.
//!
//! Explicit file arguments are always scanned. Directories are walked with the
//! `ignore` crate, keeping only files whose extension is in the configured
//! list. Walk order is sorted by file name so reports are reproducible.

use std::path::{Path, PathBuf};

use anyhow::bail;
use bindscan_parser::has_extension;
use ignore::WalkBuilder;

/// Walking options resolved from config and flags.
#[derive(Debug, Clone)]
pub struct WalkOptions {
    pub extensions: Vec<String>,
    /// Respect `.gitignore`, `.ignore` and hidden-file rules.
    pub follow_gitignore: bool,
}

/// Expand `paths` into the list of source files to scan.
///
/// # Errors
/// Fails if a path does not exist.
pub fn collect_sources(paths: &[PathBuf], options: &WalkOptions) -> anyhow::Result<Vec<PathBuf>> {
    let mut sources = Vec::new();
    for path in paths {
        if path.is_file() {
            sources.push(path.clone());
        } else if path.is_dir() {
            walk_dir(path, options, &mut sources);
        } else {
            bail!("invalid path '{}': no such file or directory", path.display());
        }
    }
    Ok(sources)
}

fn walk_dir(root: &Path, options: &WalkOptions, sources: &mut Vec<PathBuf>) {
    let mut builder = WalkBuilder::new(root);
    if options.follow_gitignore {
        builder.hidden(true);
        builder.add_custom_ignore_filename(".bindscanignore");
    } else {
        builder.standard_filters(false);
        builder.hidden(false);
    }
    builder.sort_by_file_name(|a, b| a.cmp(b));

    for entry in builder.build() {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                if is_file && has_extension(entry.path(), &options.extensions) {
                    sources.push(entry.into_path());
                }
            }
            Err(error) => tracing::warn!(%error, "skipping unreadable directory entry"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn options(follow_gitignore: bool) -> WalkOptions {
        WalkOptions {
            extensions: vec!["hpp".to_string(), "cpp".to_string()],
            follow_gitignore,
        }
    }

    fn names(paths: &[PathBuf], root: &Path) -> Vec<String> {
        paths
            .iter()
            .map(|p| p.strip_prefix(root).unwrap_or(p).display().to_string())
            .collect()
    }

    #[test]
    fn walks_matching_extensions_in_sorted_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("Render")).expect("mkdir");
        fs::write(dir.path().join("Camera.hpp"), "").expect("write");
        fs::write(dir.path().join("Camera.cpp"), "").expect("write");
        fs::write(dir.path().join("README.md"), "").expect("write");
        fs::write(dir.path().join("Render/Graph.hpp"), "").expect("write");

        let found = collect_sources(&[dir.path().to_path_buf()], &options(true)).expect("walk");

        assert_eq!(
            names(&found, dir.path()),
            ["Camera.cpp", "Camera.hpp", "Render/Graph.hpp"]
        );
    }

    #[test]
    fn ignore_file_is_honored_unless_disabled() {
        let dir = tempfile::tempdir().expect("tempdir");
        fs::create_dir(dir.path().join("generated")).expect("mkdir");
        fs::write(dir.path().join(".bindscanignore"), "generated/\n").expect("write");
        fs::write(dir.path().join("Camera.hpp"), "").expect("write");
        fs::write(dir.path().join("generated/Bindings.hpp"), "").expect("write");

        let root = [dir.path().to_path_buf()];
        let filtered = collect_sources(&root, &options(true)).expect("walk");
        let everything = collect_sources(&root, &options(false)).expect("walk");

        assert_eq!(names(&filtered, dir.path()), ["Camera.hpp"]);
        assert_eq!(
            names(&everything, dir.path()),
            ["Camera.hpp", "generated/Bindings.hpp"]
        );
    }

    #[test]
    fn explicit_file_is_scanned_regardless_of_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let file = dir.path().join("Camera.txt");
        fs::write(&file, "").expect("write");

        let found = collect_sources(&[file.clone()], &options(true)).expect("walk");
        assert_eq!(found, [file]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = collect_sources(&[missing], &options(true)).expect_err("missing path");
        assert!(err.to_string().contains("no such file or directory"));
    }
}
