//! Batch processing of snapshot directories.
//!
//! Discovers `*.html` snapshots directly inside an input directory, parses
//! each one, and writes one pretty-printed JSON artifact per snapshot into
//! the output directory. Files are processed independently: a snapshot
//! that fails to serialize or write is logged and counted, and the batch
//! moves on. Only an unusable input directory is an error to the caller.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::result::ParseResult;

/// Outcome counts for one batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Artifacts written successfully.
    pub written: usize,
    /// Snapshots whose artifact could not be written.
    pub failed: usize,
}

/// List the snapshot files directly inside `dir`, sorted by path.
///
/// Only regular files with an `.html` extension count, compared
/// case-insensitively. Subdirectories are not descended into. Sorting
/// keeps batch output order deterministic across platforms.
pub fn collect_snapshots(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| Error::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_html_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// Parse every snapshot in `input` and write artifacts into `output`.
///
/// The output directory is created on demand. Parsing itself never fails
/// (an unreadable snapshot degrades to an empty mapping); only
/// serialization or write failures count a snapshot as failed.
pub fn process_dir(input: &Path, output: &Path) -> Result<BatchSummary> {
    let snapshots = collect_snapshots(input)?;
    fs::create_dir_all(output).map_err(|source| Error::Io {
        path: output.to_path_buf(),
        source,
    })?;

    let mut summary = BatchSummary::default();
    for snapshot in &snapshots {
        let parsed = crate::parse_file(snapshot);
        match write_artifact(&parsed, snapshot, output) {
            Ok(artifact) => {
                debug!(
                    snapshot = %snapshot.display(),
                    artifact = %artifact.display(),
                    records = parsed.records().len(),
                    "artifact written"
                );
                summary.written += 1;
            }
            Err(err) => {
                warn!(snapshot = %snapshot.display(), error = %err, "skipping snapshot");
                summary.failed += 1;
            }
        }
    }

    Ok(summary)
}

/// Serialize one parse result next to its snapshot's basename.
fn write_artifact(parsed: &ParseResult, snapshot: &Path, output: &Path) -> Result<PathBuf> {
    let artifact = artifact_path(snapshot, output);
    let json = serde_json::to_string_pretty(parsed)?;
    fs::write(&artifact, json).map_err(|source| Error::Io {
        path: artifact.clone(),
        source,
    })?;
    Ok(artifact)
}

/// `<output>/<snapshot basename>.json`
fn artifact_path(snapshot: &Path, output: &Path) -> PathBuf {
    let name = snapshot.file_name().unwrap_or_else(|| OsStr::new("snapshot"));
    output.join(Path::new(name).with_extension("json"))
}

fn has_html_extension(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_extension_is_case_insensitive() {
        assert!(has_html_extension(Path::new("files/a.html")));
        assert!(has_html_extension(Path::new("files/b.HTML")));
        assert!(has_html_extension(Path::new("files/c.HtMl")));
        assert!(!has_html_extension(Path::new("files/d.htm")));
        assert!(!has_html_extension(Path::new("files/notes.txt")));
        assert!(!has_html_extension(Path::new("files/html")));
    }

    #[test]
    fn test_artifact_path_swaps_extension() {
        let path = artifact_path(Path::new("files/one.html"), Path::new("out"));
        assert_eq!(path, Path::new("out/one.json"));
    }

    #[test]
    fn test_collect_snapshots_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.html"), "x").unwrap();
        fs::write(dir.path().join("a.HTML"), "x").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("nested.html")).unwrap();

        let files = collect_snapshots(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["a.HTML", "b.html"]);
    }

    #[test]
    fn test_collect_snapshots_missing_dir_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");

        let err = collect_snapshots(&missing).unwrap_err();
        assert!(err.to_string().contains("absent"));
    }
}
