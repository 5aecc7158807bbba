use std::path::{Path, PathBuf};

use std::io;

use anyhow::{Context, Result};
use log::warn;

use super::model::FrequencyMap;
use super::tokenizer::read_keywords;
use crate::error::ScanError;

// ---------------------------------------------------------------------------
// File discovery
// ---------------------------------------------------------------------------

/// List regular files directly inside `dir` whose extension equals
/// `extension`, sorted by path.  Only failing to open the directory itself
/// is an error; unreadable entries are skipped.
pub fn discover_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("listing directory {}", dir.display()))?;
    Ok(select_files(
        dir,
        entries.map(|entry| entry.map(|e| e.path())),
        extension,
    ))
}

/// Keep the regular files with the wanted extension, warning about and
/// dropping entries that could not be read.
fn select_files<I>(dir: &Path, entries: I, extension: &str) -> Vec<PathBuf>
where
    I: IntoIterator<Item = io::Result<PathBuf>>,
{
    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    files
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// What happened to one input file.
#[derive(Debug)]
pub enum FileOutcome {
    Counted { path: PathBuf, tokens: usize },
    Skipped(ScanError),
}

/// Counts across all files plus the per-file outcomes, in processing order.
#[derive(Debug, Default)]
pub struct ScanReport {
    pub counts: FrequencyMap,
    pub outcomes: Vec<FileOutcome>,
}

impl ScanReport {
    pub fn files_counted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, FileOutcome::Counted { .. }))
            .count()
    }

    /// Errors of the files that were skipped, in processing order.
    pub fn skipped(&self) -> impl Iterator<Item = &ScanError> {
        self.outcomes.iter().filter_map(|o| match o {
            FileOutcome::Skipped(e) => Some(e),
            FileOutcome::Counted { .. } => None,
        })
    }

    pub fn files_skipped(&self) -> usize {
        self.skipped().count()
    }
}

/// Tokenize every path in order and fold the keywords into one map.  A file
/// that cannot be read is logged and skipped.
pub fn aggregate_files<P: AsRef<Path>>(paths: &[P], normalize: bool) -> ScanReport {
    let mut report = ScanReport::default();

    for path in paths {
        let path = path.as_ref();
        match read_keywords(path, normalize) {
            Ok(keywords) => {
                let tokens = keywords.len();
                report.counts.merge(keywords.into_iter().collect());
                report.outcomes.push(FileOutcome::Counted {
                    path: path.to_path_buf(),
                    tokens,
                });
            }
            Err(e) => {
                warn!("Failed to read {}: {e}", e.path().display());
                report.outcomes.push(FileOutcome::Skipped(e));
            }
        }
    }

    report
}

/// Scan every file with the given extension directly inside `dir`.  A
/// directory that cannot be listed counts as empty.
pub fn scan_directory(dir: &Path, extension: &str, normalize: bool) -> ScanReport {
    match discover_files(dir, extension) {
        Ok(files) => aggregate_files(&files, normalize),
        Err(e) => {
            warn!("{e:#}");
            ScanReport::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn aggregate_keywords(dir: &Path, normalize: bool) -> FrequencyMap {
        scan_directory(dir, "txt", normalize).counts
    }

    fn write(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn counts_across_files_case_insensitively() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.txt", b"Cat, Dog, bird");
        write(&dir, "b.txt", b"dog, fish, cat,");

        let counts = aggregate_keywords(dir.path(), true);
        assert_eq!(counts.get("cat"), 2);
        assert_eq!(counts.get("dog"), 2);
        assert_eq!(counts.get("bird"), 1);
        assert_eq!(counts.get("fish"), 1);
        assert_eq!(counts.len(), 4);
        assert_eq!(counts.total(), 6);
    }

    #[test]
    fn discovery_is_sorted_and_filters_extension() {
        let dir = TempDir::new().unwrap();
        write(&dir, "b.txt", b"x");
        write(&dir, "a.txt", b"y");
        write(&dir, "notes.md", b"z");
        write(&dir, "upper.TXT", b"w");
        write(&dir, "archive.txt.bak", b"v");
        fs::create_dir(dir.path().join("nested.txt")).unwrap();
        fs::write(dir.path().join("nested.txt").join("inner.txt"), b"u").unwrap();

        let files = discover_files(dir.path(), "txt").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn bad_directory_entry_does_not_drop_the_listing() {
        let dir = TempDir::new().unwrap();
        let b = write(&dir, "b.txt", b"x");
        let a = write(&dir, "a.txt", b"y");
        let entries = vec![
            Ok(b.clone()),
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")),
            Ok(a.clone()),
        ];

        let files = select_files(dir.path(), entries, "txt");
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn unreadable_file_is_skipped() {
        let dir = TempDir::new().unwrap();
        let good = write(&dir, "good.txt", b"alpha, beta");
        let missing = dir.path().join("gone.txt");

        let report = aggregate_files(&[missing.clone(), good], true);
        assert_eq!(report.files_counted(), 1);
        assert_eq!(report.files_skipped(), 1);
        assert_eq!(report.counts.total(), 2);
        match &report.outcomes[0] {
            FileOutcome::Skipped(e) => assert_eq!(e.path(), &missing),
            other => panic!("expected skip, got {other:?}"),
        }
        let skipped: Vec<_> = report.skipped().map(|e| e.path().clone()).collect();
        assert_eq!(skipped, vec![missing]);
    }

    #[test]
    fn counts_do_not_depend_on_file_order() {
        let dir = TempDir::new().unwrap();
        let a = write(&dir, "a.txt", b"one, two, two");
        let b = write(&dir, "b.txt", b"Two, three");
        let c = write(&dir, "c.txt", b" , THREE ,one");

        let forward = aggregate_files(&[&a, &b, &c], true).counts;
        let backward = aggregate_files(&[&c, &b, &a], true).counts;
        assert_eq!(forward, backward);
        assert_eq!(forward.get("two"), 3);
    }

    #[test]
    fn non_utf8_file_still_contributes() {
        let dir = TempDir::new().unwrap();
        write(&dir, "latin.txt", b"Caf\xE9, tea");
        write(&dir, "plain.txt", b"tea");

        let counts = aggregate_keywords(dir.path(), true);
        assert_eq!(counts.get("café"), 1);
        assert_eq!(counts.get("tea"), 2);
    }

    #[test]
    fn empty_or_missing_directory_gives_empty_map() {
        let dir = TempDir::new().unwrap();
        assert!(aggregate_keywords(dir.path(), true).is_empty());
        assert!(aggregate_keywords(&dir.path().join("nope"), true).is_empty());
    }

    #[test]
    fn separators_only_file_contributes_nothing() {
        let dir = TempDir::new().unwrap();
        write(&dir, "blank.txt", b" , ,  ,");
        let report = scan_directory(dir.path(), "txt", true);
        assert_eq!(report.files_counted(), 1);
        assert!(report.counts.is_empty());
    }
}
