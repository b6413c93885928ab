//! File-Level Driver
//!
//! Scans one docs directory (non-recursive), normalizes each markdown
//! file in memory, and writes back only when the content changed.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::Config;
use crate::normalize::normalize_document;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    /// The normalized text differed and the file was rewritten.
    Fixed,
    /// The file was already normalized; nothing was written.
    Unchanged,
}

/// Totals for one run over the docs directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub fixed: usize,
    pub unchanged: usize,
}

/// Result of a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// Every matching file was processed.
    Completed(RunSummary),
    /// The docs directory does not exist; no file was touched.
    MissingDocsDir,
}

/// List the markdown files directly inside `dir`.
///
/// Subdirectories are not entered; entries without an `md` extension are
/// skipped.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("failed to read an entry of {}", dir.display()))?;
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("md") {
            files.push(path);
        }
    }

    Ok(files)
}

/// Normalize one file in place.
///
/// The file is read fully, normalized, and compared byte for byte; it is
/// rewritten only when the two differ, so an already-clean file keeps
/// both its content and its modification time.
pub fn fix_file(path: &Path) -> Result<FixOutcome> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let normalized = normalize_document(&content);
    if normalized == content {
        log::debug!("{}: already normalized", path.display());
        return Ok(FixOutcome::Unchanged);
    }

    fs::write(path, &normalized)
        .with_context(|| format!("failed to write {}", path.display()))?;
    log::debug!("{}: rewritten", path.display());
    Ok(FixOutcome::Fixed)
}

/// Process every markdown file in the configured docs directory.
///
/// Prints one report line per file. A missing directory aborts the run
/// cleanly before any file access. A read or write failure propagates
/// and halts the batch; files already rewritten stay rewritten.
pub fn run(config: &Config) -> Result<RunStatus> {
    let dir = &config.docs_dir;
    if !dir.exists() {
        return Ok(RunStatus::MissingDocsDir);
    }

    let mut summary = RunSummary::default();
    for path in markdown_files(dir)? {
        match fix_file(&path)? {
            FixOutcome::Fixed => {
                summary.fixed += 1;
                println!("Fixed: {}", path.display());
            }
            FixOutcome::Unchanged => {
                summary.unchanged += 1;
                println!("No changes: {}", path.display());
            }
        }
    }

    Ok(RunStatus::Completed(summary))
}
