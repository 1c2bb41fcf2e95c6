//! Source scanning and per-file checking.
//!
//! The driver turns a [`ResolvedConfig`] into the list of files to check,
//! checks them in parallel (one [`AnalysisSession`] per file) and returns
//! the results in path order.

use anyhow::{Context, Result, bail};
use globset::{Glob, GlobSet, GlobSetBuilder};
use jsl_checker::{AnalysisSession, CheckerOptions};
use jsl_common::{Diagnostic, DiagnosticKind};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::ResolvedConfig;

/// Package description files carry no code to check.
const PACKAGE_INFO: &str = "package-info.js";

const SOURCE_EXTENSION: &str = "js";

/// Diagnostics of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub path: PathBuf,
    /// Name used in diagnostics.
    pub name: String,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Default)]
pub struct RunResult {
    pub files: Vec<CheckedFile>,
}

impl RunResult {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn diagnostic_count(&self) -> usize {
        self.files.iter().map(|file| file.diagnostics.len()).sum()
    }

    pub fn has_diagnostics(&self) -> bool {
        self.files.iter().any(|file| !file.diagnostics.is_empty())
    }
}

// =============================================================================
// Scanning
// =============================================================================

/// Walks a source tree for checkable files.
pub struct SourceScanner {
    root: PathBuf,
    excluded_dirs: Vec<PathBuf>,
    patterns: GlobSet,
}

impl SourceScanner {
    pub fn new(root: &Path, excludes: &[String], patterns: &[String]) -> Result<SourceScanner> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("invalid exclude pattern: {pattern}"))?;
            builder.add(glob);
        }
        Ok(SourceScanner {
            root: root.to_path_buf(),
            excluded_dirs: excludes
                .iter()
                .map(|package| package_dir(root, package))
                .collect(),
            patterns: builder.build().context("failed to build exclude patterns")?,
        })
    }

    /// All checkable files under the root, sorted by path.
    pub fn scan(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            bail!("source path is not a directory: {}", self.root.display());
        }
        let mut files = Vec::new();
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || self.keep_entry(entry));
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(error) => {
                    warn!(%error, "skipping unreadable entry");
                    continue;
                }
            };
            if entry.file_type().is_file() && self.is_source_file(entry.path()) {
                files.push(entry.into_path());
            }
        }
        debug!(root = %self.root.display(), files = files.len(), "scanned source path");
        Ok(files)
    }

    /// Hidden entries and excluded packages are pruned with their subtrees.
    fn keep_entry(&self, entry: &DirEntry) -> bool {
        let hidden = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'));
        if hidden {
            return false;
        }
        !(entry.file_type().is_dir() && self.excluded_dirs.iter().any(|dir| dir == entry.path()))
    }

    fn is_source_file(&self, path: &Path) -> bool {
        if path.extension().and_then(|ext| ext.to_str()) != Some(SOURCE_EXTENSION) {
            return false;
        }
        if path.file_name().and_then(|name| name.to_str()) == Some(PACKAGE_INFO) {
            return false;
        }
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        !self.patterns.is_match(relative)
    }
}

/// Directory of a dotted package under `root`: `js.ua` is `<root>/js/ua`.
pub fn package_dir(root: &Path, package: &str) -> PathBuf {
    package
        .split('.')
        .filter(|segment| !segment.is_empty())
        .fold(root.to_path_buf(), |dir, segment| dir.join(segment))
}

/// Files a run checks: the explicit files, or the scanned source path.
pub fn collect_source_files(config: &ResolvedConfig) -> Result<Vec<PathBuf>> {
    if !config.files.is_empty() {
        return Ok(config.files.clone());
    }
    SourceScanner::new(&config.sourcepath, &config.excludes, &config.exclude_patterns)?.scan()
}

// =============================================================================
// Checking
// =============================================================================

/// Check one file with a fresh session.
pub fn check_file(path: &Path, display_name: &str, options: &CheckerOptions) -> Result<CheckedFile> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read source file: {}", path.display()))?;
    let diagnostics = match String::from_utf8(bytes) {
        Ok(source_text) => AnalysisSession::new(options.clone())
            .check_source(display_name, source_text)
            .with_context(|| format!("failed to check {display_name}"))?,
        Err(error) => {
            warn!(file = display_name, %error, "source is not valid UTF-8");
            vec![Diagnostic::new(
                DiagnosticKind::BadSyntax,
                display_name,
                undecodable_line(error.as_bytes(), error.utf8_error().valid_up_to()),
                Some("Source is not valid UTF-8."),
            )]
        }
    };
    info!(file = display_name, diagnostics = diagnostics.len(), "checked");
    Ok(CheckedFile {
        path: path.to_path_buf(),
        name: display_name.to_string(),
        diagnostics,
    })
}

/// One-based line of the first undecodable byte.
fn undecodable_line(bytes: &[u8], offset: usize) -> u32 {
    let newlines = bytes[..offset].iter().filter(|&&byte| byte == b'\n').count();
    u32::try_from(newlines).map_or(u32::MAX, |count| count.saturating_add(1))
}

/// Check `paths` in parallel; results are ordered by path.
pub fn check_files(paths: &[PathBuf], options: &CheckerOptions, cwd: &Path) -> Result<Vec<CheckedFile>> {
    let mut results = paths
        .par_iter()
        .map(|path| check_file(path, &display_name(path, cwd), options))
        .collect::<Result<Vec<_>>>()?;
    results.sort_by(|left, right| left.path.cmp(&right.path));
    Ok(results)
}

/// Collect and check the files of a run.
pub fn run(config: &ResolvedConfig, cwd: &Path) -> Result<RunResult> {
    let paths = collect_source_files(config)?;
    let files = match config.threads {
        Some(threads) => rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("failed to build worker pool")?
            .install(|| check_files(&paths, &config.options, cwd))?,
        None => check_files(&paths, &config.options, cwd)?,
    };
    Ok(RunResult { files })
}

/// Path as shown in diagnostics: relative to `cwd` when below it.
pub fn display_name(path: &Path, cwd: &Path) -> String {
    path.strip_prefix(cwd).unwrap_or(path).display().to_string()
}
