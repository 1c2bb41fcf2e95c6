//! Configuration file support.
//!
//! A run is configured by the command line and an optional `jsl.json`:
//!
//! ```json
//! {
//!   "sourcepath": "src",
//!   "excludes": ["js.ua"],
//!   "excludePatterns": ["**/generated/*.js"],
//!   "legacy": false,
//!   "requireSuper": false,
//!   "verbose": false
//! }
//! ```
//!
//! Command-line values override file values and lists from both are merged.
//! Paths in the file are relative to the file's directory.

use anyhow::{Context, Result, bail};
use jsl_checker::CheckerOptions;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::args::CliArgs;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "jsl.json";

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JslConfig {
    #[serde(default)]
    pub sourcepath: Option<PathBuf>,
    #[serde(default)]
    pub excludes: Vec<String>,
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
    #[serde(default)]
    pub legacy: Option<bool>,
    #[serde(default)]
    pub require_super: Option<bool>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

pub fn parse_config(source: &str) -> Result<JslConfig> {
    serde_json::from_str(source).context("invalid jsl configuration")
}

pub fn load_config(path: &Path) -> Result<JslConfig> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    parse_config(&source).with_context(|| format!("failed to parse config: {}", path.display()))
}

/// Path of the configuration file for a run, if any.
///
/// An explicit `--config` must exist; the implicit `jsl.json` is optional.
pub fn resolve_config_path(cwd: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        let path = cwd.join(path);
        if !path.is_file() {
            bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path));
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    Ok(candidate.is_file().then_some(candidate))
}

/// Effective settings of a run, with absolute paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Explicit files; when non-empty the source path is not scanned.
    pub files: Vec<PathBuf>,
    pub sourcepath: PathBuf,
    pub excludes: Vec<String>,
    pub exclude_patterns: Vec<String>,
    pub verbose: bool,
    pub threads: Option<usize>,
    pub options: CheckerOptions,
}

/// Merge command-line arguments over a configuration file loaded from
/// `config_dir`. Without any source path the working directory is scanned.
pub fn resolve_config(
    args: &CliArgs,
    config: Option<JslConfig>,
    config_dir: &Path,
    cwd: &Path,
) -> ResolvedConfig {
    let config = config.unwrap_or_default();

    let sourcepath = match (&args.sourcepath, &config.sourcepath) {
        (Some(path), _) => cwd.join(path),
        (None, Some(path)) => config_dir.join(path),
        (None, None) => cwd.to_path_buf(),
    };

    ResolvedConfig {
        files: args.files.iter().map(|file| cwd.join(file)).collect(),
        sourcepath,
        excludes: merge_lists(config.excludes, &args.excludes),
        exclude_patterns: merge_lists(config.exclude_patterns, &args.exclude_patterns),
        verbose: args.verbose || config.verbose.unwrap_or(false),
        threads: args.threads,
        options: CheckerOptions {
            legacy: args.legacy || config.legacy.unwrap_or(false),
            require_super: args.require_super || config.require_super.unwrap_or(false),
        },
    }
}

/// File entries first, then new command-line entries.
fn merge_lists(mut base: Vec<String>, extra: &[String]) -> Vec<String> {
    for item in extra {
        if !base.contains(item) {
            base.push(item.clone());
        }
    }
    base
}

/// Load the configuration for `args` and resolve the run settings.
pub fn load_run_config(args: &CliArgs, cwd: &Path) -> Result<ResolvedConfig> {
    let config_path = resolve_config_path(cwd, args.config.as_deref())?;
    let config = config_path.as_deref().map(load_config).transpose()?;
    let config_dir = config_path
        .as_deref()
        .and_then(Path::parent)
        .unwrap_or(cwd);
    Ok(resolve_config(args, config, config_dir, cwd))
}
