use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the jsl binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsl",
    version,
    about = "Semantic checker for the j(s)-script JavaScript dialect"
)]
pub struct CliArgs {
    /// Check only these files instead of scanning the source path.
    pub files: Vec<PathBuf>,

    // ==================== Source Selection ====================
    /// Root of the source tree; packages map to subdirectories.
    #[arg(short = 's', long)]
    pub sourcepath: Option<PathBuf>,

    /// Packages to skip, with all their subpackages (e.g. 'js.ua').
    #[arg(long, value_delimiter = ',')]
    pub excludes: Vec<String>,

    /// Glob over paths relative to the source path; matching files are skipped.
    #[arg(long = "exclude-pattern")]
    pub exclude_patterns: Vec<String>,

    /// Configuration file, `jsl.json` in the working directory by default.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Checking ====================
    /// Start every file in legacy mode, as if it began with `$legacy()`.
    #[arg(long)]
    pub legacy: bool,

    /// Report classes that never get a superclass.
    #[arg(long = "require-super")]
    pub require_super: bool,

    /// Number of worker threads, all cores by default.
    #[arg(long)]
    pub threads: Option<usize>,

    // ==================== Output ====================
    /// List each file as it is checked.
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Colorize text output; defaults to on when stdout is a terminal.
    #[arg(long)]
    pub pretty: Option<bool>,

    /// Never colorize output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
