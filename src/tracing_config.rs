//! Log output of the `jsl` binary.
//!
//! `JSL_LOG` holds the filter directives (`RUST_LOG` is the fallback) and
//! `JSL_LOG_FORMAT` picks the layout: `text`, `tree` (one indented block
//! per checked file) or `json`. Without a filter nothing is installed.
//! Logs go to stderr; stdout is reserved for diagnostics.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

const FILTER_VAR: &str = "JSL_LOG";
const FALLBACK_FILTER_VAR: &str = "RUST_LOG";
const FORMAT_VAR: &str = "JSL_LOG_FORMAT";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    /// Indented span tree via `tracing-tree`.
    Tree,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Unknown values select `Text`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "tree" => Self::Tree,
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Logging settings read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directives: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// `None` when no filter variable is set.
    pub fn from_vars(
        jsl_log: Option<String>,
        rust_log: Option<String>,
        format: Option<String>,
    ) -> Option<Self> {
        let directives = jsl_log.or(rust_log)?;
        Some(LogSettings {
            directives,
            format: format.as_deref().map(LogFormat::parse).unwrap_or_default(),
        })
    }

    pub fn from_env() -> Option<Self> {
        Self::from_vars(
            std::env::var(FILTER_VAR).ok(),
            std::env::var(FALLBACK_FILTER_VAR).ok(),
            std::env::var(FORMAT_VAR).ok(),
        )
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::builder().parse_lossy(&self.directives)
    }
}

/// Install the global subscriber if logging was requested.
pub fn init_tracing() {
    let Some(settings) = LogSettings::from_env() else {
        return;
    };
    let filter = settings.filter();
    match settings.format {
        LogFormat::Tree => Registry::default()
            .with(filter)
            .with(
                tracing_tree::HierarchicalLayer::new(2)
                    .with_indent_lines(true)
                    .with_targets(true),
            )
            .init(),
        LogFormat::Json => Registry::default()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => Registry::default()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
    tracing::debug!(format = ?settings.format, "logging enabled");
}

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
