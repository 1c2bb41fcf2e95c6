use anyhow::{Context, Result};
use colored::Colorize;
use jsl_common::{Diagnostic, DiagnosticCategory};
use serde::Serialize;

use crate::driver::{CheckedFile, RunResult};

/// Renders run results as text.
pub struct Reporter {
    color: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter {
            color,
            verbose: false,
        }
    }

    /// Also list every checked file, diagnostics or not.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Diagnostics of all files in order, then the summary line.
    pub fn render(&self, result: &RunResult) -> String {
        let mut out = String::new();
        for file in &result.files {
            self.render_file(file, &mut out);
        }
        out.push_str(&self.format_summary(result));
        out.push('\n');
        out
    }

    fn render_file(&self, file: &CheckedFile, out: &mut String) {
        if self.verbose {
            out.push_str(&format!("Checking {}\n", file.name));
        }
        for diagnostic in &file.diagnostics {
            out.push_str(&self.format_diagnostic(diagnostic));
            out.push('\n');
        }
    }

    /// `path:line: message [TOKEN]`
    pub fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        let location = format!("{}:{}:", diagnostic.file, diagnostic.line);
        let token = format!("[{}]", diagnostic.kind.token());
        if !self.color {
            return format!("{location} {} {token}", diagnostic.message_text);
        }
        let message = match diagnostic.category() {
            DiagnosticCategory::Error => diagnostic.message_text.red(),
            DiagnosticCategory::Warning => diagnostic.message_text.yellow(),
        };
        format!("{} {message} {}", location.bold(), token.dimmed())
    }

    pub fn format_summary(&self, result: &RunResult) -> String {
        let files = match result.file_count() {
            1 => "1 file".to_string(),
            count => format!("{count} files"),
        };
        let summary = match result.diagnostic_count() {
            0 => format!("Checked {files}: no diagnostics."),
            1 => format!("Checked {files}: 1 diagnostic."),
            count => format!("Checked {files}: {count} diagnostics."),
        };
        if !self.color {
            return summary;
        }
        if result.has_diagnostics() {
            summary.yellow().bold().to_string()
        } else {
            summary.green().to_string()
        }
    }
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    file: &'a str,
    line: u32,
    kind: &'static str,
    message: &'a str,
}

/// All diagnostics as a JSON array of `{ file, line, kind, message }`.
pub fn render_json(result: &RunResult) -> Result<String> {
    let diagnostics: Vec<JsonDiagnostic<'_>> = result
        .files
        .iter()
        .flat_map(|file| &file.diagnostics)
        .map(|diagnostic| JsonDiagnostic {
            file: &diagnostic.file,
            line: diagnostic.line,
            kind: diagnostic.kind.token(),
            message: &diagnostic.message_text,
        })
        .collect();
    serde_json::to_string_pretty(&diagnostics).context("failed to serialize diagnostics")
}
