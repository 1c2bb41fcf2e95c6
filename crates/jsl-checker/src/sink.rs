//! Diagnostic sink with per-file suppression.

use jsl_common::{Diagnostic, DiagnosticKind};
use rustc_hash::FxHashSet;
use tracing::{debug, trace};

/// Collects the diagnostics of one file in emission order.
///
/// A kind named by `$suppress` is dropped from that point to the end of
/// the file; earlier findings of the same kind are kept.
#[derive(Debug)]
pub struct DiagnosticSink {
    file_name: String,
    suppressed: FxHashSet<DiagnosticKind>,
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticSink {
    pub fn new(file_name: impl Into<String>) -> DiagnosticSink {
        DiagnosticSink {
            file_name: file_name.into(),
            suppressed: FxHashSet::default(),
            diagnostics: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn suppress(&mut self, kind: DiagnosticKind) {
        if self.suppressed.insert(kind) {
            debug!(file = %self.file_name, %kind, "suppress");
        }
    }

    pub fn is_suppressed(&self, kind: DiagnosticKind) -> bool {
        self.suppressed.contains(&kind)
    }

    pub fn emit(&mut self, kind: DiagnosticKind, line: u32, detail: Option<&str>) {
        if self.is_suppressed(kind) {
            trace!(%kind, line, "suppressed");
            return;
        }
        let diagnostic = Diagnostic::new(kind, self.file_name.as_str(), line, detail);
        trace!(%kind, line, message = %diagnostic.message_text, "emit");
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Forget everything and start over for another file.
    pub fn reset(&mut self, file_name: impl Into<String>) {
        self.file_name = file_name.into();
        self.suppressed.clear();
        self.diagnostics.clear();
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub(crate) fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

#[cfg(test)]
#[path = "tests/sink_tests.rs"]
mod sink_tests;
