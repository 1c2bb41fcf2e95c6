//! Per-file analysis session.
//!
//! An [`AnalysisSession`] owns every piece of mutable state one file's
//! analysis needs: the class and function registries, the diagnostic sink
//! with its suppressions, the current package and the legacy flag. All of
//! it is reset before each file, so a session can be reused sequentially
//! but never shared between files checked concurrently.

use crate::error::CheckError;
use crate::registry::{ClassRegistry, FunctionRegistry};
use crate::sink::DiagnosticSink;
use crate::state::CheckerState;
use jsl_common::{Diagnostic, DiagnosticKind};
use jsl_parser::ParserState;
use tracing::{debug, debug_span};

/// Options that apply to every file of a run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckerOptions {
    /// Start every file in legacy mode, as if it began with `$legacy()`.
    pub legacy: bool,
    /// Report non-native classes that never get a superclass.
    pub require_super: bool,
}

#[derive(Debug)]
pub struct AnalysisSession {
    options: CheckerOptions,
    pub(crate) classes: ClassRegistry,
    pub(crate) functions: FunctionRegistry,
    pub(crate) sink: DiagnosticSink,
    pub(crate) package: Option<String>,
    pub(crate) legacy: bool,
}

impl AnalysisSession {
    pub fn new(options: CheckerOptions) -> AnalysisSession {
        let legacy = options.legacy;
        AnalysisSession {
            options,
            classes: ClassRegistry::new(),
            functions: FunctionRegistry::new(),
            sink: DiagnosticSink::new(""),
            package: None,
            legacy,
        }
    }

    pub fn options(&self) -> &CheckerOptions {
        &self.options
    }

    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    /// Package declared by the last `$package` directive.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn is_legacy(&self) -> bool {
        self.legacy
    }

    /// Drop all state of the previous file.
    pub fn reset(&mut self, file_name: &str) {
        self.classes.clear();
        self.functions.clear();
        self.sink.reset(file_name);
        self.package = None;
        self.legacy = self.options.legacy;
    }

    /// Parse and check one file.
    ///
    /// A syntax error yields a single "Bad syntax" diagnostic. The
    /// registries keep the state of this file until the next call.
    pub fn check_source(
        &mut self,
        file_name: &str,
        source_text: String,
    ) -> Result<Vec<Diagnostic>, CheckError> {
        let _span = debug_span!("check_source", file = file_name).entered();
        self.reset(file_name);

        let mut parser = ParserState::new(file_name.to_string(), source_text);
        let root = match parser.parse_source_file() {
            Ok(root) => root,
            Err(error) => {
                debug!(%error, "parse failed");
                self.sink
                    .emit(DiagnosticKind::BadSyntax, error.line, Some(&error.message));
                return Ok(self.sink.take_diagnostics());
            }
        };

        CheckerState::new(parser.get_arena(), self).check_source_file(root)?;

        debug!(
            classes = self.classes.len(),
            functions = self.functions.len(),
            diagnostics = self.sink.len(),
            "checked"
        );
        Ok(self.sink.take_diagnostics())
    }
}

/// Check one file with a fresh session.
pub fn check_source_file(
    file_name: &str,
    source_text: String,
    options: &CheckerOptions,
) -> Result<Vec<Diagnostic>, CheckError> {
    AnalysisSession::new(options.clone()).check_source(file_name, source_text)
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod session_tests;
