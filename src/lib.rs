//! jsl - semantic checker for the j(s)-script JavaScript dialect.
//!
//! This crate is a facade over the workspace members:
//! - `common` - diagnostic catalog, comment helpers, limits
//! - `scanner` - tokenizer
//! - `parser` - syntax tree and recursive-descent parser
//! - `checker` - convention-driven semantic checks
//!
//! plus [`tracing_config`], the logging setup shared by the binaries and
//! benchmarks.

pub use jsl_checker as checker;
pub use jsl_common as common;
pub use jsl_parser as parser;
pub use jsl_scanner as scanner;

pub use jsl_checker::{AnalysisSession, CheckError, CheckerOptions, check_source_file};
pub use jsl_common::{Diagnostic, DiagnosticKind};

pub mod tracing_config;
