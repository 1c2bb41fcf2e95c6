//! Semantic checker for the j(s)-script dialect.
//!
//! The dialect expresses classes purely through naming conventions and
//! documentation comments. This crate reconstructs that class model from a
//! parsed file and reports violations. It is organized into:
//! - `conventions` - naming convention predicates over dotted names
//! - `jsdoc` - documentation tag extraction
//! - `types` - symbolic types and cast compatibility
//! - `registry` - per-file class and function registries
//! - `sink` - diagnostic collection with `$suppress` handling
//! - `session` - per-file analysis state and the checking entry points
//! - `state` - `CheckerState`, the node walk and dispatch
//! - `scope_finder` - enclosing function and class resolution
//! - `type_inference` - structural type inference
//! - `*_checker` - one validator module per construct

pub mod conventions;
pub mod error;
pub mod jsdoc;
pub mod registry;
pub mod session;
pub mod sink;
pub mod state;
pub mod types;

mod assignment_checker;
mod directive_checker;
mod new_expression_checker;
mod object_literal_checker;
mod return_checker;
mod scope_finder;
mod switch_checker;
mod type_inference;
mod variable_checker;

pub use error::CheckError;
pub use jsdoc::JsDoc;
pub use registry::{
    ClassId, ClassRegistry, FunctionId, FunctionRegistry, JsClass, JsField, JsFunction, JsVariable,
    SuperClassLink,
};
pub use session::{AnalysisSession, CheckerOptions, check_source_file};
pub use sink::DiagnosticSink;
pub use state::CheckerState;
pub use types::JsType;
