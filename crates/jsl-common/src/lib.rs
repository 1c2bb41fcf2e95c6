//! Common types and utilities for the jsl checker.
//!
//! This crate provides foundational types used across all jsl crates:
//! - The diagnostic catalog and diagnostic records
//! - Comment scanning helpers (documentation comment detection)
//! - Line maps for source locations
//! - Walk and nesting limits

// Diagnostic catalog (kind -> token, message) and emitted records
pub mod diagnostics;
pub use diagnostics::{Diagnostic, DiagnosticCategory, DiagnosticKind};

// Comment parsing utilities
pub mod comments;
pub use comments::CommentRange;

// Line/offset mapping
pub mod position;
pub use position::LineMap;

// Centralized limits and thresholds
pub mod limits;
