//! Naming Convention Module
//!
//! The dialect has no class syntax. Roles are encoded in dotted names:
//! - `comp.prj.Class` is a class (lowercase package, capitalized class path)
//! - `comp.prj.Class.prototype` is its instance method namespace
//! - `comp.prj.Class.prototype.method` is an instance method
//! - `comp.prj.Class.field` / `comp.prj.Class.CONST` are static members
//! - `XMLHttpRequest` is a native (built-in) class
//!
//! All predicates here are pure functions over strings, except
//! [`is_instance_member`] which inspects a node shape.

use jsl_parser::{NodeArena, NodeData, NodeIndex};
use once_cell::sync::Lazy;
use regex::Regex;

/// Name of the root object type; treated as native.
pub const ROOT_OBJECT_CLASS: &str = "js.lang.Object";

const PROTOTYPE_SUFFIX: &str = ".prototype";

static QUALIFIED_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*\.[A-Z][a-zA-Z0-9_]*(?:\.(?:[a-z_][a-zA-Z0-9_]*|[A-Z0-9_]+))?$",
    )
    .expect("valid regex")
});

static CLASS_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*(?:\.[A-Z][a-zA-Z0-9_]*)+$")
        .expect("valid regex")
});

static NATIVE_CLASS_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-zA-Z]*$").expect("valid regex"));

static PROTOTYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*(?:\.[A-Z][a-zA-Z0-9_]*)+\.prototype$")
        .expect("valid regex")
});

static PROTOTYPE_MEMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*(?:\.[A-Z][a-zA-Z0-9_]*)+\.prototype\.[a-z_][a-zA-Z0-9_]*$",
    )
    .expect("valid regex")
});

static CONSTANT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*(?:\.[A-Z][a-zA-Z0-9_]*)+\.)?[A-Z0-9_]+$")
        .expect("valid regex")
});

static STATIC_MEMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-z][a-z0-9]*(?:\.[a-z][a-z0-9]+)*(?:\.[A-Z][a-zA-Z0-9_]*)+\.(?:[a-z_][a-zA-Z0-9_]*|[A-Z0-9_]+)$",
    )
    .expect("valid regex")
});

// =============================================================================
// Predicates
// =============================================================================

/// Package, class and optional trailing member, e.g. `comp.prj.Class.field`.
pub fn is_qualified_name(name: &str) -> bool {
    QUALIFIED_NAME_RE.is_match(name)
}

pub fn is_class_name(name: &str) -> bool {
    CLASS_NAME_RE.is_match(name)
}

/// Bare capitalized identifier such as `Date` or `XMLHttpRequest`.
pub fn is_native_class_name(name: &str) -> bool {
    NATIVE_CLASS_NAME_RE.is_match(name)
}

pub fn is_prototype_name(name: &str) -> bool {
    PROTOTYPE_RE.is_match(name)
}

pub fn is_prototype_member_name(name: &str) -> bool {
    PROTOTYPE_MEMBER_RE.is_match(name)
}

/// `CONST` or `comp.prj.Class.CONST`.
pub fn is_constant_name(name: &str) -> bool {
    CONSTANT_RE.is_match(name)
}

pub fn is_static_member_name(name: &str) -> bool {
    STATIC_MEMBER_RE.is_match(name)
}

/// True for `this.<member>`.
pub fn is_instance_member(arena: &NodeArena, index: NodeIndex) -> bool {
    match arena.get_data(index) {
        Some(NodeData::PropertyAccess { expression, .. }) => arena.is_this(*expression),
        _ => false,
    }
}

// =============================================================================
// Name Extraction
// =============================================================================

/// `comp.prj.Class.field` -> `comp.prj.Class`.
pub fn static_member_class_name(name: &str) -> &str {
    name.rsplit_once('.').map_or("", |(class, _)| class)
}

/// `comp.prj.Class.field` -> `field`.
pub fn static_member_name(name: &str) -> &str {
    name.rsplit_once('.').map_or(name, |(_, member)| member)
}

/// `comp.prj.Class.prototype` -> `comp.prj.Class`.
pub fn prototype_class_name(name: &str) -> &str {
    name.rfind(PROTOTYPE_SUFFIX).map_or(name, |at| &name[..at])
}

/// `comp.prj.Class.prototype.method` -> `comp.prj.Class`.
pub fn prototype_member_class_name(name: &str) -> &str {
    prototype_class_name(name)
}

#[cfg(test)]
#[path = "tests/conventions_tests.rs"]
mod conventions_tests;
