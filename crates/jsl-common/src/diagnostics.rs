//! Diagnostic catalog and emitted diagnostic records.
//!
//! Every finding the checker can report has a [`DiagnosticKind`]. A kind
//! owns a fixed message and a suppression token (the string accepted by
//! `$suppress('TOKEN')`). Some findings append a free-form detail after the
//! message: `"<message>. <detail>"`.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    BadSyntax,
    GlobalAssign,
    ConstAssign,
    NotSupported,
    BadArgsCount,
    BadClassPackage,
    BadClassName,
    BadArgType,
    BadReturn,
    BadBodyDef,
    BadFuncDef,
    BadRvalue,
    BadThis,
    CtorReturn,
    CtorStatic,
    CtorAnnotation,
    BadApidoc,
    NoApidoc,
    NoPackageDef,
    NoClassDef,
    NoFieldDecl,
    NoVarDecl,
    NoSuper,
    Overload,
    NoBreak,
    NoDefault,
}

/// Catalog entry: kind, suppression token and fixed message (no trailing period).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub kind: DiagnosticKind,
    pub token: &'static str,
    pub message: &'static str,
}

const fn entry(kind: DiagnosticKind, token: &'static str, message: &'static str) -> DiagnosticMessage {
    DiagnosticMessage {
        kind,
        token,
        message,
    }
}

pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    entry(DiagnosticKind::BadSyntax, "BAD_SYNTAX", "Bad syntax"),
    entry(DiagnosticKind::GlobalAssign, "GLOBAL_ASSIGN", "Global assignment"),
    entry(DiagnosticKind::ConstAssign, "CONST_ASSIGN", "Assignment to constant"),
    entry(DiagnosticKind::NotSupported, "NOT_SUPPORTED", "Operation not supported"),
    entry(DiagnosticKind::BadArgsCount, "BAD_ARGS_COUNT", "Bad arguments count"),
    entry(DiagnosticKind::BadClassPackage, "BAD_CLASS_PACKAGE", "Bad class package"),
    entry(DiagnosticKind::BadClassName, "BAD_CLASS_NAME", "Bad class name"),
    entry(DiagnosticKind::BadArgType, "BAD_ARG_TYPE", "Bad argument type"),
    entry(
        DiagnosticKind::BadReturn,
        "BAD_RETURN",
        "Return type does not match declaration",
    ),
    entry(DiagnosticKind::BadBodyDef, "BAD_BODY_DEF", "Bad class body definition"),
    entry(DiagnosticKind::BadFuncDef, "BAD_FUNC_DEF", "Bad function definition"),
    entry(DiagnosticKind::BadRvalue, "BAD_RVALUE", "Bad right value"),
    entry(DiagnosticKind::BadThis, "BAD_THIS", "Invalid this pointer usage"),
    entry(DiagnosticKind::CtorReturn, "CTOR_RETURN", "Return value from constructor"),
    entry(
        DiagnosticKind::CtorStatic,
        "CTOR_STATIC",
        "Can't access static member from constructor",
    ),
    entry(
        DiagnosticKind::CtorAnnotation,
        "CTOR_ANNOTATION",
        "Missing constructor annotation",
    ),
    entry(DiagnosticKind::BadApidoc, "BAD_APIDOC", "Unexpected API documentation"),
    entry(DiagnosticKind::NoApidoc, "NO_APIDOC", "Missing API documentation"),
    entry(DiagnosticKind::NoPackageDef, "NO_PACKAGE_DEF", "Missing package definition"),
    entry(DiagnosticKind::NoClassDef, "NO_CLASS_DEF", "Missing class definition"),
    entry(DiagnosticKind::NoFieldDecl, "NO_FIELD_DECL", "Missing field declaration"),
    entry(DiagnosticKind::NoVarDecl, "NO_VAR_DECL", "Missing variable declaration"),
    entry(DiagnosticKind::NoSuper, "NO_SUPER", "Missing super class"),
    entry(DiagnosticKind::Overload, "OVERLOAD", "Member overloading"),
    entry(
        DiagnosticKind::NoBreak,
        "NO_BREAK",
        "Switch clause with no break statement",
    ),
    entry(
        DiagnosticKind::NoDefault,
        "NO_DEFAULT",
        "Switch statement with missing default clause",
    ),
];

impl DiagnosticKind {
    fn catalog_entry(self) -> &'static DiagnosticMessage {
        // The table is ordered like the enum.
        &DIAGNOSTIC_MESSAGES[self as usize]
    }

    /// Fixed message for this kind, without the trailing period.
    pub fn message(self) -> &'static str {
        self.catalog_entry().message
    }

    /// Suppression token, e.g. `NO_APIDOC`.
    pub fn token(self) -> &'static str {
        self.catalog_entry().token
    }

    /// Look up a kind by its suppression token. Tokens are case sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        DIAGNOSTIC_MESSAGES
            .iter()
            .find(|m| m.token == token)
            .map(|m| m.kind)
    }

    pub fn category(self) -> DiagnosticCategory {
        match self {
            DiagnosticKind::BadSyntax => DiagnosticCategory::Error,
            _ => DiagnosticCategory::Warning,
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// One reported finding: kind, formatted message, source name and line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub file: String,
    /// 1-based source line.
    pub line: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn new(kind: DiagnosticKind, file: impl Into<String>, line: u32, detail: Option<&str>) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            message_text: format_message(kind, detail),
        }
    }

    pub fn category(&self) -> DiagnosticCategory {
        self.kind.category()
    }
}

/// Render `"<message>."` or `"<message>. <detail>"`.
pub fn format_message(kind: DiagnosticKind, detail: Option<&str>) -> String {
    match detail {
        Some(detail) => format!("{}. {}", kind.message(), detail),
        None => format!("{}.", kind.message()),
    }
}

#[cfg(test)]
#[path = "tests/diagnostics_tests.rs"]
mod diagnostics_tests;
