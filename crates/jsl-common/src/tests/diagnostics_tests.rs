use super::*;

#[test]
fn test_catalog_is_ordered_like_enum() {
    for (index, entry) in DIAGNOSTIC_MESSAGES.iter().enumerate() {
        assert_eq!(entry.kind as usize, index, "catalog out of order at {}", entry.token);
    }
}

#[test]
fn test_message_without_detail_ends_with_period() {
    let diag = Diagnostic::new(DiagnosticKind::NoPackageDef, "a.js", 3, None);
    assert_eq!(diag.message_text, "Missing package definition.");
    assert_eq!(diag.line, 3);
}

#[test]
fn test_message_with_detail() {
    let diag = Diagnostic::new(
        DiagnosticKind::NoFieldDecl,
        "a.js",
        1,
        Some("Instance field must be declared in constructor."),
    );
    assert_eq!(
        diag.message_text,
        "Missing field declaration. Instance field must be declared in constructor."
    );
}

#[test]
fn test_token_round_trip() {
    assert_eq!(DiagnosticKind::from_token("NO_APIDOC"), Some(DiagnosticKind::NoApidoc));
    assert_eq!(DiagnosticKind::from_token("BAD_RVALUE"), Some(DiagnosticKind::BadRvalue));
    assert_eq!(DiagnosticKind::CtorReturn.token(), "CTOR_RETURN");
}

#[test]
fn test_unknown_token_is_none() {
    assert_eq!(DiagnosticKind::from_token("NO_FIELD_DECL_"), None);
    assert_eq!(DiagnosticKind::from_token("no_apidoc"), None);
    assert_eq!(DiagnosticKind::from_token(""), None);
}

#[test]
fn test_serialized_kind_matches_token() {
    for entry in DIAGNOSTIC_MESSAGES {
        let json = serde_json::to_string(&entry.kind).expect("serialize kind");
        assert_eq!(json, format!("\"{}\"", entry.token));
    }
}

#[test]
fn test_only_bad_syntax_is_an_error() {
    assert_eq!(DiagnosticKind::BadSyntax.category(), DiagnosticCategory::Error);
    assert_eq!(DiagnosticKind::BadReturn.category(), DiagnosticCategory::Warning);
}
