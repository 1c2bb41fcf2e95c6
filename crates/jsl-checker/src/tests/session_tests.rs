use super::*;

#[test]
fn test_registries_reset_between_files() {
    let mut session = AnalysisSession::new(CheckerOptions::default());
    let first = concat!(
        "$package('comp.prj');\n",
        "/** @constructor */\n",
        "comp.prj.First = function() {\n",
        "    /** @type Number */\n",
        "    this.count = 0;\n",
        "};\n",
    );
    let diagnostics = session.check_source("first.js", first.to_string()).expect("checks");
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    assert!(session.classes().is_defined("comp.prj.First"));
    assert!(session.functions().find("comp.prj.First").is_some());
    assert_eq!(session.package(), Some("comp.prj"));

    let diagnostics = session
        .check_source("second.js", "var x = 1;\n".to_string())
        .expect("checks");
    assert!(diagnostics.is_empty());
    assert!(session.classes().find("comp.prj.First").is_none());
    assert!(session.functions().find("comp.prj.First").is_none());
    assert_eq!(session.package(), None);
}

#[test]
fn test_suppressions_do_not_leak_into_next_file() {
    let mut session = AnalysisSession::new(CheckerOptions::default());
    let source = "$suppress('NO_PACKAGE_DEF');\ncomp.prj.A = function() {};\n";
    let diagnostics = session.check_source("a.js", source.to_string()).expect("checks");
    assert!(diagnostics.is_empty());

    let diagnostics = session
        .check_source("b.js", "comp.prj.B = function() {};\n".to_string())
        .expect("checks");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::NoPackageDef);
    assert_eq!(diagnostics[0].file, "b.js");
}

#[test]
fn test_legacy_option_is_restored_per_file() {
    let mut session = AnalysisSession::new(CheckerOptions::default());
    session
        .check_source("a.js", "$legacy();\n".to_string())
        .expect("checks");
    assert!(session.is_legacy());
    session.check_source("b.js", String::new()).expect("checks");
    assert!(!session.is_legacy());

    let mut session = AnalysisSession::new(CheckerOptions {
        legacy: true,
        ..CheckerOptions::default()
    });
    session.check_source("c.js", String::new()).expect("checks");
    assert!(session.is_legacy());
}

#[test]
fn test_syntax_error_is_single_diagnostic() {
    let diagnostics = check_source_file(
        "broken.js",
        "var a = 1;\nvar b = ;\nthis.x = 1;\n".to_string(),
        &CheckerOptions::default(),
    )
    .expect("syntax errors are diagnostics");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::BadSyntax);
    assert_eq!(diagnostics[0].line, 2);
    assert!(diagnostics[0].message_text.starts_with("Bad syntax. "));
}
