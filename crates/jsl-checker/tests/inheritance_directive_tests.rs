//! `$extends` handling and the class graph it builds.

use jsl_checker::{AnalysisSession, CheckerOptions, JsType};
use jsl_common::{Diagnostic, DiagnosticKind};

const CLASSES: &str = r#"$package('comp.prj');
/**
 * @constructor
 */
comp.prj.Base = function() {
};
/**
 * @constructor
 */
comp.prj.Derived = function() {
};
/**
 * @constructor
 */
comp.prj.Leaf = function() {
};
"#;

fn check_with(session: &mut AnalysisSession, directives: &str) -> Vec<Diagnostic> {
    let source = format!("{CLASSES}{directives}");
    session
        .check_source("inheritance.js", source)
        .expect("check succeeds")
}

fn check(directives: &str) -> (AnalysisSession, Vec<Diagnostic>) {
    let mut session = AnalysisSession::new(CheckerOptions::default());
    let diagnostics = check_with(&mut session, directives);
    (session, diagnostics)
}

fn messages(diagnostics: &[Diagnostic]) -> Vec<&str> {
    diagnostics
        .iter()
        .map(|diagnostic| diagnostic.message_text.as_str())
        .collect()
}

#[test]
fn test_chain_enables_casts() {
    let (session, diagnostics) = check(concat!(
        "$extends(comp.prj.Derived, comp.prj.Base);\n",
        "$extends(comp.prj.Leaf, comp.prj.Derived);\n",
    ));
    assert!(diagnostics.is_empty(), "{diagnostics:#?}");

    let classes = session.classes();
    let leaf = JsType::from("comp.prj.Leaf");
    let base = JsType::from("comp.prj.Base");
    assert!(leaf.is_kind_of(&base, classes));
    assert!(leaf.is_kind_of(&JsType::Object, classes));
    assert!(!base.is_kind_of(&leaf, classes));
}

#[test]
fn test_circular_inheritance_is_rejected() {
    let (session, diagnostics) = check(concat!(
        "$extends(comp.prj.Derived, comp.prj.Base);\n",
        "$extends(comp.prj.Base, comp.prj.Derived);\n",
    ));
    assert_eq!(
        messages(&diagnostics),
        vec!["Operation not supported. Circular inheritance [comp.prj.Base] -> [comp.prj.Derived]."]
    );
    assert_eq!(diagnostics[0].line, 18);

    let classes = session.classes();
    let base = classes.find("comp.prj.Base").expect("registered");
    assert_eq!(classes.get(base).super_class(), None);
}

#[test]
fn test_self_inheritance_is_rejected() {
    let (_, diagnostics) = check("$extends(comp.prj.Base, comp.prj.Base);\n");
    assert_eq!(
        messages(&diagnostics),
        vec!["Operation not supported. Circular inheritance [comp.prj.Base] -> [comp.prj.Base]."]
    );
}

#[test]
fn test_superclass_is_set_once() {
    let (_, diagnostics) = check(concat!(
        "$extends(comp.prj.Leaf, comp.prj.Base);\n",
        "$extends(comp.prj.Leaf, comp.prj.Base);\n",
        "$extends(comp.prj.Leaf, comp.prj.Derived);\n",
    ));
    assert_eq!(
        messages(&diagnostics),
        vec!["Operation not supported. Super class of [comp.prj.Leaf] already set to [comp.prj.Base]."]
    );
    assert_eq!(diagnostics[0].line, 19);
}

#[test]
fn test_undefined_subclass() {
    let (_, diagnostics) = check("$extends(comp.prj.Unknown, comp.prj.Base);\n");
    assert_eq!(messages(&diagnostics), vec!["Missing class definition."]);
}

#[test]
fn test_bad_class_names() {
    let (_, diagnostics) = check(concat!(
        "$extends(comp.prj.lower, comp.prj.Base);\n",
        "$extends(comp.prj.Leaf, comp.prj.base);\n",
    ));
    assert_eq!(
        messages(&diagnostics),
        vec![
            "Bad class name. Bad subclass name format [comp.prj.lower].",
            "Bad class name. Bad superclass name format [comp.prj.base].",
        ]
    );
}

#[test]
fn test_arguments_count() {
    let (_, diagnostics) = check("$extends(comp.prj.Leaf);\n");
    assert_eq!(
        messages(&diagnostics),
        vec!["Bad arguments count. $extends pseudo-operator needs exactly 2 arguments."]
    );
    assert_eq!(diagnostics[0].kind, DiagnosticKind::BadArgsCount);
}

#[test]
fn test_missing_super_classes_are_opt_in() {
    let directives = concat!(
        "$extends(comp.prj.Derived, comp.prj.Base);\n",
        "$extends(comp.prj.Leaf, js.lang.Object);\n",
    );
    let (_, diagnostics) = check(directives);
    assert!(diagnostics.is_empty());

    let mut session = AnalysisSession::new(CheckerOptions {
        require_super: true,
        ..CheckerOptions::default()
    });
    let diagnostics = check_with(&mut session, directives);
    assert_eq!(
        messages(&diagnostics),
        vec!["Missing super class. Class [comp.prj.Base]."]
    );
    assert_eq!(diagnostics[0].line, 5);
    assert_eq!(diagnostics[0].kind, DiagnosticKind::NoSuper);
}
