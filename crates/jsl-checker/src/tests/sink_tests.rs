use super::*;

#[test]
fn test_emit_formats_message() {
    let mut sink = DiagnosticSink::new("a.js");
    sink.emit(DiagnosticKind::ConstAssign, 3, None);
    sink.emit(
        DiagnosticKind::NoFieldDecl,
        7,
        Some("Instance field must be declared in constructor."),
    );

    let diagnostics = sink.diagnostics();
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message_text, "Assignment to constant.");
    assert_eq!(diagnostics[0].file, "a.js");
    assert_eq!(diagnostics[0].line, 3);
    assert_eq!(
        diagnostics[1].message_text,
        "Missing field declaration. Instance field must be declared in constructor."
    );
}

#[test]
fn test_suppression_is_monotonic() {
    let mut sink = DiagnosticSink::new("a.js");
    sink.emit(DiagnosticKind::NoApidoc, 1, None);
    sink.suppress(DiagnosticKind::NoApidoc);
    sink.emit(DiagnosticKind::NoApidoc, 2, None);
    sink.emit(DiagnosticKind::Overload, 3, None);
    sink.emit(DiagnosticKind::NoApidoc, 4, None);

    let lines: Vec<(DiagnosticKind, u32)> = sink
        .diagnostics()
        .iter()
        .map(|d| (d.kind, d.line))
        .collect();
    assert_eq!(
        lines,
        vec![(DiagnosticKind::NoApidoc, 1), (DiagnosticKind::Overload, 3)]
    );
    assert!(sink.is_suppressed(DiagnosticKind::NoApidoc));
    assert!(!sink.is_suppressed(DiagnosticKind::Overload));
}

#[test]
fn test_reset_clears_suppressions() {
    let mut sink = DiagnosticSink::new("a.js");
    sink.suppress(DiagnosticKind::NoBreak);
    sink.emit(DiagnosticKind::NoDefault, 1, None);
    sink.reset("b.js");

    assert!(sink.is_empty());
    assert!(!sink.is_suppressed(DiagnosticKind::NoBreak));
    sink.emit(DiagnosticKind::NoBreak, 5, None);
    assert_eq!(sink.file_name(), "b.js");
    assert_eq!(sink.into_diagnostics()[0].file, "b.js");
}
