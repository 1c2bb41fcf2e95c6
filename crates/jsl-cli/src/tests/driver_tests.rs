use std::path::{Path, PathBuf};

use jsl_checker::CheckerOptions;
use jsl_common::DiagnosticKind;

use super::config::ResolvedConfig;
use super::driver::{SourceScanner, check_files, collect_source_files, display_name, package_dir, run};

const VALID_CLASS: &str = r#"$package('comp.prj');
/**
 * @constructor
 */
comp.prj.Widget = function() {
};
"#;

const UNDOCUMENTED_CLASS: &str = "$package('comp.prj');\ncomp.prj.Widget = function() {\n};\n";

fn write_file(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create test dir");
    }
    std::fs::write(&path, contents).expect("failed to write test file");
    path
}

fn relative_paths(root: &Path, files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|file| {
            file.strip_prefix(root)
                .expect("file below root")
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect()
}

fn config_for(root: &Path) -> ResolvedConfig {
    ResolvedConfig {
        files: Vec::new(),
        sourcepath: root.to_path_buf(),
        excludes: Vec::new(),
        exclude_patterns: Vec::new(),
        verbose: false,
        threads: None,
        options: CheckerOptions::default(),
    }
}

#[test]
fn scan_skips_hidden_package_info_and_non_sources() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    write_file(root, "comp/prj/Widget.js", VALID_CLASS);
    write_file(root, "comp/prj/Button.js", VALID_CLASS);
    write_file(root, "comp/prj/package-info.js", "");
    write_file(root, "comp/prj/notes.txt", "");
    write_file(root, ".git/hooks/check.js", "");
    write_file(root, "comp/.cache/Stale.js", "");

    let files = SourceScanner::new(root, &[], &[])
        .expect("scanner")
        .scan()
        .expect("scan");
    assert_eq!(
        relative_paths(root, &files),
        vec!["comp/prj/Button.js", "comp/prj/Widget.js"]
    );
}

#[test]
fn scan_prunes_excluded_packages_and_patterns() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    write_file(root, "js/lang/Object.js", "");
    write_file(root, "js/ua/Engine.js", "");
    write_file(root, "js/ua/detect/Browser.js", "");
    write_file(root, "js/uax/Other.js", "");
    write_file(root, "js/net/generated/Stub.js", "");
    write_file(root, "js/net/XHR.js", "");

    let scanner = SourceScanner::new(
        root,
        &["js.ua".to_string()],
        &["**/generated/*.js".to_string()],
    )
    .expect("scanner");
    let files = scanner.scan().expect("scan");
    assert_eq!(
        relative_paths(root, &files),
        vec!["js/lang/Object.js", "js/net/XHR.js", "js/uax/Other.js"]
    );
}

#[test]
fn invalid_pattern_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert!(SourceScanner::new(dir.path(), &[], &["a{b".to_string()]).is_err());
}

#[test]
fn missing_source_path_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let scanner = SourceScanner::new(&dir.path().join("absent"), &[], &[]).expect("scanner");
    assert!(scanner.scan().is_err());
}

#[test]
fn package_dir_maps_segments() {
    assert_eq!(
        package_dir(Path::new("/src"), "js.ua.detect"),
        PathBuf::from("/src/js/ua/detect")
    );
    assert_eq!(package_dir(Path::new("/src"), ""), PathBuf::from("/src"));
}

#[test]
fn explicit_files_bypass_scanning() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    let explicit = write_file(root, "other/Single.js", VALID_CLASS);
    write_file(root, "comp/prj/Widget.js", VALID_CLASS);

    let mut config = config_for(root);
    config.files = vec![explicit.clone()];
    assert_eq!(collect_source_files(&config).expect("collect"), vec![explicit]);
}

#[test]
fn run_checks_files_in_path_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    write_file(root, "comp/prj/b/Second.js", UNDOCUMENTED_CLASS);
    write_file(root, "comp/prj/a/First.js", UNDOCUMENTED_CLASS);
    write_file(root, "comp/prj/c/Clean.js", VALID_CLASS);

    let result = run(&config_for(root), root).expect("run");
    assert_eq!(result.file_count(), 3);
    assert_eq!(result.diagnostic_count(), 2);
    assert!(result.has_diagnostics());

    let names: Vec<&str> = result.files.iter().map(|file| file.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            display_name(&root.join("comp/prj/a/First.js"), root),
            display_name(&root.join("comp/prj/b/Second.js"), root),
            display_name(&root.join("comp/prj/c/Clean.js"), root),
        ]
    );
    let first = &result.files[0].diagnostics;
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].kind, DiagnosticKind::NoApidoc);
    assert_eq!(first[0].line, 2);
    assert_eq!(first[0].file, result.files[0].name);
    assert!(result.files[2].diagnostics.is_empty());
}

#[test]
fn run_with_thread_limit() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    write_file(root, "comp/prj/Widget.js", VALID_CLASS);

    let mut config = config_for(root);
    config.threads = Some(1);
    let result = run(&config, root).expect("run");
    assert_eq!(result.file_count(), 1);
    assert!(!result.has_diagnostics());
}

#[test]
fn unreadable_file_is_a_hard_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("Missing.js");
    let error = check_files(&[missing], &CheckerOptions::default(), dir.path())
        .expect_err("missing file");
    assert!(format!("{error:#}").contains("failed to read source file"));
}

#[test]
fn undecodable_file_is_bad_syntax_and_other_files_are_still_checked() {
    let dir = tempfile::tempdir().expect("temp dir");
    let root = dir.path();
    let good = write_file(root, "a.js", "var a = {x: 1, x: 2};\n");
    let bad = root.join("b.js");
    std::fs::write(&bad, b"var b;\n\xff\xfe").expect("failed to write test file");

    let files = check_files(&[bad, good], &CheckerOptions::default(), root).expect("run");
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].name, "a.js");
    let kinds: Vec<_> = files[0].diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(kinds, vec![DiagnosticKind::Overload]);

    assert_eq!(files[1].name, "b.js");
    assert_eq!(files[1].diagnostics.len(), 1);
    let diagnostic = &files[1].diagnostics[0];
    assert_eq!(diagnostic.kind, DiagnosticKind::BadSyntax);
    assert_eq!(diagnostic.line, 2);
    assert_eq!(diagnostic.message_text, "Bad syntax. Source is not valid UTF-8.");
}

#[test]
fn display_name_is_relative_to_working_directory() {
    assert_eq!(
        display_name(Path::new("/work/src/A.js"), Path::new("/work")),
        Path::new("src").join("A.js").display().to_string()
    );
    assert_eq!(
        display_name(Path::new("/elsewhere/A.js"), Path::new("/work")),
        "/elsewhere/A.js"
    );
}
