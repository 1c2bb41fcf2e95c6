use clap::Parser;
use jsl_checker::CheckerOptions;
use std::path::{Path, PathBuf};

use super::args::CliArgs;
use super::config::{
    CONFIG_FILE_NAME, JslConfig, load_run_config, parse_config, resolve_config,
    resolve_config_path,
};

fn args(argv: &[&str]) -> CliArgs {
    CliArgs::try_parse_from(std::iter::once("jsl").chain(argv.iter().copied()))
        .expect("args should parse")
}

#[test]
fn parses_camel_case_fields() {
    let config = parse_config(
        r#"{
            "sourcepath": "src",
            "excludes": ["js.ua"],
            "excludePatterns": ["**/*.min.js"],
            "legacy": true,
            "requireSuper": true,
            "verbose": false
        }"#,
    )
    .expect("config should parse");

    assert_eq!(config.sourcepath, Some(PathBuf::from("src")));
    assert_eq!(config.excludes, vec!["js.ua"]);
    assert_eq!(config.exclude_patterns, vec!["**/*.min.js"]);
    assert_eq!(config.legacy, Some(true));
    assert_eq!(config.require_super, Some(true));
    assert_eq!(config.verbose, Some(false));
}

#[test]
fn parses_empty_object() {
    assert_eq!(parse_config("{}").expect("empty config"), JslConfig::default());
}

#[test]
fn rejects_unknown_fields() {
    assert!(parse_config(r#"{ "sourcePath": "src" }"#).is_err());
    assert!(parse_config("not json").is_err());
}

#[test]
fn command_line_overrides_file() {
    let config = JslConfig {
        sourcepath: Some(PathBuf::from("script")),
        excludes: vec!["js.ua".to_string()],
        exclude_patterns: vec!["**/old/*.js".to_string()],
        legacy: Some(true),
        require_super: None,
        verbose: Some(true),
    };
    let cwd = Path::new("/work");
    let resolved = resolve_config(
        &args(&[
            "--sourcepath",
            "src",
            "--excludes",
            "js.ua,js.test",
            "--require-super",
        ]),
        Some(config),
        Path::new("/work/conf"),
        cwd,
    );

    assert_eq!(resolved.sourcepath, PathBuf::from("/work/src"));
    assert_eq!(resolved.excludes, vec!["js.ua", "js.test"]);
    assert_eq!(resolved.exclude_patterns, vec!["**/old/*.js"]);
    assert!(resolved.verbose);
    assert!(resolved.options.legacy);
    assert!(resolved.options.require_super);
}

#[test]
fn file_paths_are_relative_to_config_dir() {
    let config = JslConfig {
        sourcepath: Some(PathBuf::from("script")),
        ..JslConfig::default()
    };
    let resolved = resolve_config(
        &args(&["one.js"]),
        Some(config),
        Path::new("/work/conf"),
        Path::new("/work"),
    );

    assert_eq!(resolved.sourcepath, PathBuf::from("/work/conf/script"));
    assert_eq!(resolved.files, vec![PathBuf::from("/work/one.js")]);
}

#[test]
fn defaults_to_working_directory() {
    let resolved = resolve_config(&args(&[]), None, Path::new("/work"), Path::new("/work"));

    assert_eq!(resolved.sourcepath, PathBuf::from("/work"));
    assert!(resolved.files.is_empty());
    assert!(!resolved.verbose);
    assert_eq!(resolved.options, CheckerOptions::default());
}

#[test]
fn finds_config_in_working_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    assert_eq!(resolve_config_path(dir.path(), None).expect("lookup"), None);

    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, r#"{ "legacy": true, "sourcepath": "lib" }"#).expect("write config");
    assert_eq!(
        resolve_config_path(dir.path(), None).expect("lookup"),
        Some(path)
    );

    let resolved = load_run_config(&args(&[]), dir.path()).expect("load");
    assert!(resolved.options.legacy);
    assert_eq!(resolved.sourcepath, dir.path().join("lib"));
}

#[test]
fn explicit_config_must_exist() {
    let dir = tempfile::tempdir().expect("temp dir");
    let error = resolve_config_path(dir.path(), Some(Path::new("missing.json")))
        .expect_err("missing config");
    assert!(error.to_string().contains("config file not found"));
}
