use super::*;

#[test]
fn test_log_format_parse() {
    assert_eq!(LogFormat::parse("tree"), LogFormat::Tree);
    assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
    assert_eq!(LogFormat::parse(" text "), LogFormat::Text);
    assert_eq!(LogFormat::parse(""), LogFormat::Text);
    assert_eq!(LogFormat::parse("yaml"), LogFormat::Text);
}

#[test]
fn test_settings_require_a_filter() {
    assert_eq!(LogSettings::from_vars(None, None, Some("tree".to_string())), None);
}

#[test]
fn test_jsl_log_takes_precedence_over_rust_log() {
    let settings = LogSettings::from_vars(
        Some("jsl_checker=trace".to_string()),
        Some("warn".to_string()),
        None,
    )
    .expect("filter set");
    assert_eq!(settings.directives, "jsl_checker=trace");
    assert_eq!(settings.format, LogFormat::Text);

    let settings = LogSettings::from_vars(None, Some("debug".to_string()), Some("json".to_string()))
        .expect("fallback filter");
    assert_eq!(settings.directives, "debug");
    assert_eq!(settings.format, LogFormat::Json);
}
