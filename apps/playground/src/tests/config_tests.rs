use super::*;

use std::{collections::HashMap, io::Write};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_tick_once_per_second() {
    let settings = Settings::default();
    assert_eq!(settings.tick(), Duration::from_secs(1));
    assert_eq!(settings.event_format, EventFormat::Text);
    assert_eq!(settings.initial_theme, Theme::Light);
}

#[test]
fn explicit_config_file_is_applied() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(
        file,
        "tick_ms = 250\nlog_filter = \"debug\"\nevent_format = \"json\"\ntheme = \"dark\""
    )
    .expect("write config");

    let mut settings = Settings::default();
    let raw = fs::read_to_string(file.path()).expect("read back");
    apply_file(&mut settings, &raw).expect("apply");

    assert_eq!(settings.tick_ms, 250);
    assert_eq!(settings.log_filter, "debug");
    assert_eq!(settings.event_format, EventFormat::Json);
    assert_eq!(settings.initial_theme, Theme::Dark);
}

#[test]
fn missing_explicit_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings(Some(&dir.path().join("absent.toml"))).expect_err("missing");
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn unknown_keys_in_config_file_are_rejected() {
    let mut settings = Settings::default();
    assert!(apply_file(&mut settings, "tick_seconds = 3").is_err());
    assert_eq!(settings, Settings::default());
}

#[test]
fn zero_tick_is_ignored() {
    let mut settings = Settings::default();
    apply_file(&mut settings, "tick_ms = 0").expect("apply");
    apply_env_overrides(&mut settings, env(&[("APP__TICK_MS", "0")]));
    assert_eq!(settings.tick_ms, 1000);
}

#[test]
fn app_prefixed_env_wins_over_short_name() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[("PLAYGROUND_TICK_MS", "500"), ("APP__TICK_MS", "100")]),
    );
    assert_eq!(settings.tick_ms, 100);
}

#[test]
fn env_overrides_ignore_unparseable_values() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("APP__TICK_MS", "fast"),
            ("APP__EVENT_FORMAT", "xml"),
            ("APP__THEME", "dark"),
            ("APP__LOG_FILTER", "countdown=trace"),
        ]),
    );
    assert_eq!(settings.tick_ms, 1000);
    assert_eq!(settings.event_format, EventFormat::Text);
    assert_eq!(settings.initial_theme, Theme::Dark);
    assert_eq!(settings.log_filter, "countdown=trace");
}
