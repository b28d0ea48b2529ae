use std::{fs, path::Path, str::FromStr, time::Duration};

use anyhow::Context;
use page::Theme;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "playground.toml";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for EventFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(anyhow::anyhow!("unknown event format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub tick_ms: u64,
    pub log_filter: String,
    pub event_format: EventFormat,
    pub initial_theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            log_filter: "info".into(),
            event_format: EventFormat::Text,
            initial_theme: Theme::Light,
        }
    }
}

impl Settings {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    tick_ms: Option<u64>,
    log_filter: Option<String>,
    event_format: Option<EventFormat>,
    theme: Option<Theme>,
}

/// Defaults, then the config file, then environment variables.
///
/// An explicitly named file must exist and parse. The default
/// `playground.toml` is optional and ignored when unreadable.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match path {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file '{}'", path.display()))?;
            apply_file(&mut settings, &raw)
                .with_context(|| format!("invalid config file '{}'", path.display()))?;
        }
        None => {
            if let Ok(raw) = fs::read_to_string(DEFAULT_CONFIG_FILE) {
                let _ = apply_file(&mut settings, &raw);
            }
        }
    }

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn apply_file(settings: &mut Settings, raw: &str) -> anyhow::Result<()> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.tick_ms.filter(|ms| *ms > 0) {
        settings.tick_ms = v;
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.event_format {
        settings.event_format = v;
    }
    if let Some(v) = file_cfg.theme {
        settings.initial_theme = v;
    }
    Ok(())
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    for key in ["PLAYGROUND_TICK_MS", "APP__TICK_MS"] {
        if let Some(v) = lookup(key) {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                if parsed > 0 {
                    settings.tick_ms = parsed;
                }
            }
        }
    }

    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(v) = lookup("APP__EVENT_FORMAT") {
        if let Ok(parsed) = v.parse() {
            settings.event_format = parsed;
        }
    }

    if let Some(v) = lookup("APP__THEME") {
        if let Ok(parsed) = v.parse() {
            settings.initial_theme = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
