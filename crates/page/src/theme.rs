use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::PageError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => f.write_str("light"),
            Self::Dark => f.write_str("dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(PageError::UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThemeSwitcher {
    theme: Theme,
}

impl ThemeSwitcher {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!(theme = %self.theme, "theme toggled");
        self.theme
    }

    /// Label of the toggle button; it names the mode a press switches to.
    pub fn button_label(&self) -> &'static str {
        match self.theme {
            Theme::Light => "Toggle Dark Mode",
            Theme::Dark => "Toggle Light Mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_theme_and_label() {
        let mut switcher = ThemeSwitcher::default();
        assert_eq!(switcher.button_label(), "Toggle Dark Mode");

        assert_eq!(switcher.toggle(), Theme::Dark);
        assert_eq!(switcher.button_label(), "Toggle Light Mode");

        assert_eq!(switcher.toggle(), Theme::Light);
        assert_eq!(switcher.button_label(), "Toggle Dark Mode");
    }

    #[test]
    fn theme_parses_case_insensitively() {
        assert_eq!("DARK".parse(), Ok(Theme::Dark));
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(PageError::UnknownTheme("sepia".into()))
        );
    }

    #[test]
    fn theme_deserializes_from_config_values() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: Theme,
        }
        let wrapper: Wrapper = toml::from_str("theme = \"dark\"").expect("toml");
        assert_eq!(wrapper.theme, Theme::Dark);
    }
}
