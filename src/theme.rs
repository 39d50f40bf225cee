//! Light/dark theme selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Key the browser stores the chosen theme under.
pub const THEME_STORAGE_KEY: &str = "portfolio-theme";

/// Color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Theme matching a system dark-mode preference.
    pub fn from_system(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Name used for storage and as the `<html>` class.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(Error::Other(format!("unknown theme '{}'", other))),
        }
    }
}

/// Current theme plus the explicitly stored choice, if any.
///
/// A stored choice always wins over the system preference; system
/// preference changes only apply while nothing is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    theme: Theme,
    stored: Option<Theme>,
}

impl ThemeState {
    /// Resolve the initial theme.
    pub fn resolve(stored: Option<Theme>, system_prefers_dark: bool) -> Self {
        let theme = stored.unwrap_or_else(|| Theme::from_system(system_prefers_dark));
        Self { theme, stored }
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// The stored choice.
    pub fn stored(&self) -> Option<Theme> {
        self.stored
    }

    /// Check if the dark theme is active.
    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Switch to the other theme and remember the choice.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggled());
        self.theme
    }

    /// Select a theme and remember the choice.
    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.stored = Some(theme);
    }

    /// React to a change of the system preference.
    ///
    /// Returns `true` if the active theme changed.
    pub fn system_changed(&mut self, prefers_dark: bool) -> bool {
        if self.stored.is_some() {
            return false;
        }
        let next = Theme::from_system(prefers_dark);
        let changed = next != self.theme;
        self.theme = next;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_prefers_stored() {
        let state = ThemeState::resolve(Some(Theme::Light), true);
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_resolve_falls_back_to_system() {
        assert!(ThemeState::resolve(None, true).is_dark());
        assert!(!ThemeState::resolve(None, false).is_dark());
    }

    #[test]
    fn test_toggle_stores_choice() {
        let mut state = ThemeState::resolve(None, false);
        assert_eq!(state.toggle(), Theme::Dark);
        assert_eq!(state.stored(), Some(Theme::Dark));
        assert_eq!(state.toggle(), Theme::Light);
    }

    #[test]
    fn test_system_change_only_without_stored() {
        let mut state = ThemeState::resolve(None, false);
        assert!(state.system_changed(true));
        assert!(state.is_dark());

        state.set(Theme::Light);
        assert!(!state.system_changed(true));
        assert_eq!(state.theme(), Theme::Light);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.to_string(), "light");
    }
}
