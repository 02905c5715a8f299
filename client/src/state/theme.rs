//! Light/dark theme selection.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use serde::{Deserialize, Serialize};

/// Theme mode. Persisted as the bare strings `"light"` / `"dark"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Current theme selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub mode: ThemeMode,
}

impl ThemeState {
    pub fn toggle(&mut self) {
        self.mode = self.mode.opposite();
    }

    pub fn load_snapshot(&mut self, mode: ThemeMode) {
        self.mode = mode;
    }
}
