//! Display theme preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The colour theme of the ledger display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// Returns the theme a toggle switches to.
    ///
    /// Dark flips to light; anything else, including no stored preference,
    /// flips to dark.
    ///
    /// # Examples
    ///
    /// ```
    /// use hourtrackr::models::Theme;
    ///
    /// assert_eq!(Theme::toggled(None), Theme::Dark);
    /// assert_eq!(Theme::toggled(Some(Theme::Dark)), Theme::Light);
    /// assert_eq!(Theme::toggled(Some(Theme::Light)), Theme::Dark);
    /// ```
    pub fn toggled(current: Option<Theme>) -> Theme {
        match current {
            Some(Theme::Dark) => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// The stored form of the theme.
    pub fn as_str(&self) -> &'static str {
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
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}'", other)),
        }
    }
}
