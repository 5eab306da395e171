//! Theme presets.
//!
//! The theme is independent of the calculator state: it is assigned
//! directly and never changes as a side effect of an intent.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the three visual presets.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Theme1,
    Theme2,
    Theme3,
}

#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown theme '{0}', expected one of theme1, theme2, theme3")]
pub struct ThemeError(pub String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Theme1, Theme::Theme2, Theme::Theme3];

    /// Stable identifier, e.g. `theme2`.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Theme1 => "theme1",
            Self::Theme2 => "theme2",
            Self::Theme3 => "theme3",
        }
    }

    /// Position on the selector switch, starting at 1.
    pub fn index(&self) -> u8 {
        match self {
            Self::Theme1 => 1,
            Self::Theme2 => 2,
            Self::Theme3 => 3,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|theme| normalized == theme.id() || normalized == theme.index().to_string())
            .ok_or_else(|| ThemeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_preset() {
        assert_eq!(Theme::default(), Theme::Theme1);
    }

    #[test]
    fn parses_identifiers_and_indices() {
        assert_eq!("theme2".parse::<Theme>(), Ok(Theme::Theme2));
        assert_eq!("THEME3".parse::<Theme>(), Ok(Theme::Theme3));
        assert_eq!("1".parse::<Theme>(), Ok(Theme::Theme1));
    }

    #[test]
    fn rejects_unknown_theme() {
        assert_eq!("theme4".parse::<Theme>(), Err(ThemeError("theme4".to_string())));
    }

    #[test]
    fn serializes_as_identifier() {
        assert_eq!(serde_json::to_string(&Theme::Theme3).unwrap(), "\"theme3\"");
    }
}
