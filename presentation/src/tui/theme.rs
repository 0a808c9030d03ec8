//! Color themes — dark and light palettes for the TUI
//!
//! Every widget pulls its colors from [`Theme`] so the `t` key can swap
//! the whole screen at once.

use ratatui::style::Color;
use std::fmt;
use std::str::FromStr;

/// Color palette selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Switch to the other palette
    pub fn toggle(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Base background fill
    pub fn background(self) -> Color {
        match self {
            Theme::Dark => Color::Reset,
            Theme::Light => Color::White,
        }
    }

    /// Default text color
    pub fn text(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    /// Titles, focused borders, and the result value
    pub fn accent(self) -> Color {
        match self {
            Theme::Dark => Color::Cyan,
            Theme::Light => Color::Blue,
        }
    }

    /// Validation and division-by-zero messages
    pub fn error(self) -> Color {
        match self {
            Theme::Dark => Color::Red,
            Theme::Light => Color::LightRed,
        }
    }

    /// Unfocused borders and key hints
    pub fn muted(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Invalid Theme: {}", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trip() {
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("LIGHT".parse::<Theme>(), Ok(Theme::Light));
        assert!("solarized".parse::<Theme>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        assert_eq!(Theme::Dark.to_string().parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(Theme::Light.to_string().parse::<Theme>(), Ok(Theme::Light));
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(Theme::Dark.text(), Theme::Light.text());
        assert_ne!(Theme::Dark.background(), Theme::Light.background());
    }
}
