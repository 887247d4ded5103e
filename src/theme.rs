//! Light/dark theme flag and color palette
//!
//! The flag lives in `AppState` and reaches every component through props;
//! there is no ambient theme lookup.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette {
                bg: Color::Rgb(209, 213, 219),
                fg: Color::Rgb(20, 20, 20),
                accent: Color::Rgb(34, 197, 94),
                panel_bg: Color::Rgb(240, 240, 240),
                muted: Color::DarkGray,
                error: Color::Rgb(200, 50, 50),
            },
            Theme::Dark => Palette {
                bg: Color::Rgb(17, 24, 39),
                fg: Color::Rgb(230, 230, 230),
                accent: Color::Rgb(34, 197, 94),
                panel_bg: Color::Rgb(31, 41, 55),
                muted: Color::Gray,
                error: Color::Rgb(240, 100, 100),
            },
        }
    }
}

/// Concrete colors for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub panel_bg: Color,
    pub muted: Color,
    pub error: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_an_involution() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
    }

    #[test]
    fn palettes_differ() {
        assert_ne!(Theme::Light.palette(), Theme::Dark.palette());
    }
}
