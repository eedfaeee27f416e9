//! Color Themes
//!
//! Palettes for the dashboard. Each theme maps the activity bands and
//! the timeline markers to terminal colors; `t` cycles through them.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

use crate::config::Activity;

/// Selectable color palettes
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter, Default,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "title_case")]
pub enum ColorTheme {
    #[default]
    Midnight,
    Ocean,
    Forest,
    Sunset,
    Mono,
}

impl ColorTheme {
    /// The next theme in cycling order, wrapping around
    pub fn next(self) -> Self {
        let mut iter = Self::iter().cycle();
        // Position the iterator on self, then take the following variant.
        for theme in iter.by_ref() {
            if theme == self {
                break;
            }
        }
        iter.next().unwrap_or_default()
    }

    /// Ribbon color for an activity band
    pub fn activity_color(self, activity: Activity) -> Color {
        match (self, activity) {
            (_, Activity::Night) => Color::DarkGray,

            (Self::Midnight, Activity::Awake) => Color::Blue,
            (Self::Midnight, Activity::Work) => Color::LightBlue,

            (Self::Ocean, Activity::Awake) => Color::Cyan,
            (Self::Ocean, Activity::Work) => Color::LightCyan,

            (Self::Forest, Activity::Awake) => Color::Green,
            (Self::Forest, Activity::Work) => Color::LightGreen,

            (Self::Sunset, Activity::Awake) => Color::Yellow,
            (Self::Sunset, Activity::Work) => Color::LightRed,

            (Self::Mono, Activity::Awake) => Color::Gray,
            (Self::Mono, Activity::Work) => Color::White,
        }
    }

    /// Border color of the selected zone row
    pub fn selected_border(self) -> Color {
        match self {
            Self::Midnight => Color::Cyan,
            Self::Ocean => Color::LightCyan,
            Self::Forest => Color::LightGreen,
            Self::Sunset => Color::LightMagenta,
            Self::Mono => Color::White,
        }
    }

    /// Color of the live-clock marker
    pub fn now_marker(self) -> Color {
        match self {
            Self::Mono => Color::White,
            _ => Color::Green,
        }
    }

    /// Color of the scrub-position marker
    pub fn scrub_marker(self) -> Color {
        match self {
            Self::Sunset => Color::Cyan,
            Self::Mono => Color::Gray,
            _ => Color::Magenta,
        }
    }

    /// Colors of the DST transition glyphs
    pub fn dst_spring_forward(self) -> Color {
        Color::Green
    }

    pub fn dst_fall_back(self) -> Color {
        Color::Yellow
    }

    /// Foreground and background of the inline date labels
    pub fn date_label(self) -> (Color, Color) {
        (Color::White, Color::DarkGray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycling_visits_every_theme_and_wraps() {
        let start = ColorTheme::default();
        let mut seen = vec![start];
        let mut current = start;
        for _ in 0..ColorTheme::iter().count() {
            current = current.next();
            seen.push(current);
        }
        assert_eq!(*seen.last().unwrap(), start);
        for theme in ColorTheme::iter() {
            assert!(seen.contains(&theme), "cycle skipped {theme}");
        }
    }

    #[test]
    fn test_night_band_is_muted_in_every_theme() {
        for theme in ColorTheme::iter() {
            assert_eq!(theme.activity_color(Activity::Night), Color::DarkGray);
        }
    }

    #[test]
    fn test_theme_display_names() {
        assert_eq!(ColorTheme::Midnight.to_string(), "Midnight");
        assert_eq!(ColorTheme::Mono.to_string(), "Mono");
    }
}
