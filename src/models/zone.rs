//! Zone Display Model
//!
//! A display-oriented wrapper over a chrono-tz timezone: knows its label,
//! offset string, abbreviation, and DST status at a given instant. Also
//! hosts the display enums the dashboard cycles through.

use chrono::{DateTime, Offset, Utc};
use chrono_tz::{OffsetComponents, Tz};
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::models::city::City;

/// Clock face format for rendered times
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFormat {
    /// 24-hour clock (14:30)
    #[default]
    #[strum(serialize = "24h")]
    TwentyFourHour,
    /// 12-hour clock (2:30 PM)
    #[strum(serialize = "12h")]
    TwelveHour,
}

impl TimeFormat {
    /// Toggle between the two formats
    pub fn toggled(self) -> Self {
        match self {
            Self::TwentyFourHour => Self::TwelveHour,
            Self::TwelveHour => Self::TwentyFourHour,
        }
    }

    /// strftime pattern for the scrub readout line
    pub fn readout_pattern(self) -> &'static str {
        match self {
            Self::TwentyFourHour => "%H:%M %a",
            Self::TwelveHour => "%I:%M %p %a",
        }
    }

}

/// How a zone row is titled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ZoneStyle {
    /// City label plus UTC offset ("Tokyo UTC+9")
    #[default]
    #[strum(serialize = "short")]
    Short,
    /// City label plus IANA identifier ("Tokyo (Asia/Tokyo)")
    #[strum(serialize = "full")]
    Full,
}

impl ZoneStyle {
    pub fn toggled(self) -> Self {
        match self {
            Self::Short => Self::Full,
            Self::Full => Self::Short,
        }
    }
}

/// A timezone as displayed on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    /// Human label shown in the row title, usually a city name
    pub label: String,
    /// The IANA timezone backing this row
    pub tz: Tz,
}

impl Zone {
    pub fn new(label: impl Into<String>, tz: Tz) -> Self {
        Self { label: label.into(), tz }
    }

    /// Build a zone from a registry city
    pub fn from_city(city: &City) -> Self {
        Self::new(city.name, city.tz)
    }

    /// Build a zone straight from a timezone, labelled by the last path
    /// segment of the identifier ("America/New_York" -> "New York").
    pub fn from_tz(tz: Tz) -> Self {
        let label = tz
            .name()
            .rsplit('/')
            .next()
            .unwrap_or(tz.name())
            .replace('_', " ");
        Self::new(label, tz)
    }

    /// Convert a UTC instant into this zone's local time
    pub fn convert(&self, instant: DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.tz)
    }

    /// Offset from UTC in seconds at the given instant
    pub fn utc_offset_seconds(&self, instant: DateTime<Utc>) -> i32 {
        self.convert(instant).offset().fix().local_minus_utc()
    }

    /// Compact offset string at the given instant: "UTC+9", "UTC-4",
    /// "UTC+5:30". Minutes are only shown for fractional offsets.
    pub fn offset_string(&self, instant: DateTime<Utc>) -> String {
        let total = self.utc_offset_seconds(instant);
        let sign = if total < 0 { '-' } else { '+' };
        let abs = total.abs();
        let hours = abs / 3600;
        let minutes = (abs % 3600) / 60;
        if minutes == 0 {
            format!("UTC{sign}{hours}")
        } else {
            format!("UTC{sign}{hours}:{minutes:02}")
        }
    }

    /// Timezone abbreviation at the given instant (JST, EDT, ...)
    pub fn abbreviation(&self, instant: DateTime<Utc>) -> String {
        self.convert(instant).format("%Z").to_string()
    }

    /// Whether daylight saving is in effect at the given instant
    pub fn is_dst(&self, instant: DateTime<Utc>) -> bool {
        !self.convert(instant).offset().dst_offset().is_zero()
    }

    /// "Tokyo (Asia/Tokyo)" style title
    pub fn full_name(&self) -> String {
        format!("{} ({})", self.label, self.tz.name())
    }

    /// Row title for the given display style
    pub fn title(&self, style: ZoneStyle, instant: DateTime<Utc>) -> String {
        match style {
            ZoneStyle::Short => format!("{} {}", self.label, self.offset_string(instant)),
            ZoneStyle::Full => self.full_name(),
        }
    }
}
