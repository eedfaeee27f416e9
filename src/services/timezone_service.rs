//! Timezone Registry Service
//!
//! Resolves city names and IANA identifiers to zones, searches the city
//! database, and answers DST questions (does a zone observe it, when is
//! the next transition).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Offset, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};
use std::collections::HashSet;

use crate::models::city::{City, CITIES};
use crate::models::zone::Zone;
use crate::services::timeline::DstTransition;

/// Errors that can occur during timezone operations
#[derive(Debug, thiserror::Error)]
pub enum TimezoneError {
    #[error("Unknown city or timezone: {}{}", .query, suggestion_suffix(.suggestion))]
    UnknownCity {
        query: String,
        suggestion: Option<String>,
    },

    #[error("Invalid timezone identifier: {timezone}")]
    InvalidTimezone { timezone: String },

    #[error("Timezone validation failed: {reason}")]
    ValidationFailed { reason: String },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean {s}?)"),
        None => String::new(),
    }
}

/// Result type for timezone operations
pub type TimezoneResult<T> = Result<T, TimezoneError>;

/// Service for resolving and inspecting timezones
#[derive(Debug, Clone)]
pub struct TimezoneService {
    /// Cache of valid timezone identifiers for fast lookup
    valid_timezones: HashSet<&'static str>,
}

impl TimezoneService {
    /// Creates a new service backed by the full chrono-tz database
    pub fn new() -> Self {
        let valid_timezones = TZ_VARIANTS.iter().map(|tz| tz.name()).collect();
        Self { valid_timezones }
    }

    /// Validates that a string is a known IANA timezone identifier
    pub fn validate_timezone(&self, timezone: &str) -> TimezoneResult<()> {
        if timezone.is_empty() {
            return Err(TimezoneError::ValidationFailed {
                reason: "Timezone cannot be empty".to_string(),
            });
        }

        if self.valid_timezones.contains(timezone) {
            return Ok(());
        }

        timezone
            .parse::<Tz>()
            .map(|_| ())
            .map_err(|_| TimezoneError::InvalidTimezone {
                timezone: timezone.to_string(),
            })
    }

    /// Converts a timezone string to a Tz value
    pub fn parse_timezone(&self, timezone: &str) -> TimezoneResult<Tz> {
        self.validate_timezone(timezone)?;

        timezone
            .parse::<Tz>()
            .map_err(|_| TimezoneError::InvalidTimezone {
                timezone: timezone.to_string(),
            })
    }

    /// Normalizes common aliases to IANA identifiers ("ET" -> "US/Eastern")
    pub fn normalize_timezone(&self, timezone: &str) -> String {
        let trimmed = timezone.trim();

        match trimmed.to_uppercase().as_str() {
            "ET" | "EASTERN" => "US/Eastern",
            "CT" | "CENTRAL" => "US/Central",
            "MT" | "MOUNTAIN" => "US/Mountain",
            "PT" | "PACIFIC" => "US/Pacific",
            "GMT" => "Europe/London",
            "UTC" | "ZULU" => "UTC",
            _ => trimmed,
        }
        .to_string()
    }

    /// Resolves a user query to a displayable zone.
    ///
    /// Tries the city database first (name, then alias), then falls back
    /// to parsing the query as an IANA identifier. Unknown queries carry
    /// the closest search hit as a suggestion.
    pub fn resolve(&self, query: &str) -> TimezoneResult<Zone> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(TimezoneError::ValidationFailed {
                reason: "City name cannot be empty".to_string(),
            });
        }

        if let Some(city) = CITIES.iter().find(|c| c.matches(trimmed)) {
            return Ok(Zone::from_city(city));
        }

        let normalized = self.normalize_timezone(trimmed);
        if let Ok(tz) = self.parse_timezone(&normalized) {
            return Ok(Zone::from_tz(tz));
        }

        let suggestion = self
            .search(trimmed)
            .first()
            .map(|city| city.name.to_string());

        Err(TimezoneError::UnknownCity {
            query: trimmed.to_string(),
            suggestion,
        })
    }

    /// Searches the city database, ranked: exact match, alias match, name
    /// prefix, then name substring. Case-insensitive; an empty query
    /// yields nothing.
    pub fn search(&self, query: &str) -> Vec<&'static City> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(u8, &'static City)> = CITIES
            .iter()
            .filter_map(|city| {
                let name = city.name.to_lowercase();
                let rank = if name == needle {
                    0
                } else if city.aliases.iter().any(|a| a.eq_ignore_ascii_case(&needle)) {
                    1
                } else if name.starts_with(&needle) {
                    2
                } else if name.contains(&needle) {
                    3
                } else {
                    return None;
                };
                Some((rank, city))
            })
            .collect();

        ranked.sort_by_key(|(rank, city)| (*rank, city.name));
        ranked.into_iter().map(|(_, city)| city).collect()
    }

    /// All registry cities, sorted by name
    pub fn all_cities(&self) -> Vec<&'static City> {
        let mut cities: Vec<&'static City> = CITIES.iter().collect();
        cities.sort_by_key(|c| c.name);
        cities
    }

    /// Whether a timezone observes Daylight Saving Time, judged by
    /// comparing its January and July offsets for the given year.
    pub fn timezone_observes_dst(&self, tz: Tz, year: i32) -> TimezoneResult<bool> {
        let jan = probe_offset(tz, year, 1)?;
        let jul = probe_offset(tz, year, 7)?;
        Ok(jan != jul)
    }

    /// Offset from UTC in seconds at the given instant
    pub fn utc_offset_at(&self, tz: Tz, instant: DateTime<Utc>) -> i32 {
        tz.offset_from_utc_datetime(&instant.naive_utc())
            .fix()
            .local_minus_utc()
    }

    /// Finds the next DST transition strictly after `from`, looking ahead
    /// up to a year. The hourly scan finds the bracketing hour; a bisection
    /// narrows the instant to the minute.
    pub fn next_transition(
        &self,
        tz: Tz,
        from: DateTime<Utc>,
    ) -> Option<(DateTime<Utc>, DstTransition)> {
        let horizon = from + Duration::days(366);
        let mut cursor = from;

        while cursor < horizon {
            let next = cursor + Duration::hours(1);
            let before = self.utc_offset_at(tz, cursor);
            let after = self.utc_offset_at(tz, next);
            if before != after {
                let at = self.bisect_transition(tz, cursor, next);
                let kind = if after > before {
                    DstTransition::SpringForward
                } else {
                    DstTransition::FallBack
                };
                return Some((at, kind));
            }
            cursor = next;
        }

        None
    }

    /// Narrows a transition bracketed by (lo, hi] down to minute precision
    fn bisect_transition(&self, tz: Tz, mut lo: DateTime<Utc>, mut hi: DateTime<Utc>) -> DateTime<Utc> {
        let offset_lo = self.utc_offset_at(tz, lo);
        while hi - lo > Duration::minutes(1) {
            let mid = lo + (hi - lo) / 2;
            if self.utc_offset_at(tz, mid) == offset_lo {
                lo = mid;
            } else {
                hi = mid;
            }
        }
        hi
    }

    /// Comprehensive information about a zone at an instant
    pub fn zone_info(&self, zone: &Zone, instant: DateTime<Utc>) -> TimezoneInfo {
        let year = instant.year();
        let observes_dst = self.timezone_observes_dst(zone.tz, year).unwrap_or(false);

        TimezoneInfo {
            label: zone.label.clone(),
            identifier: zone.tz.name().to_string(),
            abbreviation: zone.abbreviation(instant),
            offset_string: zone.offset_string(instant),
            utc_offset_seconds: zone.utc_offset_seconds(instant),
            observes_dst,
            is_dst: zone.is_dst(instant),
            next_transition: self.next_transition(zone.tz, instant),
        }
    }
}

impl Default for TimezoneService {
    fn default() -> Self {
        Self::new()
    }
}

/// Midnight UTC on the first of the given month, as a fixed offset probe
fn probe_offset(tz: Tz, year: i32, month: u32) -> TimezoneResult<chrono::FixedOffset> {
    let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        TimezoneError::ValidationFailed {
            reason: format!("Invalid probe date {year}-{month:02}-01"),
        }
    })?;
    let naive = date.and_hms_opt(0, 0, 0).ok_or_else(|| TimezoneError::ValidationFailed {
        reason: "Invalid probe time".to_string(),
    })?;
    Ok(tz.offset_from_utc_datetime(&naive).fix())
}

/// Comprehensive timezone information for one zone
#[derive(Debug, Clone)]
pub struct TimezoneInfo {
    /// Display label (city name)
    pub label: String,
    /// IANA identifier (e.g. "America/New_York")
    pub identifier: String,
    /// Abbreviation at the queried instant (EST, JST, ...)
    pub abbreviation: String,
    /// Compact offset string ("UTC-5")
    pub offset_string: String,
    /// Offset from UTC in seconds at the queried instant
    pub utc_offset_seconds: i32,
    /// Whether this zone observes Daylight Saving Time this year
    pub observes_dst: bool,
    /// Whether DST is in effect at the queried instant
    pub is_dst: bool,
    /// Next DST transition within a year, if any
    pub next_transition: Option<(DateTime<Utc>, DstTransition)>,
}
