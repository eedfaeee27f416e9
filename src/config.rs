//! Configuration management for alltz
//!
//! The persistent user configuration: which zones are on the dashboard,
//! the chosen theme and formats, and the hour bands that color the
//! activity ribbon. Stored as TOML in the platform config directory.

use std::env;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::models::zone::{TimeFormat, Zone, ZoneStyle};
use crate::services::timezone_service::TimezoneService;
use crate::ui::theme::ColorTheme;

/// Environment variable overriding the config file location
pub const CONFIG_ENV_VAR: &str = "ALLTZ_CONFIG";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine a config directory for this platform")]
    NoConfigDir,

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Unknown zone in config: {0}")]
    UnknownZone(String),

    #[error("Invalid hour bands: {0}")]
    InvalidHourBands(String),
}

/// Activity level of a local hour, driving the ribbon glyph and color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    Night,
    Awake,
    Work,
}

impl Activity {
    /// Ribbon glyph for this activity band
    pub fn glyph(self) -> char {
        match self {
            Self::Night => '░',
            Self::Awake => '▒',
            Self::Work => '▓',
        }
    }
}

/// Hour-band boundaries for the activity ribbon (local hours, 0-24)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeDisplayConfig {
    pub work_start: u32,
    pub work_end: u32,
    pub awake_start: u32,
    pub awake_end: u32,
}

impl Default for TimeDisplayConfig {
    fn default() -> Self {
        Self {
            work_start: 8,
            work_end: 18,
            awake_start: 6,
            awake_end: 22,
        }
    }
}

impl TimeDisplayConfig {
    /// Classify a local hour into its activity band
    pub fn activity(&self, hour: u32) -> Activity {
        if hour >= self.work_start && hour < self.work_end {
            Activity::Work
        } else if hour >= self.awake_start && hour < self.awake_end {
            Activity::Awake
        } else {
            Activity::Night
        }
    }

    /// Local hour at the middle of the working band, used for date labels
    pub fn work_middle_hour(&self) -> u32 {
        (self.work_start + self.work_end) / 2
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("work_start", self.work_start),
            ("work_end", self.work_end),
            ("awake_start", self.awake_start),
            ("awake_end", self.awake_end),
        ] {
            if value > 24 {
                return Err(ConfigError::InvalidHourBands(format!(
                    "{name} must be within 0-24, got {value}"
                )));
            }
        }
        if self.work_start >= self.work_end {
            return Err(ConfigError::InvalidHourBands(format!(
                "work_start ({}) must be before work_end ({})",
                self.work_start, self.work_end
            )));
        }
        if self.awake_start >= self.awake_end {
            return Err(ConfigError::InvalidHourBands(format!(
                "awake_start ({}) must be before awake_end ({})",
                self.awake_start, self.awake_end
            )));
        }
        Ok(())
    }
}

/// Persistent application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered zone list: city names or IANA identifiers, resolved
    /// through the registry at startup
    pub zones: Vec<String>,

    /// Color theme for the dashboard
    pub theme: ColorTheme,

    /// 12- or 24-hour clock
    pub time_format: TimeFormat,

    /// Short or full zone row titles
    pub zone_style: ZoneStyle,

    /// Render date labels on the ribbon
    pub show_date: bool,

    /// Render DST transition markers
    pub show_dst: bool,

    /// Activity band boundaries
    pub time_display: TimeDisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            zones: default_zone_names(),
            theme: ColorTheme::default(),
            time_format: TimeFormat::default(),
            zone_style: ZoneStyle::default(),
            show_date: false,
            show_dst: true,
            time_display: TimeDisplayConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the config file path: `ALLTZ_CONFIG` wins, otherwise the
    /// platform config directory.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        if let Ok(path) = env::var(CONFIG_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        dirs::config_dir()
            .map(|dir| dir.join("alltz").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load the config from the given path. A missing file yields the
    /// defaults; a malformed file is an error, never a silent reset.
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        info!(path = %path.display(), zones = config.zones.len(), "Loaded config");
        Ok(config)
    }

    /// Write the config to the given path, creating parent directories
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        info!(path = %path.display(), "Saved config");
        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.zones.is_empty() {
            return Err(ConfigError::UnknownZone(
                "zone list cannot be empty".to_string(),
            ));
        }
        self.time_display.validate()
    }

    /// Resolve the configured zone names into displayable zones. An
    /// unresolvable name surfaces as an error carrying that name.
    pub fn resolve_zones(&self, registry: &TimezoneService) -> Result<Vec<Zone>, ConfigError> {
        self.zones
            .iter()
            .map(|name| {
                registry
                    .resolve(name)
                    .map_err(|_| ConfigError::UnknownZone(name.clone()))
            })
            .collect()
    }
}

/// Starter zone list: the local zone when detectable, then three majors
/// spread across the globe.
fn default_zone_names() -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    if let Ok(local) = iana_time_zone::get_timezone() {
        if local.parse::<chrono_tz::Tz>().is_ok() {
            names.push(local);
        }
    }
    if names.is_empty() {
        names.push("UTC".to_string());
    }

    for major in ["New York", "London", "Tokyo"] {
        if !names.iter().any(|n| n.eq_ignore_ascii_case(major)) {
            names.push(major.to_string());
        }
    }

    names
}
