//! Application State
//!
//! The interactive dashboard's state machine: the zone list, the shared
//! timeline, overlays, and key handling. Rendering lives in `ui`; the
//! event loop in `main` calls `tick` and `handle_key` and draws.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use tracing::{debug, info};

use crate::config::Config;
use crate::error::AppResult;
use crate::models::city::City;
use crate::models::zone::Zone;
use crate::services::time_provider::TimeProvider;
use crate::services::timeline::{ScrubStep, Timeline};
use crate::services::timezone_service::TimezoneService;
use crate::ui::search::MAX_RESULTS;

/// Modal overlay state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    None,
    Help,
    Search(SearchState),
}

/// State of the add-zone search overlay
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub input: String,
    pub results: Vec<&'static City>,
    pub selected: usize,
}

/// The interactive application
pub struct App {
    pub config: Config,
    pub zones: Vec<Zone>,
    pub selected: usize,
    pub timeline: Timeline,
    pub now: DateTime<Utc>,
    pub overlay: Overlay,
    pub status: Option<String>,

    registry: TimezoneService,
    time_provider: Arc<dyn TimeProvider>,
    config_path: PathBuf,
    dirty: bool,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: Config,
        config_path: PathBuf,
        time_provider: Arc<dyn TimeProvider>,
    ) -> AppResult<Self> {
        let registry = TimezoneService::new();
        let zones = config.resolve_zones(&registry)?;
        let now = time_provider.now_utc();

        Ok(Self {
            config,
            zones,
            selected: 0,
            timeline: Timeline::new(now),
            now,
            overlay: Overlay::None,
            status: None,
            registry,
            time_provider,
            config_path,
            dirty: false,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Refresh the clock; the timeline follows it until scrubbed away
    pub fn tick(&mut self) {
        self.now = self.time_provider.now_utc();
        self.timeline.follow(self.now);
    }

    /// Persist the config if any interactive mutation touched it
    pub fn save_if_dirty(&mut self) -> AppResult<()> {
        if self.dirty {
            self.config.save(&self.config_path)?;
            self.dirty = false;
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return;
        }
        self.status = None;

        match std::mem::take(&mut self.overlay) {
            Overlay::Help => self.handle_help_key(key),
            Overlay::Search(state) => self.handle_search_key(state, key),
            Overlay::None => self.handle_dashboard_key(key),
        }
    }

    fn handle_help_key(&mut self, key: KeyEvent) {
        // Any dismissal key closes; everything else keeps the overlay up.
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {}
            _ => self.overlay = Overlay::Help,
        }
    }

    fn handle_search_key(&mut self, mut state: SearchState, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {}
            KeyCode::Enter => {
                if let Some(city) = state.results.get(state.selected).copied() {
                    self.add_city(city);
                } else {
                    self.status = Some(format!("No match for '{}'", state.input));
                }
            }
            KeyCode::Backspace => {
                state.input.pop();
                state.results = self.visible_results(&state.input);
                state.selected = 0;
                self.overlay = Overlay::Search(state);
            }
            KeyCode::Down => {
                if !state.results.is_empty() {
                    state.selected = (state.selected + 1) % state.results.len();
                }
                self.overlay = Overlay::Search(state);
            }
            KeyCode::Up => {
                if !state.results.is_empty() {
                    state.selected = state
                        .selected
                        .checked_sub(1)
                        .unwrap_or(state.results.len() - 1);
                }
                self.overlay = Overlay::Search(state);
            }
            KeyCode::Char(c) => {
                state.input.push(c);
                state.results = self.visible_results(&state.input);
                state.selected = 0;
                self.overlay = Overlay::Search(state);
            }
            _ => self.overlay = Overlay::Search(state),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            // Timeline scrubbing
            KeyCode::Char('l') | KeyCode::Right => self.timeline.scrub_forward(ScrubStep::Hour),
            KeyCode::Char('h') | KeyCode::Left => self.timeline.scrub_backward(ScrubStep::Hour),
            KeyCode::Char('L') => self.timeline.scrub_forward(ScrubStep::QuarterHour),
            KeyCode::Char('H') => self.timeline.scrub_backward(ScrubStep::QuarterHour),
            KeyCode::Char('J') => self.timeline.scrub_forward(ScrubStep::Day),
            KeyCode::Char('K') => self.timeline.scrub_backward(ScrubStep::Day),
            KeyCode::Char('n') => self.timeline.reset(self.now),

            // Zone list navigation
            KeyCode::Char('j') | KeyCode::Down => {
                if !self.zones.is_empty() {
                    self.selected = (self.selected + 1) % self.zones.len();
                }
            }
            KeyCode::Char('k') | KeyCode::Up => {
                if !self.zones.is_empty() {
                    self.selected = self
                        .selected
                        .checked_sub(1)
                        .unwrap_or(self.zones.len() - 1);
                }
            }

            // Zone list editing
            KeyCode::Char('a') => self.overlay = Overlay::Search(SearchState::default()),
            KeyCode::Char('x') => self.remove_selected(),

            // Display toggles
            KeyCode::Char('t') => {
                self.config.theme = self.config.theme.next();
                self.status = Some(format!("Theme: {}", self.config.theme));
                self.dirty = true;
            }
            KeyCode::Char('f') => {
                self.config.time_format = self.config.time_format.toggled();
                self.status = Some(format!("Clock: {}", self.config.time_format));
                self.dirty = true;
            }
            KeyCode::Char('m') => {
                self.config.zone_style = self.config.zone_style.toggled();
                self.dirty = true;
            }
            KeyCode::Char('d') => {
                self.config.show_date = !self.config.show_date;
                self.dirty = true;
            }
            KeyCode::Char('D') => {
                self.config.show_dst = !self.config.show_dst;
                self.dirty = true;
            }
            KeyCode::Char('?') => self.overlay = Overlay::Help,

            _ => {}
        }
    }

    /// Search hits capped at what the overlay can show, so selection
    /// cycling never leaves the visible list.
    fn visible_results(&self, query: &str) -> Vec<&'static City> {
        let mut results = self.registry.search(query);
        results.truncate(MAX_RESULTS);
        results
    }

    fn add_city(&mut self, city: &'static City) {
        if self.zones.iter().any(|z| z.label == city.name) {
            self.status = Some(format!("{} is already on the dashboard", city.name));
            return;
        }

        info!(city = city.name, tz = city.tz_name(), "Zone added");
        self.zones.push(Zone::from_city(city));
        self.config.zones.push(city.name.to_string());
        self.selected = self.zones.len() - 1;
        self.status = Some(format!("Added {}", city.name));
        self.dirty = true;
    }

    fn remove_selected(&mut self) {
        if self.zones.len() <= 1 {
            self.status = Some("Cannot remove the last zone".to_string());
            return;
        }

        let removed = self.zones.remove(self.selected);
        self.config.zones.remove(self.selected);
        if self.selected >= self.zones.len() {
            self.selected = self.zones.len() - 1;
        }
        debug!(zone = %removed.label, "Zone removed");
        self.status = Some(format!("Removed {}", removed.label));
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::time_provider::MockTimeProvider;
    use chrono::{Duration, TimeZone};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> (App, Arc<MockTimeProvider>) {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let provider = Arc::new(MockTimeProvider::new(now));
        let mut config = Config::default();
        config.zones = vec!["Tokyo".to_string(), "London".to_string()];
        let app = App::new(config, PathBuf::from("/nonexistent/config.toml"), provider.clone())
            .unwrap();
        (app, provider)
    }

    #[test]
    fn test_scrub_keys_move_the_timeline() {
        let (mut app, _) = test_app();
        let start = app.timeline.position();

        app.handle_key(press(KeyCode::Char('l')));
        assert_eq!(app.timeline.position(), start + Duration::hours(1));

        app.handle_key(press(KeyCode::Char('H')));
        assert_eq!(app.timeline.position(), start + Duration::minutes(45));

        app.handle_key(press(KeyCode::Char('J')));
        app.handle_key(press(KeyCode::Char('n')));
        assert_eq!(app.timeline.position(), app.now);
    }

    #[test]
    fn test_zone_navigation_wraps() {
        let (mut app, _) = test_app();
        assert_eq!(app.selected, 0);
        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.selected, 1);
        app.handle_key(press(KeyCode::Char('j')));
        assert_eq!(app.selected, 0);
        app.handle_key(press(KeyCode::Char('k')));
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_add_zone_through_search() {
        let (mut app, _) = test_app();
        app.handle_key(press(KeyCode::Char('a')));
        for c in "sydney".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.overlay, Overlay::None);
        assert_eq!(app.zones.len(), 3);
        assert_eq!(app.zones[2].label, "Sydney");
        assert_eq!(app.config.zones[2], "Sydney");
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_search_selection_stays_within_visible_rows() {
        let (mut app, _) = test_app();
        app.handle_key(press(KeyCode::Char('a')));
        // A one-letter query matches far more cities than the overlay
        // can show; the result list must be capped at the visible rows.
        app.handle_key(press(KeyCode::Char('a')));

        let len = match &app.overlay {
            Overlay::Search(state) => {
                assert!(!state.results.is_empty());
                assert!(state.results.len() <= MAX_RESULTS);
                state.results.len()
            }
            other => panic!("expected search overlay, got {other:?}"),
        };

        for _ in 0..len {
            app.handle_key(press(KeyCode::Down));
            if let Overlay::Search(state) = &app.overlay {
                assert!(state.selected < state.results.len());
            }
        }
        match &app.overlay {
            Overlay::Search(state) => assert_eq!(state.selected, 0),
            other => panic!("expected search overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_zone_is_rejected() {
        let (mut app, _) = test_app();
        app.handle_key(press(KeyCode::Char('a')));
        for c in "tokyo".chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));

        assert_eq!(app.zones.len(), 2);
        assert!(app.status.as_deref().unwrap().contains("already"));
    }

    #[test]
    fn test_remove_zone_but_never_the_last() {
        let (mut app, _) = test_app();
        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.zones.len(), 1);

        app.handle_key(press(KeyCode::Char('x')));
        assert_eq!(app.zones.len(), 1);
        assert!(app.status.as_deref().unwrap().contains("last zone"));
    }

    #[test]
    fn test_theme_cycles_and_marks_dirty() {
        let (mut app, _) = test_app();
        let before = app.config.theme;
        app.handle_key(press(KeyCode::Char('t')));
        assert_ne!(app.config.theme, before);
        assert!(app.dirty);
    }

    #[test]
    fn test_tick_follows_clock_until_scrubbed() {
        let (mut app, provider) = test_app();
        provider.advance(Duration::seconds(30));
        app.tick();
        assert_eq!(app.timeline.position(), app.now);

        app.handle_key(press(KeyCode::Char('J')));
        let scrubbed = app.timeline.position();
        provider.advance(Duration::seconds(30));
        app.tick();
        assert_eq!(app.timeline.position(), scrubbed);
    }

    #[test]
    fn test_escape_closes_overlay_before_quitting() {
        let (mut app, _) = test_app();
        app.handle_key(press(KeyCode::Char('?')));
        assert_eq!(app.overlay, Overlay::Help);

        app.handle_key(press(KeyCode::Esc));
        assert_eq!(app.overlay, Overlay::None);
        assert!(!app.should_quit());

        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_save_if_dirty_writes_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let provider = Arc::new(MockTimeProvider::new(now));
        let mut config = Config::default();
        config.zones = vec!["Tokyo".to_string()];
        let mut app = App::new(config, path.clone(), provider).unwrap();

        app.handle_key(press(KeyCode::Char('t')));
        app.save_if_dirty().unwrap();
        assert!(path.exists());

        let reloaded = Config::load(&path).unwrap();
        assert_eq!(reloaded.theme, app.config.theme);
    }
}
