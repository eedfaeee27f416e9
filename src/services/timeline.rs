//! Timeline Scrub State
//!
//! The single shared instant every zone row renders against. The user
//! scrubs it along an unbounded time axis; the render window is always
//! 48 hours centered on the scrub position.

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

/// Half of the render window, on each side of the scrub position
const HALF_WINDOW_HOURS: i64 = 24;

/// Drift from "now" below which the timeline counts as un-scrubbed
const SCRUB_EPSILON_MINUTES: i64 = 1;

/// Step sizes for scrubbing the timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrubStep {
    QuarterHour,
    Hour,
    Day,
}

impl ScrubStep {
    pub fn duration(self) -> Duration {
        match self {
            Self::QuarterHour => Duration::minutes(15),
            Self::Hour => Duration::hours(1),
            Self::Day => Duration::days(1),
        }
    }
}

/// A DST transition direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DstTransition {
    /// Clocks jump forward; the UTC offset increases
    SpringForward,
    /// Clocks fall back; the UTC offset decreases
    FallBack,
}

impl DstTransition {
    /// Human description for status lines and the `zone` subcommand
    pub fn description(self) -> &'static str {
        match self {
            Self::SpringForward => "clocks spring forward",
            Self::FallBack => "clocks fall back",
        }
    }
}

/// The shared scrub state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    position: DateTime<Utc>,
}

impl Timeline {
    /// Start at the current instant
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { position: now }
    }

    /// The selected instant all zones render against
    pub fn position(&self) -> DateTime<Utc> {
        self.position
    }

    /// Move the selected instant later
    pub fn scrub_forward(&mut self, step: ScrubStep) {
        self.position += step.duration();
    }

    /// Move the selected instant earlier
    pub fn scrub_backward(&mut self, step: ScrubStep) {
        self.position -= step.duration();
    }

    /// Snap back to the current instant
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.position = now;
    }

    /// Follow the live clock while the user has not scrubbed away
    pub fn follow(&mut self, now: DateTime<Utc>) {
        if !self.is_scrubbed(now) {
            self.position = now;
        }
    }

    /// Whether the position has drifted away from the live clock
    pub fn is_scrubbed(&self, now: DateTime<Utc>) -> bool {
        (self.position - now).num_minutes().abs() >= SCRUB_EPSILON_MINUTES
    }

    /// Start of the render window
    pub fn window_start(&self) -> DateTime<Utc> {
        self.position - Duration::hours(HALF_WINDOW_HOURS)
    }

    /// End of the render window
    pub fn window_end(&self) -> DateTime<Utc> {
        self.position + Duration::hours(HALF_WINDOW_HOURS)
    }

    /// Maps an instant into [0, 1] within the render window, clamped
    pub fn position_ratio(&self, instant: DateTime<Utc>) -> f64 {
        let total = (self.window_end() - self.window_start()).num_seconds();
        if total == 0 {
            return 0.0;
        }
        let elapsed = (instant - self.window_start()).num_seconds();
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Terminal column for an instant on a ribbon of the given width
    pub fn column(&self, instant: DateTime<Utc>, width: u16) -> u16 {
        let position = (self.position_ratio(instant) * f64::from(width)).round() as u16;
        position.min(width.saturating_sub(1))
    }

    /// DST transitions of a zone inside the render window.
    ///
    /// Walks the window hour by hour comparing fixed UTC offsets; the
    /// window is half-open, so a transition on the start edge is seen and
    /// one on the end edge is not. An offset increase means clocks sprang
    /// forward, a decrease means they fell back.
    pub fn dst_transitions(&self, tz: Tz) -> Vec<(DateTime<Utc>, DstTransition)> {
        let mut transitions = Vec::new();
        let end = self.window_end();
        let mut current = self.window_start();

        while current < end {
            let next = current + Duration::hours(1);
            let before = offset_seconds(tz, current);
            let after = offset_seconds(tz, next);

            if after > before {
                transitions.push((current, DstTransition::SpringForward));
            } else if after < before {
                transitions.push((current, DstTransition::FallBack));
            }

            current = next;
        }

        transitions
    }
}

fn offset_seconds(tz: Tz, instant: DateTime<Utc>) -> i32 {
    use chrono::{Offset, TimeZone};
    tz.offset_from_utc_datetime(&instant.naive_utc())
        .fix()
        .local_minus_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn test_position_sits_mid_window() {
        let timeline = Timeline::new(at(2026, 6, 15, 12));
        assert_eq!(timeline.position_ratio(timeline.position()), 0.5);
        assert_eq!(timeline.column(timeline.position(), 100), 50);
    }

    #[test]
    fn test_ratio_clamps_outside_window() {
        let timeline = Timeline::new(at(2026, 6, 15, 12));
        assert_eq!(timeline.position_ratio(at(2020, 1, 1, 0)), 0.0);
        assert_eq!(timeline.position_ratio(at(2030, 1, 1, 0)), 1.0);
    }

    #[test]
    fn test_column_stays_inside_ribbon() {
        let timeline = Timeline::new(at(2026, 6, 15, 12));
        assert_eq!(timeline.column(timeline.window_end(), 80), 79);
        assert_eq!(timeline.column(timeline.window_start(), 80), 0);
        // Degenerate widths never panic
        assert_eq!(timeline.column(timeline.position(), 0), 0);
        assert_eq!(timeline.column(timeline.position(), 1), 0);
    }

    #[test]
    fn test_scrub_and_reset() {
        let now = at(2026, 6, 15, 12);
        let mut timeline = Timeline::new(now);

        timeline.scrub_forward(ScrubStep::Hour);
        timeline.scrub_forward(ScrubStep::QuarterHour);
        assert_eq!(timeline.position(), now + Duration::minutes(75));
        assert!(timeline.is_scrubbed(now));

        timeline.scrub_backward(ScrubStep::Day);
        assert_eq!(timeline.position(), now + Duration::minutes(75) - Duration::days(1));

        timeline.reset(now);
        assert_eq!(timeline.position(), now);
        assert!(!timeline.is_scrubbed(now));
    }

    #[test]
    fn test_follow_tracks_clock_only_when_not_scrubbed() {
        let now = at(2026, 6, 15, 12);
        let mut timeline = Timeline::new(now);

        let later = now + Duration::seconds(30);
        timeline.follow(later);
        assert_eq!(timeline.position(), later);

        timeline.scrub_forward(ScrubStep::Day);
        let even_later = now + Duration::seconds(60);
        timeline.follow(even_later);
        assert_eq!(timeline.position(), later + Duration::days(1));
    }

    #[test]
    fn test_spring_forward_detected_in_window() {
        // US spring forward 2026: March 8, 07:00 UTC
        let timeline = Timeline::new(at(2026, 3, 8, 12));
        let transitions = timeline.dst_transitions(chrono_tz::America::New_York);
        assert_eq!(transitions.len(), 1);
        let (instant, kind) = transitions[0];
        assert_eq!(kind, DstTransition::SpringForward);
        assert_eq!(instant, at(2026, 3, 8, 6));
    }

    #[test]
    fn test_fall_back_detected_in_window() {
        // US fall back 2026: November 1, 06:00 UTC
        let timeline = Timeline::new(at(2026, 11, 1, 12));
        let transitions = timeline.dst_transitions(chrono_tz::America::New_York);
        assert_eq!(transitions.len(), 1);
        assert_eq!(transitions[0].1, DstTransition::FallBack);
    }

    #[test]
    fn test_no_transitions_for_utc() {
        let timeline = Timeline::new(at(2026, 3, 8, 12));
        assert!(timeline.dst_transitions(chrono_tz::UTC).is_empty());
    }
}
