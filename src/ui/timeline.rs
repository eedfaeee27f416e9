//! Timeline Row Widget
//!
//! One bordered row per zone: a 48-hour activity ribbon rendered against
//! the shared scrub position, with live-clock and scrub markers, DST
//! transition glyphs, optional date labels, and a local-time readout.

use chrono::{DateTime, Days, Duration, TimeZone, Timelike, Utc};
use ratatui::{
    buffer::Buffer,
    layout::{Margin, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::config::TimeDisplayConfig;
use crate::models::zone::{TimeFormat, Zone, ZoneStyle};
use crate::services::timeline::{DstTransition, Timeline};
use crate::ui::theme::ColorTheme;

/// Rendered height of one zone row, borders included
pub const ROW_HEIGHT: u16 = 4;

pub struct TimelineWidget<'a> {
    pub timeline: &'a Timeline,
    pub now: DateTime<Utc>,
    pub zone: &'a Zone,
    pub selected: bool,
    pub time_format: TimeFormat,
    pub zone_style: ZoneStyle,
    pub bands: &'a TimeDisplayConfig,
    pub theme: ColorTheme,
    pub show_date: bool,
    pub show_dst: bool,
}

impl TimelineWidget<'_> {
    /// Glyph and color for the ribbon column covering `instant`
    fn ribbon_cell(&self, instant: DateTime<Utc>) -> (char, ratatui::style::Color) {
        let local_hour = instant.with_timezone(&self.zone.tz).hour();
        let activity = self.bands.activity(local_hour);
        (activity.glyph(), self.theme.activity_color(activity))
    }

    fn render_ribbon(&self, inner: Rect, buf: &mut Buffer) {
        let width = inner.width;
        let start = self.timeline.window_start();
        let total_minutes = (self.timeline.window_end() - start).num_minutes();

        for i in 0..width {
            let minutes = (f64::from(i) / f64::from(width) * total_minutes as f64) as i64;
            let (glyph, color) = self.ribbon_cell(start + Duration::minutes(minutes));
            buf[(inner.x + i, inner.y)]
                .set_char(glyph)
                .set_style(Style::default().fg(color));
        }
    }

    fn render_markers(&self, inner: Rect, buf: &mut Buffer) {
        let now_col = self.timeline.column(self.now, inner.width);
        buf[(inner.x + now_col, inner.y)]
            .set_char('│')
            .set_style(Style::default().fg(self.theme.now_marker()));

        let scrub_col = self.timeline.column(self.timeline.position(), inner.width);
        if scrub_col != now_col {
            buf[(inner.x + scrub_col, inner.y)]
                .set_char('┃')
                .set_style(Style::default().fg(self.theme.scrub_marker()));
        }
    }

    fn render_dst_markers(&self, inner: Rect, buf: &mut Buffer) {
        for (instant, transition) in self.timeline.dst_transitions(self.zone.tz) {
            let col = self.timeline.column(instant, inner.width);
            let (glyph, color) = match transition {
                DstTransition::SpringForward => ('⇈', self.theme.dst_spring_forward()),
                DstTransition::FallBack => ('⇊', self.theme.dst_fall_back()),
            };
            buf[(inner.x + col, inner.y)]
                .set_char(glyph)
                .set_style(Style::default().fg(color));
        }
    }

    /// Date labels, one per local day, centered at the middle of that
    /// day's working hours.
    fn render_date_labels(&self, inner: Rect, buf: &mut Buffer) {
        let (fg, bg) = self.theme.date_label();
        let style = Style::default().fg(fg).bg(bg);
        let work_middle = self.bands.work_middle_hour();

        let local_start = self.timeline.window_start().with_timezone(&self.zone.tz);
        let local_end = self.timeline.window_end().with_timezone(&self.zone.tz);
        let mut date = local_start.date_naive();

        while date <= local_end.date_naive() {
            if let Some(label_local) = date.and_hms_opt(work_middle, 0, 0) {
                if let Some(label_zoned) = self.zone.tz.from_local_datetime(&label_local).single() {
                    let label_utc = label_zoned.with_timezone(&Utc);
                    let col = self.timeline.column(label_utc, inner.width);
                    if self.timeline.position_ratio(label_utc) > 0.0
                        && self.timeline.position_ratio(label_utc) < 1.0
                    {
                        let label = date.format("%d %b").to_string();
                        render_centered(inner, inner.y, col, &label, style, buf);
                    }
                }
            }
            date = date + Days::new(1);
        }
    }

    /// Local-time readout under the scrub marker
    fn render_readout(&self, inner: Rect, buf: &mut Buffer) {
        let zone_time = self.zone.convert(self.timeline.position());
        let readout = zone_time.format(self.time_format.readout_pattern()).to_string();
        let col = self.timeline.column(self.timeline.position(), inner.width);
        render_centered(inner, inner.y + 1, col, &readout, Style::default(), buf);
    }
}

impl Widget for TimelineWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = area.inner(Margin {
            horizontal: 1,
            vertical: 1,
        });
        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let border_style = if self.selected {
            Style::default().fg(self.theme.selected_border())
        } else {
            Style::default()
        };
        Block::default()
            .borders(Borders::ALL)
            .title(self.zone.title(self.zone_style, self.timeline.position()))
            .style(border_style)
            .render(area, buf);

        self.render_ribbon(inner, buf);
        self.render_markers(inner, buf);
        if self.show_dst {
            self.render_dst_markers(inner, buf);
        }
        if self.show_date {
            self.render_date_labels(inner, buf);
        }
        if inner.height > 1 {
            self.render_readout(inner, buf);
        }
    }
}

/// Write `text` centered around `col` on row `y`, clamped to the inner
/// area's horizontal extent.
fn render_centered(inner: Rect, y: u16, col: u16, text: &str, style: Style, buf: &mut Buffer) {
    let len = text.chars().count() as u16;
    if len == 0 || len > inner.width {
        return;
    }
    let start = col
        .saturating_sub(len / 2)
        .min(inner.width.saturating_sub(len));
    for (i, ch) in text.chars().enumerate() {
        let x = inner.x + start + i as u16;
        if x < inner.x + inner.width {
            buf[(x, y)].set_char(ch).set_style(style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone as _;
    use chrono_tz::Tz;

    fn widget<'a>(
        timeline: &'a Timeline,
        zone: &'a Zone,
        bands: &'a TimeDisplayConfig,
        now: DateTime<Utc>,
    ) -> TimelineWidget<'a> {
        TimelineWidget {
            timeline,
            now,
            zone,
            selected: false,
            time_format: TimeFormat::TwentyFourHour,
            zone_style: ZoneStyle::Short,
            bands,
            theme: ColorTheme::default(),
            show_date: false,
            show_dst: true,
        }
    }

    #[test]
    fn test_now_marker_lands_mid_ribbon() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget(&timeline, &zone, &bands, now).render(area, &mut buf);

        // Inner width 48, ratio 0.5 -> column 24, offset by the border.
        assert_eq!(buf[(25, 1)].symbol(), "│");
    }

    #[test]
    fn test_scrub_marker_separates_from_now() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let mut timeline = Timeline::new(now);
        timeline.scrub_forward(crate::services::timeline::ScrubStep::Day);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget(&timeline, &zone, &bands, now).render(area, &mut buf);

        let row: Vec<&str> = (1..49).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(&"│"), "now marker missing: {row:?}");
        assert!(row.contains(&"┃"), "scrub marker missing: {row:?}");
    }

    #[test]
    fn test_ribbon_uses_band_glyphs() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget(&timeline, &zone, &bands, now).render(area, &mut buf);

        let mut glyphs: Vec<&str> = (1..49).map(|x| buf[(x, 1)].symbol()).collect();
        glyphs.retain(|s| ["░", "▒", "▓"].contains(s));
        // A 48 h window in UTC covers night, awake, and working hours.
        assert!(glyphs.contains(&"░"));
        assert!(glyphs.contains(&"▒"));
        assert!(glyphs.contains(&"▓"));
    }

    #[test]
    fn test_dst_glyph_rendered_over_transition() {
        // US spring forward 2026 lands inside the window.
        let now = Utc.with_ymd_and_hms(2026, 3, 8, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("New York", Tz::America__New_York);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget(&timeline, &zone, &bands, now).render(area, &mut buf);

        let row: Vec<&str> = (1..49).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains(&"⇈"), "spring-forward glyph missing: {row:?}");
    }

    #[test]
    fn test_date_labels_rendered_when_enabled() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut w = widget(&timeline, &zone, &bands, now);
        w.show_date = true;
        w.render(area, &mut buf);

        // The label sits at the middle of the local working hours, so a
        // window centered on June 15 noon UTC must carry "15 Jun".
        let row: String = (1..49).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(row.contains("15 Jun"), "date label missing: {row}");
    }

    #[test]
    fn test_date_labels_absent_by_default() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        widget(&timeline, &zone, &bands, now).render(area, &mut buf);

        let row: String = (1..49).map(|x| buf[(x, 1)].symbol()).collect();
        assert!(!row.contains("Jun"), "unexpected date label: {row}");
    }

    #[test]
    fn test_degenerate_areas_do_not_panic() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        for width in [0u16, 1, 2, 3] {
            let area = Rect::new(0, 0, width, ROW_HEIGHT);
            let mut buf = Buffer::empty(area);
            widget(&timeline, &zone, &bands, now).render(area, &mut buf);
        }
    }

    #[test]
    fn test_readout_reflects_time_format() {
        let now = Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap();
        let timeline = Timeline::new(now);
        let zone = Zone::new("UTC", Tz::UTC);
        let bands = TimeDisplayConfig::default();

        let area = Rect::new(0, 0, 50, ROW_HEIGHT);
        let mut buf = Buffer::empty(area);
        let mut w = widget(&timeline, &zone, &bands, now);
        w.time_format = TimeFormat::TwelveHour;
        w.render(area, &mut buf);

        let readout: String = (1..49).map(|x| buf[(x, 2)].symbol()).collect();
        assert!(readout.contains("PM"), "12h readout missing PM: {readout}");
    }
}
