//! Render Layer
//!
//! Composes the full frame: header with the scrubbed instant, one
//! timeline row per zone, a footer with key hints, and the overlays.

pub mod help;
pub mod search;
pub mod theme;
pub mod timeline;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Overlay};
use crate::ui::timeline::{TimelineWidget, ROW_HEIGHT};

const FOOTER_HINTS: &str =
    "h/l scrub  j/k select  a add  x remove  t theme  f format  d date  n now  ? help  q quit";

/// Draw one full frame of the dashboard
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(ROW_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_rows(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    match &app.overlay {
        Overlay::Help => frame.render_widget(help::HelpOverlay, frame.area()),
        Overlay::Search(state) => {
            frame.render_widget(search::SearchOverlay { state }, frame.area())
        }
        Overlay::None => {}
    }
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let position = app.timeline.position();
    let mut spans = vec![
        Span::styled(
            "alltz ",
            Style::default()
                .fg(app.config.theme.selected_border())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(position.format("%H:%M UTC %a %d %b %Y").to_string()),
    ];

    if app.timeline.is_scrubbed(app.now) {
        let drift = app.timeline.position() - app.now;
        let minutes = drift.num_minutes();
        let label = if minutes.abs() >= 60 * 24 {
            format!(" [{:+}d]", minutes / (60 * 24))
        } else if minutes.abs() >= 60 {
            format!(" [{:+}h]", minutes / 60)
        } else {
            format!(" [{minutes:+}m]")
        };
        spans.push(Span::styled(
            label,
            Style::default().fg(app.config.theme.scrub_marker()),
        ));
    }

    spans.push(Span::styled(
        format!("  theme: {}", app.config.theme),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_rows(frame: &mut Frame, app: &App, area: Rect) {
    if app.zones.is_empty() || area.height < ROW_HEIGHT {
        return;
    }

    let visible = (area.height / ROW_HEIGHT).max(1) as usize;
    let offset = if app.selected >= visible {
        app.selected + 1 - visible
    } else {
        0
    };

    for (slot, (index, zone)) in app
        .zones
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .enumerate()
    {
        let row = Rect::new(
            area.x,
            area.y + (slot as u16) * ROW_HEIGHT,
            area.width,
            ROW_HEIGHT,
        );
        let widget = TimelineWidget {
            timeline: &app.timeline,
            now: app.now,
            zone,
            selected: index == app.selected,
            time_format: app.config.time_format,
            zone_style: app.config.zone_style,
            bands: &app.config.time_display,
            theme: app.config.theme,
            show_date: app.config.show_date,
            show_dst: app.config.show_dst,
        };
        frame.render_widget(widget, row);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match &app.status {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )),
        None => Line::from(Span::styled(
            FOOTER_HINTS,
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// A rect of the given size centered inside `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside_area() {
        let area = Rect::new(0, 0, 80, 24);
        let overlay = centered_rect(area, 40, 10);
        assert_eq!(overlay, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_small_areas() {
        let area = Rect::new(0, 0, 10, 4);
        let overlay = centered_rect(area, 40, 10);
        assert!(overlay.width <= area.width);
        assert!(overlay.height <= area.height);
    }
}
