//! Help Overlay
//!
//! A centered key-binding reference, toggled with `?`.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("h / l, ← / →", "scrub by one hour"),
    ("H / L", "scrub by 15 minutes"),
    ("J / K", "scrub by one day"),
    ("n", "snap back to now"),
    ("j / k, ↓ / ↑", "select zone"),
    ("a", "add a zone (search)"),
    ("x", "remove selected zone"),
    ("t", "cycle color theme"),
    ("f", "toggle 12/24 hour clock"),
    ("m", "toggle short/full titles"),
    ("d", "toggle date labels"),
    ("D", "toggle DST markers"),
    ("?", "toggle this help"),
    ("q / Esc", "quit"),
];

pub struct HelpOverlay;

impl Widget for HelpOverlay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = (BINDINGS.len() as u16 + 2).min(area.height);
        let width = 46.min(area.width);
        let overlay = super::centered_rect(area, width, height);

        Clear.render(overlay, buf);

        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(format!("{key:>14}"), key_style),
                    Span::raw("  "),
                    Span::raw(*action),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .block(Block::default().borders(Borders::ALL).title(" Keys "))
            .render(overlay, buf);
    }
}
