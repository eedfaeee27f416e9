//! Add-Zone Search Overlay
//!
//! A text input over the city registry. Results update per keystroke;
//! Enter adds the highlighted city to the dashboard.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::app::SearchState;

/// Maximum result rows shown under the input line
pub const MAX_RESULTS: usize = 8;

pub struct SearchOverlay<'a> {
    pub state: &'a SearchState,
}

impl Widget for SearchOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.state.results.len().min(MAX_RESULTS) as u16;
        let height = (rows + 3).min(area.height);
        let width = 44.min(area.width);
        let overlay = super::centered_rect(area, width, height);

        Clear.render(overlay, buf);

        let mut lines = vec![Line::from(vec![
            Span::styled("> ", Style::default().fg(Color::Yellow)),
            Span::raw(self.state.input.as_str()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])];

        for (i, city) in self.state.results.iter().take(MAX_RESULTS).enumerate() {
            let label = format!("{}  {} ({})", city.name, city.country, city.tz_name());
            let line = if i == self.state.selected {
                Line::from(Span::styled(
                    label,
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::raw(label))
            };
            lines.push(line);
        }

        if self.state.results.is_empty() && !self.state.input.is_empty() {
            lines.push(Line::from(Span::styled(
                "no matches",
                Style::default().fg(Color::DarkGray),
            )));
        }

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Add zone "))
            .render(overlay, buf);
    }
}
