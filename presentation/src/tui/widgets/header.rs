//! Header widget — title bar with history count and active theme

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    state: &'a AppState,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let entry_count = self.state.engine.history().len();

        let line = Line::from(vec![
            Span::styled("◉ ", Style::default().fg(Color::Green)),
            Span::styled(
                "two-number calculator",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("{} recorded", entry_count),
                Style::default().fg(theme.text()),
            ),
            Span::raw(" | "),
            Span::styled(format!("theme: {}", theme), Style::default().fg(theme.muted())),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" tally ")
            .style(Style::default().fg(theme.text()).bg(theme.background()));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
