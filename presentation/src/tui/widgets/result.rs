//! Result widget — shows the latest result or the validation error
//!
//! A validation error takes priority over the stored result. The
//! division-by-zero sentinel arrives through the result channel but is
//! styled as an error all the same.

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tally_domain::DIVISION_BY_ZERO;

pub struct ResultWidget<'a> {
    state: &'a AppState,
}

impl<'a> ResultWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for ResultWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let engine = &self.state.engine;

        let line = if let Some(err) = engine.error() {
            Line::from(Span::styled(
                err.to_string(),
                Style::default()
                    .fg(theme.error())
                    .add_modifier(Modifier::BOLD),
            ))
        } else if engine.result().is_empty() {
            Line::from(Span::styled(
                "press Enter to add, - * / for the rest",
                Style::default().fg(theme.muted()),
            ))
        } else if engine.result() == DIVISION_BY_ZERO {
            Line::from(Span::styled(
                engine.result().to_string(),
                Style::default()
                    .fg(theme.error())
                    .add_modifier(Modifier::BOLD),
            ))
        } else {
            Line::from(vec![
                Span::styled("= ", Style::default().fg(theme.muted())),
                Span::styled(
                    engine.result().to_string(),
                    Style::default()
                        .fg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Result ")
            .style(Style::default().fg(theme.text()).bg(theme.background()));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
