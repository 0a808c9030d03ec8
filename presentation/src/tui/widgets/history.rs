//! History widget — the append-only log of past computations
//!
//! Entries render oldest first with the newest at the bottom, pinned
//! there while `history_scroll` is 0. Each entry is one line, so the
//! scroll math works on entry counts directly.

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HistoryWidget<'a> {
    state: &'a AppState,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for HistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let history = self.state.engine.history();

        let lines: Vec<Line> = if history.is_empty() {
            vec![Line::from(Span::styled(
                "No history",
                Style::default().fg(theme.muted()),
            ))]
        } else {
            history
                .entries()
                .iter()
                .map(|entry| {
                    Line::from(Span::styled(
                        entry.as_str().to_string(),
                        Style::default().fg(theme.text()),
                    ))
                })
                .collect()
        };

        let visible_height = area.height.saturating_sub(2); // borders
        let total_lines = lines.len() as u16;

        // scroll_offset=0 means "show bottom"
        let scroll = if total_lines > visible_height {
            let max_scroll = total_lines - visible_height;
            let offset = (self.state.history_scroll as u16).min(max_scroll);
            max_scroll - offset
        } else {
            0
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" History ")
            .style(Style::default().fg(theme.text()).bg(theme.background()));

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll, 0))
            .render(area, buf);
    }
}
