//! Operand field widget — one bordered input box per operand
//!
//! The focused field draws a block cursor the way a text input would;
//! the unfocused field is dimmed. Field text always comes straight from
//! the engine, so what is on screen is exactly what will be computed.

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use tally_domain::OperandSlot;

pub struct OperandFieldWidget<'a> {
    state: &'a AppState,
    slot: OperandSlot,
}

impl<'a> OperandFieldWidget<'a> {
    pub fn new(state: &'a AppState, slot: OperandSlot) -> Self {
        Self { state, slot }
    }
}

impl<'a> Widget for OperandFieldWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;
        let focused = self.state.focus == self.slot;
        let text = self.state.engine.operand(self.slot);

        let border_style = if focused {
            Style::default().fg(theme.accent())
        } else {
            Style::default().fg(theme.muted())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.slot))
            .style(border_style.bg(theme.background()));

        let line = if focused {
            build_focused_line(text, self.state.cursor(), theme.text(), theme.accent())
        } else {
            Line::from(Span::styled(
                text.to_string(),
                Style::default().fg(theme.muted()),
            ))
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Build the field line with a block cursor at the given byte position
fn build_focused_line(text: &str, cursor: usize, fg: Color, accent: Color) -> Line<'static> {
    let cursor_style = Style::default().fg(Color::Black).bg(accent);
    let text_style = Style::default().fg(fg);

    let cursor = cursor.min(text.len());
    let before = &text[..cursor];
    let after = &text[cursor..];

    let mut spans = vec![Span::styled(before.to_string(), text_style)];

    if after.is_empty() {
        // Cursor past the last character — show it on a blank cell
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch = after.chars().next().unwrap();
        let ch_len = ch.len_utf8();
        spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
        if ch_len < after.len() {
            spans.push(Span::styled(after[ch_len..].to_string(), text_style));
        }
    }

    Line::from(spans)
}
