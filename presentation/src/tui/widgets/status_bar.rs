//! Status bar widget — focus indicator + key hints + flash messages

use crate::tui::state::AppState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

const KEY_HINTS: &str = "Enter:add  -:sub  *:mul  /:div  Esc:clear  u:undo  s:save  ?:help  q:quit";

pub struct StatusBarWidget<'a> {
    state: &'a AppState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.state.theme;

        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        // Left: focused field indicator
        let focus_text = format!(" {} ", self.state.focus);
        let focus_style = Style::default()
            .fg(Color::Black)
            .bg(theme.accent())
            .add_modifier(Modifier::BOLD);
        let focus_span = Span::styled(focus_text.clone(), focus_style);

        // Flash message or key hints on the right
        let right_text = if let Some((ref flash, _)) = self.state.flash_message {
            flash.clone()
        } else {
            KEY_HINTS.into()
        };

        let right_span = Span::styled(
            right_text.clone(),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );

        let focus_line = Line::from(vec![focus_span]);
        let focus_width = focus_text.len() as u16;

        buf.set_line(area.x, area.y, &focus_line, focus_width);

        // Right-aligned hints
        let right_width = right_text.len() as u16;
        let right_x = area.right().saturating_sub(right_width + 1);
        if right_x > area.x + focus_width {
            let right_line = Line::from(vec![right_span]);
            buf.set_line(right_x, area.y, &right_line, right_width + 1);
        }
    }
}
