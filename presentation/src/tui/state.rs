//! TUI application state
//!
//! `AppState` owns the calculator engine plus everything the widgets
//! need to draw a frame: field focus, per-field cursors, history
//! scroll, theme, the help overlay flag, and transient flash messages.
//!
//! All typing funnels through [`AppState::insert_char`], which builds
//! the candidate field text and lets the engine accept or reject it.
//! A rejected keystroke changes nothing, not even the cursor.

use std::time::{Duration, Instant};

use tally_domain::{Calculator, OperandSlot};

use super::theme::Theme;

/// Startup options resolved from config files and CLI flags
#[derive(Debug, Clone)]
pub struct TuiOptions {
    pub theme: Theme,
    pub tick_rate: Duration,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            tick_rate: Duration::from_millis(200),
        }
    }
}

/// Complete TUI state
#[derive(Debug)]
pub struct AppState {
    /// Calculator engine: operands, result, error, history
    pub engine: Calculator,
    /// Operand field that receives typed characters
    pub focus: OperandSlot,
    /// Byte cursor position for each operand field
    pub cursors: [usize; 2],
    /// History pane scroll offset (0 = pinned to the newest entry)
    pub history_scroll: usize,
    /// Whether the help overlay is visible
    pub show_help: bool,
    /// Transient status message and when it was set
    pub flash_message: Option<(String, Instant)>,
    /// Active color palette
    pub theme: Theme,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            engine: Calculator::new(),
            focus: OperandSlot::First,
            cursors: [0, 0],
            history_scroll: 0,
            show_help: false,
            flash_message: None,
            theme: Theme::Dark,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new(options: &TuiOptions) -> Self {
        Self {
            theme: options.theme,
            ..Self::default()
        }
    }

    /// Cursor position in the focused field
    pub fn cursor(&self) -> usize {
        self.cursors[self.focus.index()]
    }

    /// Text of the focused field
    pub fn focused_text(&self) -> &str {
        self.engine.operand(self.focus)
    }

    // -- Field editing --

    /// Type a character into the focused field.
    ///
    /// The candidate text is offered to the engine, which rejects
    /// anything that is not a numeral in progress. On rejection the
    /// field and cursor are left untouched.
    pub fn insert_char(&mut self, c: char) {
        let cursor = self.cursor();
        let text = self.engine.operand(self.focus);
        let mut candidate = String::with_capacity(text.len() + c.len_utf8());
        candidate.push_str(&text[..cursor]);
        candidate.push(c);
        candidate.push_str(&text[cursor..]);

        if self.engine.set_operand(self.focus, &candidate) {
            self.cursors[self.focus.index()] = cursor + c.len_utf8();
        }
    }

    /// Delete the character before the cursor (Backspace)
    pub fn delete_char(&mut self) {
        let cursor = self.cursor();
        if cursor == 0 {
            return;
        }
        let text = self.engine.operand(self.focus);
        let prev_char_len = text[..cursor]
            .chars()
            .next_back()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        let mut candidate = String::with_capacity(text.len());
        candidate.push_str(&text[..cursor - prev_char_len]);
        candidate.push_str(&text[cursor..]);

        if self.engine.set_operand(self.focus, &candidate) {
            self.cursors[self.focus.index()] = cursor - prev_char_len;
        }
    }

    /// Delete the character under the cursor (Delete)
    pub fn delete_forward(&mut self) {
        let cursor = self.cursor();
        let text = self.engine.operand(self.focus);
        if cursor >= text.len() {
            return;
        }
        let next_char_len = text[cursor..]
            .chars()
            .next()
            .map(|c| c.len_utf8())
            .unwrap_or(0);
        let mut candidate = String::with_capacity(text.len());
        candidate.push_str(&text[..cursor]);
        candidate.push_str(&text[cursor + next_char_len..]);

        self.engine.set_operand(self.focus, &candidate);
    }

    pub fn cursor_left(&mut self) {
        let cursor = self.cursor();
        if cursor > 0 {
            let text = self.engine.operand(self.focus);
            let prev_char_len = text[..cursor]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursors[self.focus.index()] = cursor - prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        let cursor = self.cursor();
        let text = self.engine.operand(self.focus);
        if cursor < text.len() {
            let next_char_len = text[cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursors[self.focus.index()] = cursor + next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursors[self.focus.index()] = 0;
    }

    pub fn cursor_end(&mut self) {
        let len = self.engine.operand(self.focus).len();
        self.cursors[self.focus.index()] = len;
    }

    // -- Focus --

    /// Move focus to the next field, placing the cursor at its end
    pub fn focus_next(&mut self) {
        self.focus = self.focus.other();
        self.cursor_end();
    }

    /// Move focus to the previous field, placing the cursor at its end
    pub fn focus_prev(&mut self) {
        // Two fields, so previous and next coincide
        self.focus_next();
    }

    // -- Engine commands --

    /// Reset operands, result, error, and history
    pub fn clear_all(&mut self) {
        self.engine.clear();
        self.cursors = [0, 0];
        self.history_scroll = 0;
    }

    /// Remove the newest history entry
    pub fn undo_last(&mut self) {
        self.engine.undo();
    }

    // -- History scrolling --

    pub fn scroll_history_up(&mut self) {
        self.history_scroll = self.history_scroll.saturating_add(1);
    }

    pub fn scroll_history_down(&mut self) {
        self.history_scroll = self.history_scroll.saturating_sub(1);
    }

    // -- Appearance --

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // -- Flash messages --

    pub fn set_flash(&mut self, msg: impl Into<String>) {
        self.flash_message = Some((msg.into(), Instant::now()));
    }

    /// Clear flash if older than the given duration
    pub fn expire_flash(&mut self, max_age: Duration) {
        if let Some((_, created)) = &self.flash_message
            && created.elapsed() > max_age
        {
            self.flash_message = None;
        }
    }
}
