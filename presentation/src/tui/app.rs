//! TUI application — terminal lifecycle and the main event loop
//!
//! The loop is synchronous: draw a frame, poll for a key event until
//! the tick deadline, apply it, repeat. Every keystroke becomes an
//! [`Action`] through the keymap and is applied to [`AppState`]; the
//! help overlay intercepts keys before the keymap sees them.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tally_application::{ExportHistoryUseCase, ExportSink};
use tally_domain::OperandSlot;

use super::keymap::{Action, KeyHandler};
use super::state::{AppState, TuiOptions};
use super::widgets::{
    MainLayout, header::HeaderWidget, history::HistoryWidget, operands::OperandFieldWidget,
    result::ResultWidget, status_bar::StatusBarWidget,
};

/// How long a flash message stays on the status bar
const FLASH_MAX_AGE: Duration = Duration::from_secs(5);

/// Scoped owner of raw mode and the alternate screen.
///
/// Acquired when the TUI becomes active, released on drop, so the
/// terminal is restored on every exit path out of the event loop. A
/// panic hook covers unwinding, where drop order is not enough to get
/// the message printed on a sane screen.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;

        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(info);
        }));

        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Main TUI application
pub struct App<S: ExportSink> {
    exporter: ExportHistoryUseCase<S>,
    options: TuiOptions,
}

impl<S: ExportSink> App<S> {
    pub fn new(exporter: ExportHistoryUseCase<S>, options: TuiOptions) -> Self {
        Self { exporter, options }
    }

    /// Run the TUI main loop
    pub fn run(&mut self) -> io::Result<()> {
        let _guard = TerminalGuard::acquire()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let mut state = AppState::new(&self.options);
        let tick_rate = self.options.tick_rate;

        loop {
            terminal.draw(|frame| self.render(frame, &state))?;

            if state.should_quit {
                break;
            }

            if event::poll(tick_rate)? {
                let term_event = event::read()?;
                self.handle_terminal_event(&mut state, term_event);
            }
            state.expire_flash(FLASH_MAX_AGE);
        }

        terminal.show_cursor()?;
        Ok(())
    }

    /// Render all widgets
    fn render(&self, frame: &mut ratatui::Frame, state: &AppState) {
        let layout = MainLayout::compute(frame.area());

        frame.render_widget(HeaderWidget::new(state), layout.header);
        frame.render_widget(
            OperandFieldWidget::new(state, OperandSlot::First),
            layout.first_operand,
        );
        frame.render_widget(
            OperandFieldWidget::new(state, OperandSlot::Second),
            layout.second_operand,
        );
        frame.render_widget(ResultWidget::new(state), layout.result);
        frame.render_widget(HistoryWidget::new(state), layout.history);
        frame.render_widget(StatusBarWidget::new(state), layout.status_bar);

        // Help overlay
        if state.show_help {
            let help_area = MainLayout::centered_overlay(70, 70, frame.area());
            frame.render_widget(ratatui::widgets::Clear, help_area);
            self.render_help(frame, help_area, state);
        }
    }

    fn render_help(
        &self,
        frame: &mut ratatui::Frame,
        area: ratatui::layout::Rect,
        state: &AppState,
    ) {
        use ratatui::style::{Modifier, Style};
        use ratatui::text::{Line, Span};
        use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

        let theme = state.theme;

        let lines = vec![
            Line::from(Span::styled(
                "Keyboard Shortcuts",
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Arithmetic:"),
            Line::from("  Enter     Add the two numbers"),
            Line::from("  -         Subtract"),
            Line::from("  *         Multiply"),
            Line::from("  /         Divide"),
            Line::from(""),
            Line::from("Editing:"),
            Line::from("  0-9 .     Type into the focused field"),
            Line::from("  Tab/Down  Focus next field"),
            Line::from("  Shift+Tab/Up  Focus previous field"),
            Line::from("  Backspace/Delete  Remove a character"),
            Line::from("  Left/Right/Home/End  Move the cursor"),
            Line::from(""),
            Line::from("History:"),
            Line::from("  u         Undo the last entry"),
            Line::from("  s         Save history to a text file"),
            Line::from("  PgUp/PgDn Scroll the history pane"),
            Line::from("  Esc       Clear everything"),
            Line::from(""),
            Line::from("Other:"),
            Line::from("  t         Toggle dark/light theme"),
            Line::from("  ?/F1      Toggle this help"),
            Line::from("  q/Ctrl+C  Quit"),
            Line::from(""),
            Line::from(Span::styled(
                "Press ? or Esc to close",
                Style::default().fg(theme.muted()),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Help ")
            .style(Style::default().fg(theme.text()).bg(theme.background()));

        frame.render_widget(
            Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
            area,
        );
    }

    /// Handle a terminal event (keyboard, resize)
    fn handle_terminal_event(&self, state: &mut AppState, term_event: event::Event) {
        match term_event {
            event::Event::Key(key) => {
                // Key repeat/release events would double-fire on Windows
                if key.kind != KeyEventKind::Press {
                    return;
                }

                // If help is showing, a few keys close it and the rest are swallowed
                if state.show_help {
                    match key.code {
                        KeyCode::Esc
                        | KeyCode::Char('?')
                        | KeyCode::Char('q')
                        | KeyCode::F(1) => {
                            state.show_help = false;
                        }
                        _ => {}
                    }
                    return;
                }

                let action = KeyHandler::handle(key);
                self.handle_action(state, action);
            }
            event::Event::Resize(_, _) => {
                // Terminal auto-resizes on next draw
            }
            _ => {}
        }
    }

    /// Handle a semantic key action
    fn handle_action(&self, state: &mut AppState, action: Action) {
        match action {
            Action::None => {}

            // Engine commands
            Action::Operate(op) => state.engine.apply(op),
            Action::ClearAll => state.clear_all(),
            Action::Undo => state.undo_last(),
            Action::Export => self.export_history(state),

            // Appearance
            Action::ToggleTheme => state.toggle_theme(),
            Action::ToggleHelp => state.toggle_help(),
            Action::Quit => state.should_quit = true,

            // Focus
            Action::FocusNext => state.focus_next(),
            Action::FocusPrev => state.focus_prev(),

            // Field editing
            Action::InsertChar(c) => state.insert_char(c),
            Action::DeleteChar => state.delete_char(),
            Action::DeleteForward => state.delete_forward(),
            Action::CursorLeft => state.cursor_left(),
            Action::CursorRight => state.cursor_right(),
            Action::CursorStart => state.cursor_home(),
            Action::CursorEnd => state.cursor_end(),

            // History pane
            Action::ScrollHistoryUp => state.scroll_history_up(),
            Action::ScrollHistoryDown => state.scroll_history_down(),
        }
    }

    /// Save the history log through the export use case
    fn export_history(&self, state: &mut AppState) {
        match self.exporter.execute(&state.engine) {
            Ok(receipt) => {
                state.set_flash(format!(
                    "Saved {} entries to {}",
                    receipt.entry_count,
                    receipt.path.display()
                ));
            }
            Err(err) => {
                tracing::warn!("History export failed: {err}");
                state.set_flash(format!("Export failed: {err}"));
            }
        }
    }
}
