//! Keyboard dispatch — maps key events to calculator actions
//!
//! The binding table is flat: there are no input modes. Operator keys
//! fire computations, a handful of letters drive history commands, and
//! every other printable character falls through to field editing where
//! the engine decides whether it may enter an operand.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tally_domain::BinaryOp;

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Run an arithmetic operation on the current operands
    Operate(BinaryOp),
    /// Reset operands, result, error, and history
    ClearAll,
    /// Remove the newest history entry
    Undo,
    /// Save the history log to a text file
    Export,
    /// Switch between dark and light palettes
    ToggleTheme,
    /// Show or hide the help overlay
    ToggleHelp,
    /// Quit application
    Quit,
    /// Move focus to the next operand field
    FocusNext,
    /// Move focus to the previous operand field
    FocusPrev,
    /// Type a character into the focused operand field
    InsertChar(char),
    /// Delete character before the cursor (Backspace)
    DeleteChar,
    /// Delete character under the cursor (Delete)
    DeleteForward,
    /// Move cursor left
    CursorLeft,
    /// Move cursor right
    CursorRight,
    /// Move to start of field
    CursorStart,
    /// Move to end of field
    CursorEnd,
    /// Scroll the history pane up
    ScrollHistoryUp,
    /// Scroll the history pane down
    ScrollHistoryDown,
    /// No action
    None,
}

/// Key event handler - maps key events to actions
pub struct KeyHandler;

impl KeyHandler {
    /// Handle a key event.
    ///
    /// Operator characters match under any modifiers because `*` and `?`
    /// arrive with SHIFT on most layouts. Plain letters used as commands
    /// match only unmodified so shifted variants still reach the editing
    /// path (where the operand gate rejects them).
    pub fn handle(key: KeyEvent) -> Action {
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
            (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,

            // Arithmetic
            (KeyCode::Enter, _) => Action::Operate(BinaryOp::Add),
            (KeyCode::Char('-'), _) => Action::Operate(BinaryOp::Subtract),
            (KeyCode::Char('*'), _) => Action::Operate(BinaryOp::Multiply),
            (KeyCode::Char('/'), _) => Action::Operate(BinaryOp::Divide),

            // History commands
            (KeyCode::Esc, _) => Action::ClearAll,
            (KeyCode::Char('u'), KeyModifiers::NONE) => Action::Undo,
            (KeyCode::Char('s'), KeyModifiers::NONE) => Action::Export,

            // Appearance and help
            (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
            (KeyCode::Char('?'), _) | (KeyCode::F(1), _) => Action::ToggleHelp,

            // Focus
            (KeyCode::Tab, _) | (KeyCode::Down, _) => Action::FocusNext,
            (KeyCode::BackTab, _) | (KeyCode::Up, _) => Action::FocusPrev,

            // History scrolling
            (KeyCode::PageUp, _) => Action::ScrollHistoryUp,
            (KeyCode::PageDown, _) => Action::ScrollHistoryDown,

            // Field editing
            (KeyCode::Backspace, _) => Action::DeleteChar,
            (KeyCode::Delete, _) => Action::DeleteForward,
            (KeyCode::Left, _) => Action::CursorLeft,
            (KeyCode::Right, _) => Action::CursorRight,
            (KeyCode::Home, _) => Action::CursorStart,
            (KeyCode::End, _) => Action::CursorEnd,
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InsertChar(c),

            _ => Action::None,
        }
    }
}
