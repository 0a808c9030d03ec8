//! TUI widgets — ratatui components for the main layout
//!
//! Layout:
//! ┌── Header (3) ───────────────────────────────────┐
//! ├── Number 1 (3) ────────┬── Number 2 (3) ────────┤
//! ├── Result (3) ──────────┴────────────────────────┤
//! ├── History (flex) ───────────────────────────────┤
//! └── StatusBar (1) ────────────────────────────────┘

pub mod header;
pub mod history;
pub mod operands;
pub mod result;
pub mod status_bar;

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Compute the main layout regions from a terminal area
pub struct MainLayout {
    pub header: Rect,
    pub first_operand: Rect,
    pub second_operand: Rect,
    pub result: Rect,
    pub history: Rect,
    pub status_bar: Rect,
}

impl MainLayout {
    /// Compute all regions for the given terminal area.
    ///
    /// Fixed-height rows except the history pane, which takes whatever
    /// is left. The operand row is split 50/50 between the two fields.
    pub fn compute(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        let operand_row = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(vertical[1]);

        Self {
            header: vertical[0],
            first_operand: operand_row[0],
            second_operand: operand_row[1],
            result: vertical[2],
            history: vertical[3],
            status_bar: vertical[4],
        }
    }

    /// Centered overlay rectangle for the help dialog
    pub fn centered_overlay(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vert = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(area);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(vert[1])[1]
    }
}
