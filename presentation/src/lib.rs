//! Presentation layer for tally
//!
//! This crate contains the CLI argument definitions and the ratatui
//! terminal interface.

pub mod cli;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, ThemeArg};
pub use tui::{App, AppState, Theme, TuiOptions};
