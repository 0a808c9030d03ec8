//! Terminal user interface built on ratatui
//!
//! A fixed five-region screen: header, the two operand fields, the
//! result row, the scrollable history pane, and a status bar. Keys are
//! routed through [`keymap::KeyHandler`] and applied to
//! [`state::AppState`] by the [`app::App`] event loop.

mod app;
mod keymap;
mod state;
mod theme;
mod widgets;

pub use app::App;
pub use keymap::{Action, KeyHandler};
pub use state::{AppState, TuiOptions};
pub use theme::Theme;
