//! CLI command definitions

use crate::tui::Theme;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Color theme selection from the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeArg {
    /// Dark palette
    Dark,
    /// Light palette
    Light,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Light => Theme::Light,
        }
    }
}

/// CLI arguments for tally
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about = "Keyboard-driven two-number calculator with a saved history")]
#[command(long_about = r#"
tally is a full-screen terminal calculator for two operands.

Type into the two number fields, press Enter to add (or - * / for the
other operations), and every computation lands in an append-only
history you can undo entry by entry or save to a text file with `s`.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./tally.toml        Project-level config (also .tally.toml)
3. ~/.config/tally/config.toml   Global config

Example:
  tally
  tally --theme light
  tally --export-dir ~/tapes -vv
"#)]
pub struct Cli {
    /// Color theme for the interface
    #[arg(long, value_enum, value_name = "THEME")]
    pub theme: Option<ThemeArg>,

    /// Directory where exported history files are written
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
