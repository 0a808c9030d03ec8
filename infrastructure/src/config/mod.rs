//! Configuration file loading for tally
//!
//! This module handles file I/O and merging of configuration from
//! multiple sources. The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tally.toml` or `./.tally.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/tally/config.toml`
//! 4. Fallback: `~/.config/tally/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{ConfigIssue, FileConfig, FileExportConfig, FileTuiConfig, Severity};
pub use loader::ConfigLoader;
