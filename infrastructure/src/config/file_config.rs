//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly; every field has a default so partial
//! files merge cleanly.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tally_application::DEFAULT_EXPORT_FILE_NAME;

/// Export settings from TOML (`[export]` section)
///
/// # Example
///
/// ```toml
/// [export]
/// file_name = "tape.txt"
/// directory = "/home/me/calc-exports"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExportConfig {
    /// File name for the exported history artifact (default:
    /// "calculator-history.txt")
    pub file_name: String,
    /// Directory the artifact is written into; the process working
    /// directory when unset
    pub directory: Option<PathBuf>,
}

impl Default for FileExportConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
            directory: None,
        }
    }
}

/// TUI settings from TOML (`[tui]` section)
///
/// # Example
///
/// ```toml
/// [tui]
/// theme = "light"
/// tick_rate_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Color theme: "dark" or "light" (default: "dark")
    pub theme: String,
    /// Event poll timeout in milliseconds; bounds how long an expired
    /// flash message can linger (default: 200)
    pub tick_rate_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            tick_rate_ms: 200,
        }
    }
}

/// How serious a configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One problem found while validating a [`FileConfig`]
///
/// Issues are reported, not fatal; the loader falls back to defaults
/// for the offending field.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: String,
    pub message: String,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Export settings
    pub export: FileExportConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
}

impl FileConfig {
    /// Validate the configuration, returning all detected issues.
    ///
    /// Checks enum-like string fields and values the application would
    /// otherwise have to silently correct at startup.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !matches!(self.tui.theme.to_lowercase().as_str(), "dark" | "light") {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "tui.theme".to_string(),
                message: format!(
                    "unknown value '{}', falling back to 'dark'",
                    self.tui.theme
                ),
            });
        }

        if self.tui.tick_rate_ms == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "tui.tick_rate_ms".to_string(),
                message: "a tick rate of 0 would spin the event loop, falling back to 200"
                    .to_string(),
            });
        }

        if self.export.file_name.trim().is_empty() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                field: "export.file_name".to_string(),
                message: format!(
                    "empty file name, falling back to '{}'",
                    DEFAULT_EXPORT_FILE_NAME
                ),
            });
        }

        issues
    }
}
