//! Infrastructure layer for tally
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod export;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileConfig, FileExportConfig, FileTuiConfig, Severity};
pub use export::TextFileExportSink;
