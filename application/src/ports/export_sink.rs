//! Port for delivering exported history to the outside world.
//!
//! The engine renders history as plain UTF-8 text; this port abstracts
//! where that payload ends up. The shipped adapter writes a file, but
//! nothing in the application layer assumes a filesystem.

use std::path::PathBuf;
use thiserror::Error;

/// Errors an export sink can report
#[derive(Error, Debug)]
pub enum ExportSinkError {
    #[error("Failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write export file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Port for saving an export payload under a given file name.
///
/// Implementations decide the destination directory and return the full
/// path the payload landed at. An empty payload is a valid export and
/// must still produce the artifact.
pub trait ExportSink: Send + Sync {
    fn save(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf, ExportSinkError>;
}
