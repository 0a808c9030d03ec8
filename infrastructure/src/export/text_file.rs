//! Plain-text file writer for exported history.
//!
//! The payload arrives fully rendered from the engine; this adapter
//! only decides where it lands on disk and reports failures.

use std::fs;
use std::path::{Path, PathBuf};
use tally_application::ports::export_sink::{ExportSink, ExportSinkError};
use tracing::{debug, warn};

/// Export sink that writes the payload to a file on disk.
///
/// The target directory is created on demand. Writing over an existing
/// artifact replaces it; every export reflects the full history at the
/// moment of the save.
pub struct TextFileExportSink {
    directory: PathBuf,
}

impl TextFileExportSink {
    /// Sink writing into the process working directory.
    pub fn new() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }

    /// Sink writing into the given directory.
    pub fn with_directory(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl Default for TextFileExportSink {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSink for TextFileExportSink {
    fn save(&self, file_name: &str, payload: &[u8]) -> Result<PathBuf, ExportSinkError> {
        if let Err(e) = fs::create_dir_all(&self.directory) {
            warn!(
                "Could not create export directory {}: {}",
                self.directory.display(),
                e
            );
            return Err(ExportSinkError::CreateDir {
                path: self.directory.clone(),
                source: e,
            });
        }

        let path = self.directory.join(file_name);
        match fs::write(&path, payload) {
            Ok(()) => {
                debug!("Wrote {} bytes to {}", payload.len(), path.display());
                Ok(path)
            }
            Err(e) => {
                warn!("Could not write export file {}: {}", path.display(), e);
                Err(ExportSinkError::Write { path, source: e })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_writes_payload() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TextFileExportSink::with_directory(dir.path());

        let path = sink.save("calculator-history.txt", b"1 + 2 = 3\n4 * 5 = 20").unwrap();

        assert_eq!(path, dir.path().join("calculator-history.txt"));
        let content = fs::read(&path).unwrap();
        assert_eq!(content, b"1 + 2 = 3\n4 * 5 = 20".to_vec());
    }

    #[test]
    fn test_save_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("exports").join("calc");
        let sink = TextFileExportSink::with_directory(&nested);

        let path = sink.save("history.txt", b"0 / 5 = 0").unwrap();

        assert!(nested.is_dir());
        assert_eq!(fs::read(&path).unwrap(), b"0 / 5 = 0".to_vec());
    }

    #[test]
    fn test_save_empty_payload_produces_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TextFileExportSink::with_directory(dir.path());

        let path = sink.save("history.txt", b"").unwrap();

        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_save_replaces_previous_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let sink = TextFileExportSink::with_directory(dir.path());

        sink.save("history.txt", b"1 + 1 = 2\n2 + 2 = 4").unwrap();
        let path = sink.save("history.txt", b"3 + 3 = 6").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"3 + 3 = 6".to_vec());
    }

    #[test]
    fn test_save_reports_write_failure() {
        let dir = tempfile::tempdir().unwrap();
        // A directory occupying the target file name forces the write to fail
        let sink = TextFileExportSink::with_directory(dir.path());
        fs::create_dir(dir.path().join("history.txt")).unwrap();

        let err = sink.save("history.txt", b"payload").unwrap_err();
        assert!(matches!(err, ExportSinkError::Write { .. }));
    }
}
