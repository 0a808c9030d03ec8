//! Export history use case
//!
//! Takes the engine's rendered history and hands it to an [`ExportSink`].

use crate::ports::export_sink::{ExportSink, ExportSinkError};
use tally_domain::Calculator;
use tracing::{debug, info};

/// Default name for the exported history artifact
pub const DEFAULT_EXPORT_FILE_NAME: &str = "calculator-history.txt";

/// What an export produced, for display to the user
#[derive(Debug, Clone)]
pub struct ExportReceipt {
    /// Where the sink placed the artifact
    pub path: std::path::PathBuf,
    /// Number of history entries in the payload
    pub entry_count: usize,
    /// Payload size in bytes
    pub byte_count: usize,
}

/// Use case for exporting the calculation history
pub struct ExportHistoryUseCase<S: ExportSink> {
    sink: S,
    file_name: String,
}

impl<S: ExportSink> ExportHistoryUseCase<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            file_name: DEFAULT_EXPORT_FILE_NAME.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Render the calculator's history and save it through the sink.
    ///
    /// An empty history exports an empty artifact; that is not an error.
    pub fn execute(&self, calculator: &Calculator) -> Result<ExportReceipt, ExportSinkError> {
        let payload = calculator.export_history();
        let entry_count = calculator.history().len();
        debug!(
            "Exporting {} history entries ({} bytes) as {}",
            entry_count,
            payload.len(),
            self.file_name
        );

        let path = self.sink.save(&self.file_name, &payload)?;
        info!("Exported history to {}", path.display());

        Ok(ExportReceipt {
            path,
            entry_count,
            byte_count: payload.len(),
        })
    }
}
