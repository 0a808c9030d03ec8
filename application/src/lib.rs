//! Application layer for tally
//!
//! This crate contains use cases and port definitions. It depends only
//! on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::export_sink::{ExportSink, ExportSinkError};
pub use use_cases::export_history::{
    DEFAULT_EXPORT_FILE_NAME, ExportHistoryUseCase, ExportReceipt,
};
