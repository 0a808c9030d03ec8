//! Export adapters implementing the application's [`ExportSink`] port.
//!
//! [`ExportSink`]: tally_application::ExportSink

mod text_file;

pub use text_file::TextFileExportSink;
