//! History subdomain.
//!
//! - [`log::HistoryLog`] — append-only log of completed operations
//! - [`log::HistoryEntry`] — one immutable record

pub mod log;
