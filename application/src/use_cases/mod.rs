//! Application use cases

pub mod export_history;
