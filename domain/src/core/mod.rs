//! Core domain concepts shared across all subdomains.
//!
//! - [`error::CalcError`] — domain-level errors

pub mod error;
