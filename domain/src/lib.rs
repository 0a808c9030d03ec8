//! Domain layer for tally
//!
//! This crate contains the calculator's core logic and entities. It has
//! no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Engine
//!
//! [`Calculator`] owns all calculator state: two raw operand strings, the
//! last result, the validation error, and the history log. Operations
//! validate first and run to completion; nothing here performs I/O.
//!
//! ## History
//!
//! [`HistoryLog`] is append-only. Entries are immutable text records;
//! undo removes the newest record without recomputing anything.

pub mod calculator;
pub mod core;
pub mod history;

// Re-export commonly used types
pub use calculator::{
    engine::Calculator,
    operand::{OperandSlot, is_valid_operand},
    operation::{BinaryOp, DIVISION_BY_ZERO},
};
pub use core::error::CalcError;
pub use history::log::{HistoryEntry, HistoryLog};
