//! Calculator subdomain.
//!
//! - [`engine::Calculator`] — the stateful engine owning operands,
//!   result, error, and history
//! - [`operand`] — operand slots and the input-shape gate
//! - [`operation::BinaryOp`] — the four arithmetic operations

pub mod engine;
pub mod operand;
pub mod operation;
