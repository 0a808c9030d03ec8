//! The four binary arithmetic operations.

use std::fmt;

/// Result value and history record used when dividing by zero.
///
/// Division by zero is reported through the normal result channel with
/// this sentinel text, and the history records the same literal instead
/// of the usual `a / b = r` line.
pub const DIVISION_BY_ZERO: &str = "Error: Division by zero";

/// A two-operand arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// The symbol recorded in history entries
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        }
    }

    /// Apply the operation to already-parsed operands.
    ///
    /// Plain IEEE 754 arithmetic. The divide-by-zero case is handled by
    /// the engine before this is reached.
    pub fn compute(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Subtract => lhs - rhs,
            BinaryOp::Multiply => lhs * rhs,
            BinaryOp::Divide => lhs / rhs,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
