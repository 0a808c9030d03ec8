//! Operand slots and input-shape checking.
//!
//! Operands are kept as the raw strings the user typed so that partial
//! input like `"5."` or `""` survives between keystrokes. The shape check
//! here is the single gate through which operand text enters the engine.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Matches a numeral that may still be mid-typing: any number of
    /// digits, at most one decimal point, possibly nothing at all.
    /// No sign, no exponent, no grouping separators.
    static ref NUMERAL_IN_PROGRESS: Regex = Regex::new(r"^\d*\.?\d*$").unwrap();
}

/// Check whether raw input is acceptable as an operand.
///
/// The empty string passes, which is what lets the user delete
/// everything they typed. A string that passes is not necessarily a
/// parseable number yet (`"."` and `""` both pass); parseability is
/// checked at computation time, not here.
pub fn is_valid_operand(input: &str) -> bool {
    NUMERAL_IN_PROGRESS.is_match(input)
}

/// Identifies one of the two operand slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandSlot {
    First,
    Second,
}

impl OperandSlot {
    /// Position of this slot in the engine's operand pair
    pub fn index(self) -> usize {
        match self {
            OperandSlot::First => 0,
            OperandSlot::Second => 1,
        }
    }

    /// The other slot, used when moving focus between the two fields
    pub fn other(self) -> Self {
        match self {
            OperandSlot::First => OperandSlot::Second,
            OperandSlot::Second => OperandSlot::First,
        }
    }
}

impl fmt::Display for OperandSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperandSlot::First => write!(f, "Number 1"),
            OperandSlot::Second => write!(f, "Number 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_plain_digits() {
        assert!(is_valid_operand("5"));
        assert!(is_valid_operand("42"));
        assert!(is_valid_operand("0007"));
    }

    #[test]
    fn test_accepts_decimal_forms() {
        assert!(is_valid_operand("3.14"));
        assert!(is_valid_operand("5."));
        assert!(is_valid_operand(".5"));
        assert!(is_valid_operand("."));
    }

    #[test]
    fn test_accepts_empty_input() {
        assert!(is_valid_operand(""));
    }

    #[test]
    fn test_rejects_letters() {
        assert!(!is_valid_operand("abc"));
        assert!(!is_valid_operand("1a"));
        assert!(!is_valid_operand("a1"));
    }

    #[test]
    fn test_rejects_second_decimal_point() {
        assert!(!is_valid_operand("1.2.3"));
        assert!(!is_valid_operand(".."));
    }

    #[test]
    fn test_rejects_signs_and_exponents() {
        assert!(!is_valid_operand("-5"));
        assert!(!is_valid_operand("+5"));
        assert!(!is_valid_operand("1e5"));
    }

    #[test]
    fn test_rejects_whitespace_and_separators() {
        assert!(!is_valid_operand(" 5"));
        assert!(!is_valid_operand("5 "));
        assert!(!is_valid_operand("1,000"));
    }

    #[test]
    fn test_slot_index() {
        assert_eq!(OperandSlot::First.index(), 0);
        assert_eq!(OperandSlot::Second.index(), 1);
    }

    #[test]
    fn test_slot_other_round_trips() {
        assert_eq!(OperandSlot::First.other(), OperandSlot::Second);
        assert_eq!(OperandSlot::Second.other(), OperandSlot::First);
        assert_eq!(OperandSlot::First.other().other(), OperandSlot::First);
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(OperandSlot::First.to_string(), "Number 1");
        assert_eq!(OperandSlot::Second.to_string(), "Number 2");
    }
}
