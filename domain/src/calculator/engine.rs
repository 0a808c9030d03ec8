//! The calculator engine.
//!
//! [`Calculator`] owns all calculator state: the two operand strings,
//! the last result, the validation error, and the history log. Every
//! operation runs to completion synchronously; state is never observable
//! mid-update.

use crate::calculator::operand::{OperandSlot, is_valid_operand};
use crate::calculator::operation::{BinaryOp, DIVISION_BY_ZERO};
use crate::core::error::CalcError;
use crate::history::log::{HistoryEntry, HistoryLog};

/// Stateful calculator (Aggregate root)
///
/// Operands are stored as the raw text the user typed. The result and
/// the error are mutually exclusive outcomes of the most recent
/// operation: a successful computation clears the error, a failed
/// validation leaves the result untouched.
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    operands: [String; 2],
    result: String,
    error: Option<CalcError>,
    history: HistoryLog,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn operand(&self, slot: OperandSlot) -> &str {
        &self.operands[slot.index()]
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn error(&self) -> Option<&CalcError> {
        self.error.as_ref()
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Replace an operand with raw input.
    ///
    /// The input is accepted only if it still looks like a numeral in
    /// progress (see [`is_valid_operand`]). Rejected input leaves the
    /// slot, and everything else, exactly as it was; the caller gets
    /// `false` and the user gets no error message.
    pub fn set_operand(&mut self, slot: OperandSlot, raw: &str) -> bool {
        if !is_valid_operand(raw) {
            return false;
        }
        self.operands[slot.index()] = raw.to_string();
        true
    }

    /// Check that both operands parse as numbers.
    ///
    /// On failure the validation error is set and `false` returned; on
    /// success any prior error is cleared. Result and history are never
    /// touched here.
    pub fn validate(&mut self) -> bool {
        self.checked_operands().is_some()
    }

    /// Run one arithmetic operation against the current operands.
    ///
    /// Validation failure stops the operation before any computation:
    /// the error is set and result and history stay unchanged. Division
    /// by zero is not an error; it produces the sentinel result and a
    /// sentinel history record.
    pub fn apply(&mut self, op: BinaryOp) {
        let Some((lhs, rhs)) = self.checked_operands() else {
            return;
        };

        if op == BinaryOp::Divide && rhs == 0.0 {
            self.result = DIVISION_BY_ZERO.to_string();
            self.history.append(HistoryEntry::new(DIVISION_BY_ZERO));
            return;
        }

        self.result = op.compute(lhs, rhs).to_string();
        let entry =
            HistoryEntry::computation(&self.operands[0], op, &self.operands[1], &self.result);
        self.history.append(entry);
    }

    pub fn add(&mut self) {
        self.apply(BinaryOp::Add);
    }

    pub fn subtract(&mut self) {
        self.apply(BinaryOp::Subtract);
    }

    pub fn multiply(&mut self) {
        self.apply(BinaryOp::Multiply);
    }

    pub fn divide(&mut self) {
        self.apply(BinaryOp::Divide);
    }

    /// Remove the most recent history entry, returning it.
    ///
    /// Operands, result, and error are unaffected; undoing an entry does
    /// not restore the state that produced it.
    pub fn undo(&mut self) -> Option<HistoryEntry> {
        self.history.undo_last()
    }

    /// Reset operands, result, error, and history in one step.
    pub fn clear(&mut self) {
        self.operands = [String::new(), String::new()];
        self.result.clear();
        self.error = None;
        self.history.clear();
    }

    /// The history as UTF-8 bytes ready to be written out.
    pub fn export_history(&self) -> Vec<u8> {
        self.history.export_text().into_bytes()
    }

    fn checked_operands(&mut self) -> Option<(f64, f64)> {
        match self.parse_operands() {
            Some(pair) => {
                self.error = None;
                Some(pair)
            }
            None => {
                self.error = Some(CalcError::InvalidOperands);
                None
            }
        }
    }

    fn parse_operands(&self) -> Option<(f64, f64)> {
        let lhs = self.operands[0].parse::<f64>().ok()?;
        let rhs = self.operands[1].parse::<f64>().ok()?;
        Some((lhs, rhs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::OperandSlot::{First, Second};

    fn calculator_with(lhs: &str, rhs: &str) -> Calculator {
        let mut calc = Calculator::new();
        assert!(calc.set_operand(First, lhs));
        assert!(calc.set_operand(Second, rhs));
        calc
    }

    #[test]
    fn test_initial_state_is_empty() {
        let calc = Calculator::new();
        assert_eq!(calc.operand(First), "");
        assert_eq!(calc.operand(Second), "");
        assert_eq!(calc.result(), "");
        assert!(calc.error().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_set_operand_accepts_numerals() {
        let mut calc = Calculator::new();
        assert!(calc.set_operand(First, "42"));
        assert_eq!(calc.operand(First), "42");
        assert!(calc.set_operand(First, "42."));
        assert_eq!(calc.operand(First), "42.");
    }

    #[test]
    fn test_set_operand_rejects_and_retains_prior_value() {
        let mut calc = Calculator::new();
        assert!(calc.set_operand(First, "42"));
        assert!(!calc.set_operand(First, "42a"));
        assert_eq!(calc.operand(First), "42");
    }

    #[test]
    fn test_set_operand_rejection_is_silent() {
        let mut calc = Calculator::new();
        assert!(!calc.set_operand(First, "abc"));
        assert!(calc.error().is_none());
        assert_eq!(calc.result(), "");
    }

    #[test]
    fn test_set_operand_accepts_empty_to_allow_deletion() {
        let mut calc = Calculator::new();
        assert!(calc.set_operand(First, "9"));
        assert!(calc.set_operand(First, ""));
        assert_eq!(calc.operand(First), "");
    }

    #[test]
    fn test_validate_fails_on_empty_operand() {
        let mut calc = Calculator::new();
        assert!(calc.set_operand(First, "3"));
        assert!(!calc.validate());
        assert_eq!(calc.error(), Some(&CalcError::InvalidOperands));
    }

    #[test]
    fn test_validate_fails_on_bare_decimal_point() {
        let mut calc = calculator_with(".", "4");
        assert!(!calc.validate());
        assert_eq!(calc.error(), Some(&CalcError::InvalidOperands));
    }

    #[test]
    fn test_validate_success_clears_prior_error() {
        let mut calc = Calculator::new();
        assert!(!calc.validate());
        assert!(calc.error().is_some());

        assert!(calc.set_operand(First, "1"));
        assert!(calc.set_operand(Second, "2"));
        assert!(calc.validate());
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_add_computes_and_records() {
        let mut calc = calculator_with("3", "4");
        calc.add();

        assert_eq!(calc.result(), "7");
        assert!(calc.error().is_none());
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().entries()[0].as_str(), "3 + 4 = 7");
    }

    #[test]
    fn test_subtract_computes_and_records() {
        let mut calc = calculator_with("10", "4");
        calc.subtract();

        assert_eq!(calc.result(), "6");
        assert_eq!(calc.history().entries()[0].as_str(), "10 - 4 = 6");
    }

    #[test]
    fn test_multiply_computes_and_records() {
        let mut calc = calculator_with("4", "5");
        calc.multiply();

        assert_eq!(calc.result(), "20");
        assert_eq!(calc.history().entries()[0].as_str(), "4 * 5 = 20");
    }

    #[test]
    fn test_divide_computes_and_records() {
        let mut calc = calculator_with("10", "4");
        calc.divide();

        assert_eq!(calc.result(), "2.5");
        assert_eq!(calc.history().entries()[0].as_str(), "10 / 4 = 2.5");
    }

    #[test]
    fn test_operation_on_invalid_operands_sets_error_only() {
        let mut calc = Calculator::new();
        assert!(!calc.set_operand(First, "abc"));
        assert!(calc.set_operand(Second, "4"));
        calc.subtract();

        assert_eq!(calc.error(), Some(&CalcError::InvalidOperands));
        assert_eq!(calc.result(), "");
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_operation_failure_preserves_previous_result() {
        let mut calc = calculator_with("3", "4");
        calc.add();
        assert_eq!(calc.result(), "7");

        assert!(calc.set_operand(Second, ""));
        calc.multiply();
        assert_eq!(calc.result(), "7");
        assert_eq!(calc.error(), Some(&CalcError::InvalidOperands));
        assert_eq!(calc.history().len(), 1);
    }

    #[test]
    fn test_successful_operation_clears_error() {
        let mut calc = Calculator::new();
        calc.add();
        assert!(calc.error().is_some());

        assert!(calc.set_operand(First, "1"));
        assert!(calc.set_operand(Second, "2"));
        calc.add();
        assert!(calc.error().is_none());
        assert_eq!(calc.result(), "3");
    }

    #[test]
    fn test_divide_by_zero_sets_sentinel_result_and_record() {
        let mut calc = calculator_with("10", "0");
        calc.divide();

        assert_eq!(calc.result(), "Error: Division by zero");
        assert!(calc.error().is_none());
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().entries()[0].as_str(), "Error: Division by zero");
    }

    #[test]
    fn test_divide_by_decimal_zero_is_still_zero() {
        let mut calc = calculator_with("10", "0.0");
        calc.divide();
        assert_eq!(calc.result(), "Error: Division by zero");
    }

    #[test]
    fn test_zero_divided_by_nonzero_is_fine() {
        let mut calc = calculator_with("0", "5");
        calc.divide();
        assert_eq!(calc.result(), "0");
        assert_eq!(calc.history().entries()[0].as_str(), "0 / 5 = 0");
    }

    #[test]
    fn test_partial_numerals_parse_leniently() {
        let mut calc = calculator_with("5.", ".5");
        calc.add();
        assert_eq!(calc.result(), "5.5");
        assert_eq!(calc.history().entries()[0].as_str(), "5. + .5 = 5.5");
    }

    #[test]
    fn test_result_is_replaced_wholesale() {
        let mut calc = calculator_with("3", "4");
        calc.add();
        calc.multiply();

        assert_eq!(calc.result(), "12");
        assert_eq!(calc.history().len(), 2);
    }

    #[test]
    fn test_float_artifacts_surface_verbatim() {
        let mut calc = calculator_with("0.1", "0.2");
        calc.add();
        assert_eq!(calc.result(), "0.30000000000000004");
    }

    #[test]
    fn test_undo_removes_newest_entry_only() {
        let mut calc = calculator_with("3", "4");
        calc.add();
        calc.multiply();

        let removed = calc.undo();
        assert_eq!(removed.as_ref().map(HistoryEntry::as_str), Some("3 * 4 = 12"));
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().entries()[0].as_str(), "3 + 4 = 7");
    }

    #[test]
    fn test_undo_leaves_result_and_operands_alone() {
        let mut calc = calculator_with("3", "4");
        calc.add();
        calc.undo();

        assert_eq!(calc.result(), "7");
        assert_eq!(calc.operand(First), "3");
        assert_eq!(calc.operand(Second), "4");
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_undo_on_empty_history_is_noop() {
        let mut calc = Calculator::new();
        assert!(calc.undo().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut calc = calculator_with("10", "0");
        calc.divide();
        calc.clear();

        assert_eq!(calc.operand(First), "");
        assert_eq!(calc.operand(Second), "");
        assert_eq!(calc.result(), "");
        assert!(calc.error().is_none());
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_clear_also_drops_pending_error() {
        let mut calc = Calculator::new();
        calc.add();
        assert!(calc.error().is_some());
        calc.clear();
        assert!(calc.error().is_none());
    }

    #[test]
    fn test_export_history_bytes() {
        let mut calc = calculator_with("1", "2");
        calc.add();
        assert!(calc.set_operand(First, "4"));
        assert!(calc.set_operand(Second, "5"));
        calc.multiply();

        assert_eq!(calc.export_history(), b"1 + 2 = 3\n4 * 5 = 20".to_vec());
    }

    #[test]
    fn test_export_history_on_empty_log_is_empty() {
        let calc = Calculator::new();
        assert!(calc.export_history().is_empty());
    }
}
