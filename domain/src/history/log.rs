//! Calculation history entities.
//!
//! The history is an append-only log of completed operations. Entries
//! are immutable once recorded; the only mutations the log supports are
//! appending, removing the newest entry, and clearing everything.

use crate::calculator::operation::BinaryOp;
use std::fmt;

/// One recorded operation (Entity)
///
/// Normally rendered as `"<operand1> <op> <operand2> = <result>"`. The
/// divide-by-zero record is the bare sentinel text instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry(String);

impl HistoryEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Standard record for a completed computation
    pub fn computation(lhs: &str, op: BinaryOp, rhs: &str, result: &str) -> Self {
        Self(format!("{} {} {} = {}", lhs, op.symbol(), rhs, result))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ordered log of past operations (Entity)
///
/// Newest entries sit at the end. Duplicate records are allowed; two
/// identical computations produce two entries.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Remove and return the newest entry. No-op on an empty log.
    pub fn undo_last(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Render the log as flat text: entries joined by single newlines,
    /// no trailing newline, no header. An empty log renders as the
    /// empty string.
    pub fn export_text(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computation_record_format() {
        let entry = HistoryEntry::computation("3", BinaryOp::Add, "4", "7");
        assert_eq!(entry.as_str(), "3 + 4 = 7");
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("1 + 2 = 3"));
        log.append(HistoryEntry::new("4 * 5 = 20"));

        let entries: Vec<&str> = log.entries().iter().map(HistoryEntry::as_str).collect();
        assert_eq!(entries, vec!["1 + 2 = 3", "4 * 5 = 20"]);
    }

    #[test]
    fn test_duplicates_are_allowed() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("2 + 2 = 4"));
        log.append(HistoryEntry::new("2 + 2 = 4"));
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn test_undo_last_removes_newest() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("1 + 1 = 2"));
        log.append(HistoryEntry::new("2 + 2 = 4"));

        let removed = log.undo_last();
        assert_eq!(removed.as_ref().map(HistoryEntry::as_str), Some("2 + 2 = 4"));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries()[0].as_str(), "1 + 1 = 2");
    }

    #[test]
    fn test_undo_last_on_empty_log_is_noop() {
        let mut log = HistoryLog::new();
        assert!(log.undo_last().is_none());
        assert!(log.is_empty());
    }

    #[test]
    fn test_clear_empties_the_log() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("1 + 1 = 2"));
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn test_export_text_joins_with_single_newlines() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("1 + 2 = 3"));
        log.append(HistoryEntry::new("4 * 5 = 20"));
        assert_eq!(log.export_text(), "1 + 2 = 3\n4 * 5 = 20");
    }

    #[test]
    fn test_export_text_single_entry_has_no_newline() {
        let mut log = HistoryLog::new();
        log.append(HistoryEntry::new("1 + 2 = 3"));
        assert_eq!(log.export_text(), "1 + 2 = 3");
    }

    #[test]
    fn test_export_text_empty_log_is_empty_string() {
        let log = HistoryLog::new();
        assert_eq!(log.export_text(), "");
    }
}
