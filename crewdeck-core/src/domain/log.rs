//! Session log domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::update::{TaskId, UpdateEntry};

/// One serialized update entry in a session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub received_at: DateTime<Utc>,
    pub task_id: TaskId,
    /// Entry `type`, as reported
    pub kind: String,
    /// Pretty-printed JSON of the whole entry
    pub text: String,
}

impl LogRecord {
    pub fn from_entry(task_id: &TaskId, entry: &UpdateEntry, received_at: DateTime<Utc>) -> Self {
        Self {
            received_at,
            task_id: task_id.clone(),
            kind: entry.update_type().to_string(),
            text: entry.to_pretty(),
        }
    }
}

/// Ordered, append-only log of the active task's entries
///
/// Records are never removed or reordered. The accumulator only grows through
/// [`LogAccumulator::appended`], which hands back a new value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogAccumulator {
    records: Vec<LogRecord>,
}

impl LogAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// This log followed by `records`
    pub fn appended(mut self, records: impl IntoIterator<Item = LogRecord>) -> Self {
        self.records.extend(records);
        self
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    /// Records after the first `seen`, for incremental display
    pub fn since(&self, seen: usize) -> &[LogRecord] {
        self.records.get(seen..).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The visible log: every record's text separated by a newline
    pub fn render(&self) -> String {
        self.records
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(task: &TaskId, value: serde_json::Value) -> LogRecord {
        LogRecord::from_entry(task, &UpdateEntry::new(value), Utc::now())
    }

    #[test]
    fn test_render_joins_records_with_newline() {
        let task = TaskId::new("t1");
        let log = LogAccumulator::new()
            .appended([record(&task, json!({ "a": 1 }))])
            .appended([record(&task, json!({ "b": 2 }))]);

        assert_eq!(log.render(), "{\n  \"a\": 1\n}\n{\n  \"b\": 2\n}");
    }

    #[test]
    fn test_since_returns_only_new_records() {
        let task = TaskId::new("t1");
        let log = LogAccumulator::new().appended([
            record(&task, json!({ "type": "progress" })),
            record(&task, json!({ "type": "success" })),
        ]);

        assert_eq!(log.since(1).len(), 1);
        assert_eq!(log.since(1)[0].kind, "success");
        assert!(log.since(5).is_empty());
    }

    #[test]
    fn test_empty_log_renders_empty() {
        assert_eq!(LogAccumulator::new().render(), "");
        assert!(LogAccumulator::new().is_empty());
    }
}
