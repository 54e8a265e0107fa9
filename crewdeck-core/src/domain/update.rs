//! Update feed domain types

use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::fmt;

/// Opaque identifier the backend assigns to a submitted job
///
/// Deserializes from a JSON string or number; numbers keep their decimal form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a raw JSON id refers to this task
    ///
    /// The backend is not consistent about id types, so numeric ids compare
    /// by their decimal form.
    pub fn matches(&self, raw: &Value) -> bool {
        match raw {
            Value::String(s) => s == &self.0,
            Value::Number(n) => n.to_string() == self.0,
            _ => false,
        }
    }
}

impl<'de> Deserialize<'de> for TaskId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(TaskId(s)),
            Value::Number(n) => Ok(TaskId(n.to_string())),
            other => Err(de::Error::custom(format!(
                "task id must be a string or a number, got {}",
                other
            ))),
        }
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        TaskId::new(s)
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        TaskId(s)
    }
}

/// Type of an update entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateType {
    Progress,
    Success,
    Error,
    /// Any type this client does not interpret
    Other(String),
    /// The entry carries no `type` field
    Missing,
}

impl UpdateType {
    /// Whether this type ends a job
    pub fn is_terminal(&self) -> bool {
        matches!(self, UpdateType::Success | UpdateType::Error)
    }
}

impl From<&str> for UpdateType {
    fn from(s: &str) -> Self {
        match s {
            "progress" => UpdateType::Progress,
            "success" => UpdateType::Success,
            "error" => UpdateType::Error,
            other => UpdateType::Other(other.to_string()),
        }
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateType::Progress => f.write_str("progress"),
            UpdateType::Success => f.write_str("success"),
            UpdateType::Error => f.write_str("error"),
            UpdateType::Other(other) => f.write_str(other),
            UpdateType::Missing => f.write_str("-"),
        }
    }
}

/// One entry of the shared status feed
///
/// Entries are kept as raw JSON: the payload is arbitrary and the entry is
/// logged verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UpdateEntry(Value);

impl UpdateEntry {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Top-level `task_id`, if any
    pub fn task_id(&self) -> Option<&Value> {
        self.0.get("task_id")
    }

    /// `task_id` nested one level under `message`, if any
    pub fn nested_task_id(&self) -> Option<&Value> {
        self.0.get("message").and_then(|m| m.get("task_id"))
    }

    /// Whether the entry belongs to `task`, checking both id locations
    pub fn belongs_to(&self, task: &TaskId) -> bool {
        self.task_id().is_some_and(|id| task.matches(id))
            || self.nested_task_id().is_some_and(|id| task.matches(id))
    }

    pub fn update_type(&self) -> UpdateType {
        match self.0.get("type") {
            Some(Value::String(s)) => UpdateType::from(s.as_str()),
            Some(other) => UpdateType::Other(other.to_string()),
            None => UpdateType::Missing,
        }
    }

    /// Multi-line rendering used in the log
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

impl From<Value> for UpdateEntry {
    fn from(value: Value) -> Self {
        UpdateEntry(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_belongs_to_checks_both_locations() {
        let task = TaskId::new("t1");
        let top = UpdateEntry::new(json!({ "task_id": "t1", "type": "progress" }));
        let nested = UpdateEntry::new(json!({
            "type": "progress",
            "message": { "task_id": "t1" }
        }));
        let other = UpdateEntry::new(json!({ "task_id": "t2", "message": "t1" }));

        assert!(top.belongs_to(&task));
        assert!(nested.belongs_to(&task));
        assert!(!other.belongs_to(&task));
    }

    #[test]
    fn test_numeric_ids_match_their_decimal_form() {
        let task = TaskId::new("42");
        assert!(UpdateEntry::new(json!({ "task_id": 42 })).belongs_to(&task));
        assert!(!UpdateEntry::new(json!({ "task_id": 4.2 })).belongs_to(&task));
    }

    #[test]
    fn test_update_type_classification() {
        assert_eq!(
            UpdateEntry::new(json!({ "type": "success" })).update_type(),
            UpdateType::Success
        );
        assert_eq!(
            UpdateEntry::new(json!({ "type": "agent_thought" })).update_type(),
            UpdateType::Other("agent_thought".to_string())
        );
        assert_eq!(UpdateEntry::new(json!({})).update_type(), UpdateType::Missing);
        assert!(UpdateType::Error.is_terminal());
        assert!(!UpdateType::Progress.is_terminal());
    }

    #[test]
    fn test_non_object_entries_have_no_ids() {
        let entry = UpdateEntry::new(json!("just a string"));
        assert!(entry.task_id().is_none());
        assert!(!entry.belongs_to(&TaskId::new("t1")));
        assert_eq!(entry.update_type(), UpdateType::Missing);
    }

    #[test]
    fn test_task_id_is_transparent_on_the_wire() {
        let id: TaskId = serde_json::from_str("\"t100\"").unwrap();
        assert_eq!(id.as_str(), "t100");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"t100\"");
    }

    #[test]
    fn test_numeric_task_id_deserializes_to_decimal() {
        let id: TaskId = serde_json::from_str("100").unwrap();
        assert_eq!(id, TaskId::new("100"));
        assert!(id.matches(&json!(100)));

        assert!(serde_json::from_str::<TaskId>("null").is_err());
        assert!(serde_json::from_str::<TaskId>("[1]").is_err());
    }
}
