//! File store DTOs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `GET /files`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileList {
    #[serde(default)]
    pub files: Vec<FileDescriptor>,
}

/// A file known to the file store
///
/// The store's descriptor shape is not fixed; it may be a bare name or an
/// object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileDescriptor(pub Value);

impl FileDescriptor {
    /// Best-effort display name
    pub fn name(&self) -> Option<&str> {
        match &self.0 {
            Value::String(name) => Some(name),
            Value::Object(map) => ["name", "filename", "path"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_names() {
        assert_eq!(FileDescriptor(json!("notes.txt")).name(), Some("notes.txt"));
        assert_eq!(
            FileDescriptor(json!({ "filename": "brief.pdf", "size": 12 })).name(),
            Some("brief.pdf")
        );
        assert_eq!(FileDescriptor(json!(7)).name(), None);
    }
}
