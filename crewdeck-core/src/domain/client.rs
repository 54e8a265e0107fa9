//! Client profile domain types

use serde::{Deserialize, Serialize};

/// A client the operator can run jobs for
///
/// Profiles come from the client directory. Only `id` is guaranteed; the rest
/// seeds authoring settings when the client is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientProfile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub boilerplate: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub target_audience: Option<String>,
    #[serde(default)]
    pub spokesperson_name: Option<String>,
    #[serde(default)]
    pub spokesperson_title: Option<String>,
}

impl ClientProfile {
    /// Profile carrying nothing but an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            industry: None,
            boilerplate: None,
            contact_info: None,
            target_audience: None,
            spokesperson_name: None,
            spokesperson_title: None,
        }
    }

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.is_empty()).unwrap_or(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_parses_with_missing_fields() {
        let profile: ClientProfile =
            serde_json::from_str(r#"{"id": "c1", "industry": "fintech"}"#).unwrap();
        assert_eq!(profile.id, "c1");
        assert_eq!(profile.industry.as_deref(), Some("fintech"));
        assert!(profile.boilerplate.is_none());
        assert_eq!(profile.display_name(), "c1");
    }
}
