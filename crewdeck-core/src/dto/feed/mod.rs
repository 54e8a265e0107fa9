//! Update feed DTOs

use serde::{Deserialize, Serialize};

use crate::domain::update::UpdateEntry;

/// Response of `GET /agent-output`
///
/// The feed covers every task the backend knows about.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<Vec<UpdateEntry>>,
}

impl FeedResponse {
    /// Entries of a successful feed; empty otherwise
    pub fn into_entries(self) -> Vec<UpdateEntry> {
        match (self.success, self.data) {
            (true, Some(entries)) => entries,
            _ => Vec::new(),
        }
    }
}
