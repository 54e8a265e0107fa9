//! Update feed endpoint

use async_trait::async_trait;
use crewdeck_core::domain::update::UpdateEntry;
use crewdeck_core::dto::feed::FeedResponse;
use tracing::debug;

use crate::BackendClient;
use crate::error::Result;

/// Source of the shared update feed
///
/// The tracker polls through this trait so it can run against the real
/// backend or a scripted feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch the whole feed, entries for every task included
    async fn fetch_feed(&self) -> Result<Vec<UpdateEntry>>;
}

impl BackendClient {
    // =============================================================================
    // Update Feed
    // =============================================================================

    /// Fetch the shared update feed
    ///
    /// One round trip returning the entire feed regardless of task. A feed
    /// reported as unsuccessful, or without data, is returned as empty.
    pub async fn fetch_feed(&self) -> Result<Vec<UpdateEntry>> {
        let url = self.url("/agent-output");
        let response = self.client.get(&url).send().await?;
        let feed: FeedResponse = self.handle_response(response).await?;

        if !feed.success {
            debug!("backend reported an unsuccessful feed");
        }

        Ok(feed.into_entries())
    }
}

#[async_trait]
impl FeedSource for BackendClient {
    async fn fetch_feed(&self) -> Result<Vec<UpdateEntry>> {
        BackendClient::fetch_feed(self).await
    }
}
