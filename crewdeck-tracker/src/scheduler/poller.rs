//! Feed poller
//!
//! Fetches the shared feed on a fixed-delay cadence and reconciles it for one
//! task. Each session runs in its own task; the controller owns its handle.

use anyhow::{Context, Result, anyhow};
use crewdeck_client::FeedSource;
use crewdeck_core::domain::log::LogAccumulator;
use crewdeck_core::domain::update::{TaskId, UpdateEntry, UpdateType};
use crewdeck_core::reconcile;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{self, Duration};
use tracing::{debug, info, warn};

use crate::session::{SessionPhase, SessionSnapshot, StopReason};

/// Single-fetch wrapper around a feed source
pub struct FeedPoller {
    source: Arc<dyn FeedSource>,
    fetch_timeout: Duration,
}

impl FeedPoller {
    pub fn new(source: Arc<dyn FeedSource>, fetch_timeout: Duration) -> Self {
        Self {
            source,
            fetch_timeout,
        }
    }

    /// Performs a single fetch of the whole feed
    ///
    /// A fetch that does not finish within the timeout fails like any other.
    pub async fn poll_once(&self) -> Result<Vec<UpdateEntry>> {
        time::timeout(self.fetch_timeout, self.source.fetch_feed())
            .await
            .map_err(|_| anyhow!("feed fetch timed out after {:?}", self.fetch_timeout))?
            .context("Failed to fetch update feed")
    }

    /// Runs one tracking session until the task reaches a terminal entry
    ///
    /// Waits `interval` before every fetch, counted from the end of the
    /// previous one, so fetches never overlap. Failed fetches are logged and
    /// the session carries on. The loop also ends as soon as the published
    /// snapshot no longer belongs to `generation`.
    pub(crate) async fn run_session(
        self: Arc<Self>,
        task_id: TaskId,
        generation: u64,
        interval: Duration,
        tx: watch::Sender<SessionSnapshot>,
    ) {
        info!(task_id = %task_id, "Starting feed polling (interval: {:?})", interval);

        let mut log = LogAccumulator::new();
        let mut consecutive_failures: u32 = 0;

        loop {
            time::sleep(interval).await;

            debug!(task_id = %task_id, "Polling update feed");

            let feed = match self.poll_once().await {
                Ok(feed) => feed,
                Err(e) => {
                    consecutive_failures += 1;
                    warn!(
                        task_id = %task_id,
                        consecutive_failures,
                        "Feed fetch failed, will retry next tick: {:#}", e
                    );
                    let current = publish(&tx, generation, |s| {
                        s.consecutive_failures = consecutive_failures;
                        s.ticks += 1;
                    });
                    if !current {
                        return;
                    }
                    continue;
                }
            };

            consecutive_failures = 0;
            let outcome = reconcile(&feed, &task_id, log);
            log = outcome.log;

            let stop = outcome.terminal.then(|| match outcome.last_type {
                Some(UpdateType::Error) => StopReason::Failed,
                _ => StopReason::Completed,
            });

            let current = publish(&tx, generation, |s| {
                if outcome.appended > 0 {
                    s.log = log.clone();
                }
                s.consecutive_failures = 0;
                s.ticks += 1;
                if let Some(reason) = stop {
                    s.phase = SessionPhase::Stopped(reason);
                }
            });

            if !current {
                debug!(task_id = %task_id, "Session no longer current, leaving poll loop");
                return;
            }

            if let Some(reason) = stop {
                info!(
                    task_id = %task_id,
                    entries = log.len(),
                    "Task reached terminal state: {}", reason
                );
                return;
            }
        }
    }
}

/// Applies `f` to the snapshot if it still belongs to a polling `generation`
///
/// Returns whether the session is still current.
fn publish(
    tx: &watch::Sender<SessionSnapshot>,
    generation: u64,
    f: impl FnOnce(&mut SessionSnapshot),
) -> bool {
    tx.send_if_modified(|snapshot| {
        if snapshot.generation != generation || !snapshot.is_polling() {
            return false;
        }
        f(snapshot);
        true
    })
}
