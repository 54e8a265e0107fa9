//! Feed reconciliation
//!
//! Picks the active task's entries out of the shared feed, appends them to the
//! session log and reports whether the job has reached a terminal state.

use chrono::Utc;
use tracing::debug;

use crate::domain::log::{LogAccumulator, LogRecord};
use crate::domain::update::{TaskId, UpdateEntry, UpdateType};

/// Outcome of reconciling one feed against the session log
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub log: LogAccumulator,
    /// Whether the last selected entry was `success` or `error`
    pub terminal: bool,
    /// Type of the last selected entry, if any entry was selected
    pub last_type: Option<UpdateType>,
    /// Number of records appended this time
    pub appended: usize,
}

impl Reconciliation {
    fn unchanged(log: LogAccumulator) -> Self {
        Self {
            log,
            terminal: false,
            last_type: None,
            appended: 0,
        }
    }
}

/// Reconcile `feed` for `task` on top of `prior`
///
/// Entries match on `task_id` or on `message.task_id`. Matches are appended in
/// feed order without deduplication: the feed is append-only server side, so
/// an entry delivered on an earlier tick may be appended again. Only the last
/// match decides termination.
pub fn reconcile(feed: &[UpdateEntry], task: &TaskId, prior: LogAccumulator) -> Reconciliation {
    let selected: Vec<&UpdateEntry> = feed.iter().filter(|e| e.belongs_to(task)).collect();

    let Some(last) = selected.last() else {
        debug!(task_id = %task, feed_len = feed.len(), "no entries for task in feed");
        return Reconciliation::unchanged(prior);
    };

    let last_type = last.update_type();
    let terminal = last_type.is_terminal();
    let received_at = Utc::now();
    let appended = selected.len();

    let log = prior.appended(
        selected
            .iter()
            .map(|entry| LogRecord::from_entry(task, entry, received_at)),
    );

    debug!(task_id = %task, appended, terminal, "reconciled feed");

    Reconciliation {
        log,
        terminal,
        last_type: Some(last_type),
        appended,
    }
}
