//! Polling lifecycle controller
//!
//! Owns the one polling session of an operator view. Only the controller
//! creates or cancels the session's timer task.

use crewdeck_client::FeedSource;
use crewdeck_core::domain::update::TaskId;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::info;

use crate::config::TrackerConfig;
use crate::scheduler::FeedPoller;
use crate::session::{SessionPhase, SessionSnapshot, StopReason};

struct ActiveSession {
    task_id: TaskId,
    generation: u64,
    handle: JoinHandle<()>,
}

/// Starts, stops and observes polling sessions
///
/// States move Idle → Polling → Stopped. Starting a session cancels the
/// previous one first, so at most one timer task is alive. Dropping the
/// controller cancels the live session.
pub struct PollingController {
    poller: Arc<FeedPoller>,
    config: TrackerConfig,
    active: Option<ActiveSession>,
    generation: u64,
    tx: watch::Sender<SessionSnapshot>,
}

impl PollingController {
    /// Creates an idle controller
    pub fn new(source: Arc<dyn FeedSource>, config: TrackerConfig) -> Self {
        let poller = Arc::new(FeedPoller::new(source, config.fetch_timeout));
        let (tx, _rx) = watch::channel(SessionSnapshot::idle());
        Self {
            poller,
            config,
            active: None,
            generation: 0,
            tx,
        }
    }

    /// Starts tracking `task_id` with a fresh, empty log
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(&mut self, task_id: TaskId) {
        self.cancel(StopReason::Superseded);

        self.generation += 1;
        let generation = self.generation;
        self.tx
            .send_replace(SessionSnapshot::polling(generation, task_id.clone()));

        let handle = tokio::spawn(Arc::clone(&self.poller).run_session(
            task_id.clone(),
            generation,
            self.config.poll_interval,
            self.tx.clone(),
        ));

        info!(task_id = %task_id, generation, "Tracking session started");

        self.active = Some(ActiveSession {
            task_id,
            generation,
            handle,
        });
    }

    /// Stops the live session, if any
    pub fn stop(&mut self) {
        self.cancel(StopReason::Cancelled);
    }

    /// Whether a session timer is alive
    pub fn is_active(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|session| !session.handle.is_finished())
    }

    /// Task of the current (possibly stopped) session
    pub fn task_id(&self) -> Option<TaskId> {
        self.tx.borrow().task_id.clone()
    }

    /// Current snapshot
    pub fn snapshot(&self) -> SessionSnapshot {
        self.tx.borrow().clone()
    }

    /// Receiver notified on every snapshot change
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    fn cancel(&mut self, reason: StopReason) {
        let Some(session) = self.active.take() else {
            return;
        };

        session.handle.abort();

        let marked = self.tx.send_if_modified(|snapshot| {
            if snapshot.generation == session.generation && snapshot.is_polling() {
                snapshot.phase = SessionPhase::Stopped(reason);
                true
            } else {
                false
            }
        });

        if marked {
            info!(task_id = %session.task_id, "Tracking session stopped: {}", reason);
        }
    }
}

impl Drop for PollingController {
    fn drop(&mut self) {
        self.cancel(StopReason::Cancelled);
    }
}
