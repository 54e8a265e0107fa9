//! Operator console
//!
//! Runs the effects the workbench asks for: submissions go to the backend,
//! tracking requests go to the polling controller. Follow-up messages are
//! fed back into the workbench until none remain.

use anyhow::{Context, Result};
use colored::*;
use crewdeck_client::BackendClient;
use crewdeck_core::domain::log::LogRecord;
use crewdeck_core::workbench::{Effect, Msg, Workbench, update};
use crewdeck_tracker::{PollingController, SessionSnapshot, StopReason};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::config::Config;

pub struct Operator {
    client: BackendClient,
    tracker: PollingController,
    workbench: Workbench,
}

impl Operator {
    pub fn new(config: &Config) -> Result<Self> {
        let client = config.backend_client()?;
        let tracker = PollingController::new(Arc::new(client.clone()), config.tracker.clone());
        Ok(Self {
            client,
            tracker,
            workbench: Workbench::new(),
        })
    }

    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    /// Applies a message and everything it leads to
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);

        while let Some(msg) = queue.pop_front() {
            let (next, effects) = update(std::mem::take(&mut self.workbench), msg);
            self.workbench = next;

            for effect in effects {
                if let Some(follow_up) = self.perform(effect).await {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    async fn perform(&mut self, effect: Effect) -> Option<Msg> {
        match effect {
            Effect::Submit(payload) => {
                debug!(kind = %payload.kind, "Submitting crew job");
                Some(match self.client.submit(payload).await {
                    Ok(task_id) => Msg::SubmissionSucceeded(task_id),
                    Err(e) => {
                        warn!("Submission failed: {}", e);
                        Msg::SubmissionFailed(e.operator_message())
                    }
                })
            }
            Effect::StartTracking(task_id) => {
                self.tracker.start(task_id);
                None
            }
            Effect::StopTracking => {
                self.tracker.stop();
                None
            }
        }
    }

    /// Prints the tracked task's log until the session stops
    ///
    /// Ctrl-C tears the workbench down, which stops the session.
    pub async fn follow(&mut self) -> Result<StopReason> {
        let mut rx = self.tracker.subscribe();
        let reason = follow_log(&mut rx).await?;

        match reason {
            Some(reason) => {
                if let Some(task_id) = self.tracker.task_id() {
                    self.dispatch(Msg::TrackingStopped { task_id }).await;
                }
                Ok(reason)
            }
            None => {
                self.dispatch(Msg::TornDown).await;
                Ok(StopReason::Cancelled)
            }
        }
    }
}

/// Prints new log records as they arrive
///
/// Returns the stop reason, or `None` if the operator pressed Ctrl-C first.
pub async fn follow_log(rx: &mut watch::Receiver<SessionSnapshot>) -> Result<Option<StopReason>> {
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    let mut seen = 0;
    loop {
        let snapshot = rx.borrow_and_update().clone();
        for record in snapshot.log.since(seen) {
            print_record(record);
        }
        seen = snapshot.log.len();

        if let Some(reason) = snapshot.stop_reason() {
            return Ok(Some(reason));
        }

        tokio::select! {
            changed = rx.changed() => changed.context("Tracker went away")?,
            _ = &mut ctrl_c => {
                println!();
                println!("{}", "Interrupted, no longer following.".dimmed());
                return Ok(None);
            }
        }
    }
}

/// Print a log record
pub fn print_record(record: &LogRecord) {
    let kind_colored = match record.kind.as_str() {
        "progress" => record.kind.cyan(),
        "success" => record.kind.green(),
        "error" => record.kind.red(),
        _ => record.kind.dimmed(),
    };

    println!(
        "{} [{}]",
        record.received_at.format("%H:%M:%S").to_string().dimmed(),
        kind_colored
    );
    println!("{}", record.text);
}

/// Print the outcome of a tracking session
pub fn print_stop_reason(task_id: &str, reason: StopReason) {
    let line = format!("Task {} {}", task_id, reason);
    match reason {
        StopReason::Completed => println!("{} {}", "✓".green(), line.green()),
        StopReason::Failed => println!("{} {}", "✗".red(), line.red()),
        StopReason::Cancelled | StopReason::Superseded => println!("{}", line.dimmed()),
    }
}
