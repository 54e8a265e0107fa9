//! Polling session snapshots
//!
//! The controller publishes a [`SessionSnapshot`] after every change so that
//! observers never touch the session itself.

use crewdeck_core::domain::log::LogAccumulator;
use crewdeck_core::domain::update::TaskId;
use std::fmt;

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The last entry for the task was `success`
    Completed,
    /// The last entry for the task was `error`
    Failed,
    /// Stopped on request, or because the controller went away
    Cancelled,
    /// A new session replaced this one
    Superseded,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StopReason::Completed => "completed",
            StopReason::Failed => "failed",
            StopReason::Cancelled => "cancelled",
            StopReason::Superseded => "superseded",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Polling,
    /// Terminal for the session
    Stopped(StopReason),
}

/// Observable state of the current polling session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// Increments with every started session
    pub generation: u64,
    pub phase: SessionPhase,
    /// Set whenever the phase is not `Idle`
    pub task_id: Option<TaskId>,
    pub log: LogAccumulator,
    /// Failed ticks since the last successful fetch
    pub consecutive_failures: u32,
    /// Completed ticks, failed ones included
    pub ticks: u64,
}

impl SessionSnapshot {
    pub fn idle() -> Self {
        Self {
            generation: 0,
            phase: SessionPhase::Idle,
            task_id: None,
            log: LogAccumulator::new(),
            consecutive_failures: 0,
            ticks: 0,
        }
    }

    pub(crate) fn polling(generation: u64, task_id: TaskId) -> Self {
        Self {
            generation,
            phase: SessionPhase::Polling,
            task_id: Some(task_id),
            log: LogAccumulator::new(),
            consecutive_failures: 0,
            ticks: 0,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.phase == SessionPhase::Polling
    }

    /// The stop reason, once the session is over
    pub fn stop_reason(&self) -> Option<StopReason> {
        match self.phase {
            SessionPhase::Stopped(reason) => Some(reason),
            _ => None,
        }
    }
}

impl Default for SessionSnapshot {
    fn default() -> Self {
        Self::idle()
    }
}
