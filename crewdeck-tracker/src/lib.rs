//! Crewdeck Tracker
//!
//! Follows a submitted crew job through the backend's shared update feed.
//!
//! Architecture:
//! - Configuration: polling cadence and fetch timeout
//! - Scheduler: fixed-delay feed polling and reconciliation for one task
//! - Controller: session lifecycle (start, stop, supersede, teardown)
//! - Session: snapshots published to observers
//!
//! A session polls until the task's last entry is `success` or `error`, until
//! it is stopped, or until a new session replaces it. A failed fetch never
//! ends a session.

pub mod config;
pub mod controller;
pub mod scheduler;
pub mod session;

pub use config::TrackerConfig;
pub use controller::PollingController;
pub use session::{SessionPhase, SessionSnapshot, StopReason};
