//! Scheduler layer for the tracker
//!
//! This layer fetches the update feed on a fixed cadence and reconciles it
//! for the tracked task.

pub mod poller;

pub use poller::FeedPoller;
