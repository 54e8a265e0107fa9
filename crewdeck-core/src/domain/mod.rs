//! Core domain types
//!
//! This module contains the domain structures shared by the client, the tracker
//! and the CLI. They describe what an operator submits and what the backend
//! reports back.

pub mod client;
pub mod job;
pub mod log;
pub mod settings;
pub mod update;
