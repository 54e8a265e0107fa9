//! Crewdeck Core
//!
//! Core types and pure logic for submitting crew jobs and tracking their progress.
//!
//! This crate contains:
//! - Domain types: job kinds, per-kind settings, client profiles, update entries
//! - DTOs: wire shapes exchanged with the crew backend
//! - Payload building and feed reconciliation
//! - The operator workbench reducer

pub mod domain;
pub mod dto;
pub mod payload;
pub mod reconcile;
pub mod workbench;

pub use payload::{build_payload, derive_settings_from_client};
pub use reconcile::{Reconciliation, reconcile};
