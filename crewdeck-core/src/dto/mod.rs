//! Data Transfer Objects for the crew backend
//!
//! This module contains the request and response bodies exchanged with the
//! backend over HTTP. Domain types convert into these right before sending.

pub mod crew;
pub mod feed;
pub mod file;
