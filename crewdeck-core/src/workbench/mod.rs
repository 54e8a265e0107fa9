//! Operator workbench
//!
//! A pure state machine over everything the operator edits before and during
//! a job: kind, content, client, per-kind settings, instructions, the
//! outstanding submission and the tracked task. Events go through
//! [`update`], which returns the next state and the effects the caller must
//! run. The caller owns all I/O.

mod effect;
mod msg;
mod state;
mod update;

pub use effect::Effect;
pub use msg::Msg;
pub use state::Workbench;
pub use update::update;
