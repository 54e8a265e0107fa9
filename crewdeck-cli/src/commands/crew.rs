//! Crew command handlers
//!
//! Submitting jobs through the workbench and following their progress.

use anyhow::{Result, bail};
use colored::*;
use crewdeck_core::domain::update::TaskId;
use crewdeck_core::workbench::Msg;
use crewdeck_tracker::{PollingController, StopReason};
use std::sync::Arc;

use crate::config::Config;
use crate::operator::{Operator, follow_log, print_stop_reason};
use crate::types::JobInputs;

/// Fill the workbench, submit, and follow the task to the end
pub async fn run(inputs: JobInputs, config: &Config) -> Result<()> {
    let mut operator = Operator::new(config)?;
    let task_id = submit_with(&mut operator, &inputs).await?;

    println!("{}", format!("Following task {}...", task_id).bold());
    println!("{}", "─".repeat(80).dimmed());

    let reason = operator.follow().await?;

    println!("{}", "─".repeat(80).dimmed());
    print_stop_reason(task_id.as_str(), reason);

    if reason == StopReason::Failed {
        bail!("Task {} failed", task_id);
    }
    Ok(())
}

/// Submit a job and print its task id
pub async fn submit(inputs: JobInputs, config: &Config) -> Result<()> {
    let mut operator = Operator::new(config)?;
    let task_id = submit_with(&mut operator, &inputs).await?;

    // Submitting starts a session; this command does not follow it
    operator.dispatch(Msg::TornDown).await;

    println!("{}", task_id);
    Ok(())
}

/// Follow an existing task until it reaches a terminal entry
pub async fn watch(task_id: &str, config: &Config) -> Result<()> {
    let client = config.backend_client()?;
    let mut tracker = PollingController::new(Arc::new(client), config.tracker.clone());
    let mut rx = tracker.subscribe();

    tracker.start(TaskId::new(task_id));
    println!(
        "{}",
        format!(
            "Following task {} (every {:?})...",
            task_id, config.tracker.poll_interval
        )
        .bold()
    );

    let reason = match follow_log(&mut rx).await? {
        Some(reason) => reason,
        None => {
            tracker.stop();
            StopReason::Cancelled
        }
    };

    print_stop_reason(task_id, reason);

    if reason == StopReason::Failed {
        bail!("Task {} failed", task_id);
    }
    Ok(())
}

async fn submit_with(operator: &mut Operator, inputs: &JobInputs) -> Result<TaskId> {
    for msg in inputs.messages()? {
        operator.dispatch(msg).await;
        if let Some(error) = operator.workbench().error() {
            bail!("{}", error);
        }
    }

    let client_name = operator
        .workbench()
        .client()
        .map(|c| c.display_name().to_string())
        .unwrap_or_default();
    println!(
        "{} {} for {}",
        "▸".cyan(),
        operator.workbench().kind().label().bold(),
        client_name.cyan()
    );

    operator.dispatch(Msg::SubmitClicked).await;

    let workbench = operator.workbench();
    if let Some(task_id) = workbench.active_task() {
        println!("{} Submitted task {}", "✓".green(), task_id.to_string().cyan());
        return Ok(task_id.clone());
    }

    match workbench.error() {
        Some(error) => bail!("{}", error),
        None => bail!("Nothing to submit: content and client are required"),
    }
}
