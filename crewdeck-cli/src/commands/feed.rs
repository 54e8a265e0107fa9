//! Feed command handler
//!
//! One-shot look at the backend's shared update feed.

use anyhow::{Context, Result};
use colored::*;
use crewdeck_core::domain::log::LogAccumulator;
use crewdeck_core::domain::update::TaskId;
use crewdeck_core::reconcile;

use crate::config::Config;
use crate::operator::print_record;

/// Fetch the feed once and print it, optionally narrowed to one task
pub async fn show_feed(task: Option<&str>, config: &Config) -> Result<()> {
    let client = config.backend_client()?;
    let feed = client
        .fetch_feed()
        .await
        .context("Failed to fetch update feed")?;

    let Some(task) = task else {
        if feed.is_empty() {
            println!("{}", "Feed is empty.".yellow());
            return Ok(());
        }
        println!("{}", format!("Found {} entr(ies):", feed.len()).bold());
        for entry in &feed {
            println!("{}", entry.to_pretty());
        }
        return Ok(());
    };

    let task_id = TaskId::new(task);
    let outcome = reconcile(&feed, &task_id, LogAccumulator::new());

    if outcome.log.is_empty() {
        println!(
            "{}",
            format!("No entries for task {} ({} in feed).", task_id, feed.len()).yellow()
        );
        return Ok(());
    }

    for record in outcome.log.records() {
        print_record(record);
    }

    let status = match outcome.last_type {
        Some(kind) if outcome.terminal => kind.to_string().bold(),
        _ => "in progress".cyan(),
    };
    println!();
    println!("  Task:    {}", task_id.to_string().cyan());
    println!("  Entries: {}", outcome.log.len());
    println!("  Status:  {}", status);

    Ok(())
}
