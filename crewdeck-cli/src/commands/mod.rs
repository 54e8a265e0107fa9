//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod crew;
mod feed;
mod files;
mod kinds;

pub use files::FileCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;
use crate::types::JobInputs;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Submit a job and follow it until it finishes
    Run(JobInputs),
    /// Submit a job and print its task id
    Submit(JobInputs),
    /// Follow an already submitted task
    Watch {
        /// Task id returned by the backend
        task_id: String,
    },
    /// Fetch the update feed once
    Feed {
        /// Only show entries for this task
        #[arg(long)]
        task: Option<String>,
    },
    /// List job kinds and their default settings
    Kinds,
    /// Backend file store
    Files {
        #[command(subcommand)]
        command: FileCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Run(inputs) => crew::run(inputs, config).await,
        Commands::Submit(inputs) => crew::submit(inputs, config).await,
        Commands::Watch { task_id } => crew::watch(&task_id, config).await,
        Commands::Feed { task } => feed::show_feed(task.as_deref(), config).await,
        Commands::Kinds => kinds::list_kinds(),
        Commands::Files { command } => files::handle_file_command(command, config).await,
    }
}
