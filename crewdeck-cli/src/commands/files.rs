//! File command handlers
//!
//! Listing and uploading reference documents in the backend file store.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use std::path::PathBuf;

use crate::config::Config;

/// File subcommands
#[derive(Subcommand)]
pub enum FileCommands {
    /// List stored files
    List,
    /// Upload a file
    Upload {
        /// Path to the file
        path: PathBuf,
    },
}

/// Handle file commands
pub async fn handle_file_command(command: FileCommands, config: &Config) -> Result<()> {
    let client = config.backend_client()?;

    match command {
        FileCommands::List => {
            let files = client.list_files().await.context("Failed to list files")?;

            if files.is_empty() {
                println!("{}", "No files found.".yellow());
                return Ok(());
            }

            println!("{}", format!("Found {} file(s):", files.len()).bold());
            for file in files {
                match file.name() {
                    Some(name) => println!("  {} {}", "▸".cyan(), name),
                    None => println!("  {} {}", "▸".cyan(), file.0.to_string().dimmed()),
                }
            }
        }
        FileCommands::Upload { path } => {
            client
                .upload_file(&path)
                .await
                .with_context(|| format!("Failed to upload {}", path.display()))?;

            println!("{} Uploaded {}", "✓".green(), path.display().to_string().cyan());
        }
    }

    Ok(())
}
