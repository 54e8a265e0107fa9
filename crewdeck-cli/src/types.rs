//! Common types used across CLI modules

use anyhow::{Context, Result, bail};
use clap::Args;
use crewdeck_core::domain::client::ClientProfile;
use crewdeck_core::domain::job::JobKind;
use crewdeck_core::workbench::Msg;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// One `--set field=value` assignment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingAssignment {
    pub field: String,
    pub value: String,
}

impl FromStr for SettingAssignment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected field=value, got '{}'", s))?;
        let field = field.trim();
        if field.is_empty() {
            return Err(format!("missing field name in '{}'", s));
        }
        Ok(Self {
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

/// Inputs shared by `run` and `submit`
#[derive(Args, Debug, Clone)]
pub struct JobInputs {
    /// Job kind
    #[arg(long, default_value = "autoblogging")]
    pub kind: JobKind,

    /// Path to the client profile (JSON)
    #[arg(long)]
    pub client: PathBuf,

    /// Content to process
    #[arg(long, conflicts_with = "content_file", required_unless_present = "content_file")]
    pub content: Option<String>,

    /// Read the content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Special instructions for the crew
    #[arg(long)]
    pub instructions: Option<String>,

    /// Override a setting of the selected kind (repeatable)
    #[arg(long = "set", value_name = "FIELD=VALUE")]
    pub settings: Vec<SettingAssignment>,
}

impl JobInputs {
    /// Operator messages that fill the workbench form, in order
    ///
    /// The client is selected before settings are applied so that explicit
    /// `--set` values win over client-derived ones.
    pub fn messages(&self) -> Result<Vec<Msg>> {
        let profile = load_client_profile(&self.client)?;
        let content = self.read_content()?;

        let mut messages = vec![
            Msg::KindSelected(self.kind),
            Msg::ClientSelected(Some(profile)),
        ];
        messages.extend(self.settings.iter().map(|s| Msg::SettingChanged {
            kind: self.kind,
            field: s.field.clone(),
            value: s.value.clone(),
        }));
        messages.push(Msg::ContentChanged(content));
        if let Some(instructions) = &self.instructions {
            messages.push(Msg::InstructionsChanged(instructions.clone()));
        }

        Ok(messages)
    }

    fn read_content(&self) -> Result<String> {
        match (&self.content, &self.content_file) {
            (Some(content), _) => Ok(content.clone()),
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read content from {}", path.display())),
            (None, None) => bail!("Either --content or --content-file is required"),
        }
    }
}

/// Load a client profile from a JSON file
pub fn load_client_profile(path: &Path) -> Result<ClientProfile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read client profile {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid client profile {}", path.display()))
}
