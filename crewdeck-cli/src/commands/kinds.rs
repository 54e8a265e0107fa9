//! Kinds command handler

use anyhow::Result;
use colored::*;
use crewdeck_core::domain::job::JobKind;
use crewdeck_core::domain::settings::{JobSettings, SettingsRegistry};
use serde::Serialize;

#[derive(Serialize)]
struct KindSummary {
    kind: JobKind,
    label: &'static str,
    settings: JobSettings,
}

/// Print every job kind with its default settings
pub fn list_kinds() -> Result<()> {
    let registry = SettingsRegistry::new();

    for kind in JobKind::ALL {
        let summary = KindSummary {
            kind,
            label: kind.label(),
            settings: registry.settings_for(kind),
        };

        println!("{} {}", "▸".cyan(), summary.label.bold());
        println!("{}", serde_json::to_string_pretty(&summary)?);
        println!();
    }

    Ok(())
}
