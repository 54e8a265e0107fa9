//! Job configuration building
//!
//! Assembles a [`SubmissionPayload`] from the operator's inputs and derives
//! authoring defaults from a client profile. Both functions are pure; input
//! validity is the caller's concern (see [`crate::workbench`]).

use crate::domain::client::ClientProfile;
use crate::domain::job::{JobKind, SubmissionPayload};
use crate::domain::settings::{ClientDerivedSettings, JobSettings};

/// Merge a job's inputs into a single submission payload
///
/// `settings` is expected to be the record for `kind`; the builder does not
/// check it. Blank special instructions become `None`, which goes on the wire
/// as an empty string.
pub fn build_payload(
    kind: JobKind,
    content: &str,
    client: Option<&ClientProfile>,
    settings: JobSettings,
    special_instructions: Option<&str>,
) -> SubmissionPayload {
    SubmissionPayload {
        kind,
        content: content.to_string(),
        client_id: client.map(|c| c.id.clone()),
        settings,
        special_instructions: special_instructions
            .filter(|s| !s.trim().is_empty())
            .map(ToOwned::to_owned),
    }
}

/// Authoring settings seeded from a client's profile
///
/// Missing or empty profile fields map to `""` so every key stays present.
pub fn derive_settings_from_client(client: &ClientProfile) -> ClientDerivedSettings {
    fn or_empty(field: &Option<String>) -> String {
        field.clone().unwrap_or_default()
    }

    ClientDerivedSettings {
        industry_focus: or_empty(&client.industry),
        company_boilerplate: or_empty(&client.boilerplate),
        contact_information: or_empty(&client.contact_info),
        target_audience: or_empty(&client.target_audience),
        spokesperson_name: or_empty(&client.spokesperson_name),
        spokesperson_title: or_empty(&client.spokesperson_title),
    }
}
