//! Per-kind job settings
//!
//! Each [`JobKind`] has its own settings record. [`SettingsRegistry`] keeps one
//! record per kind so that switching kinds never loses edits, and
//! [`JobSettings`] carries the record for the kind actually submitted.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::job::JobKind;

/// Errors raised when editing a settings field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    /// The field does not exist for this kind
    #[error("unknown setting '{field}' for {kind}")]
    UnknownField { kind: JobKind, field: String },

    /// The field exists but the value is not acceptable
    #[error("invalid value '{value}' for setting '{field}': {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Tone requested for authored content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToneOfVoice {
    /// No preference given
    #[default]
    #[serde(rename = "")]
    Unset,
    Formal,
    Professional,
    Conversational,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseUrgency {
    Immediate,
    #[default]
    Normal,
    Embargo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Quarterly,
}

/// Settings for content authoring jobs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutobloggingSettings {
    pub topic: String,
    pub target_audience: String,
    pub headline: String,
    pub subheading: String,
    pub key_points: Vec<String>,
    pub tone_of_voice: ToneOfVoice,
    pub industry_focus: String,
    pub target_publications: String,
    pub company_boilerplate: String,
    pub spokesperson_name: String,
    pub spokesperson_title: String,
    pub contact_information: String,
    pub release_urgency: ReleaseUrgency,
    pub distribution_channels: Vec<String>,
    pub related_keywords: String,
    /// Kept as a numeric string, the form the backend receives it in
    pub target_word_count: String,
}

impl Default for AutobloggingSettings {
    fn default() -> Self {
        Self {
            topic: String::new(),
            target_audience: String::new(),
            headline: String::new(),
            subheading: String::new(),
            key_points: Vec::new(),
            tone_of_voice: ToneOfVoice::Unset,
            industry_focus: String::new(),
            target_publications: String::new(),
            company_boilerplate: String::new(),
            spokesperson_name: String::new(),
            spokesperson_title: String::new(),
            contact_information: String::new(),
            release_urgency: ReleaseUrgency::Normal,
            distribution_channels: Vec::new(),
            related_keywords: String::new(),
            target_word_count: "500".to_string(),
        }
    }
}

impl AutobloggingSettings {
    fn set(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        match field {
            "topic" => self.topic = value.to_string(),
            "target_audience" => self.target_audience = value.to_string(),
            "headline" => self.headline = value.to_string(),
            "subheading" => self.subheading = value.to_string(),
            "key_points" => self.key_points = parse_list(value),
            "tone_of_voice" => self.tone_of_voice = parse_enum(field, value)?,
            "industry_focus" => self.industry_focus = value.to_string(),
            "target_publications" => self.target_publications = value.to_string(),
            "company_boilerplate" => self.company_boilerplate = value.to_string(),
            "spokesperson_name" => self.spokesperson_name = value.to_string(),
            "spokesperson_title" => self.spokesperson_title = value.to_string(),
            "contact_information" => self.contact_information = value.to_string(),
            "release_urgency" => self.release_urgency = parse_enum(field, value)?,
            "distribution_channels" => self.distribution_channels = parse_list(value),
            "related_keywords" => self.related_keywords = value.to_string(),
            "target_word_count" => {
                let count = value.trim();
                count
                    .parse::<u32>()
                    .map_err(|e| invalid(field, value, e.to_string()))?;
                self.target_word_count = count.to_string();
            }
            _ => return Err(unknown(JobKind::Autoblogging, field)),
        }
        Ok(())
    }

    /// Overwrites the client-derived fields, leaving every other field as is
    pub fn apply_client_fields(&mut self, fields: ClientDerivedSettings) {
        self.industry_focus = fields.industry_focus;
        self.company_boilerplate = fields.company_boilerplate;
        self.contact_information = fields.contact_information;
        self.target_audience = fields.target_audience;
        self.spokesperson_name = fields.spokesperson_name;
        self.spokesperson_title = fields.spokesperson_title;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignPlanningSettings {
    pub focus_topic: String,
    pub target_audience: String,
    pub campaign_duration: String,
    pub key_message: String,
    pub secondary_messages: Vec<String>,
}

impl CampaignPlanningSettings {
    fn set(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        match field {
            "focus_topic" => self.focus_topic = value.to_string(),
            "target_audience" => self.target_audience = value.to_string(),
            "campaign_duration" => self.campaign_duration = value.to_string(),
            "key_message" => self.key_message = value.to_string(),
            "secondary_messages" => self.secondary_messages = parse_list(value),
            _ => return Err(unknown(JobKind::CampaignPlanning, field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientReportingSettings {
    pub client_name: String,
    pub report_frequency: ReportFrequency,
}

impl ClientReportingSettings {
    fn set(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        match field {
            "client_name" => self.client_name = value.to_string(),
            "report_frequency" => self.report_frequency = parse_enum(field, value)?,
            _ => return Err(unknown(JobKind::ClientReporting, field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkingSettings {
    pub client_name: String,
    pub industry: String,
    pub location: String,
}

impl NetworkingSettings {
    fn set(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        match field {
            "client_name" => self.client_name = value.to_string(),
            "industry" => self.industry = value.to_string(),
            "location" => self.location = value.to_string(),
            _ => return Err(unknown(JobKind::Networking, field)),
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrResearchSettings {
    pub client_name: String,
    pub industry: String,
}

impl PrResearchSettings {
    fn set(&mut self, field: &str, value: &str) -> Result<(), SettingsError> {
        match field {
            "client_name" => self.client_name = value.to_string(),
            "industry" => self.industry = value.to_string(),
            _ => return Err(unknown(JobKind::PrResearch, field)),
        }
        Ok(())
    }
}

/// Settings record for exactly one job kind
///
/// Serializes as the bare record: the kind already travels as `crew`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum JobSettings {
    Autoblogging(AutobloggingSettings),
    CampaignPlanning(CampaignPlanningSettings),
    ClientReporting(ClientReportingSettings),
    Networking(NetworkingSettings),
    PrResearch(PrResearchSettings),
}

impl JobSettings {
    /// The kind this record belongs to
    pub fn kind(&self) -> JobKind {
        match self {
            JobSettings::Autoblogging(_) => JobKind::Autoblogging,
            JobSettings::CampaignPlanning(_) => JobKind::CampaignPlanning,
            JobSettings::ClientReporting(_) => JobKind::ClientReporting,
            JobSettings::Networking(_) => JobKind::Networking,
            JobSettings::PrResearch(_) => JobKind::PrResearch,
        }
    }
}

/// Authoring fields pre-populated from the selected client's profile
///
/// Every field is always present; anything the profile lacks is `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDerivedSettings {
    pub industry_focus: String,
    pub company_boilerplate: String,
    pub contact_information: String,
    pub target_audience: String,
    pub spokesperson_name: String,
    pub spokesperson_title: String,
}

/// One settings record per job kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsRegistry {
    pub autoblogging: AutobloggingSettings,
    pub campaign_planning: CampaignPlanningSettings,
    pub client_reporting: ClientReportingSettings,
    pub networking: NetworkingSettings,
    pub pr_research: PrResearchSettings,
}

impl SettingsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the record for `kind`
    pub fn settings_for(&self, kind: JobKind) -> JobSettings {
        match kind {
            JobKind::Autoblogging => JobSettings::Autoblogging(self.autoblogging.clone()),
            JobKind::CampaignPlanning => {
                JobSettings::CampaignPlanning(self.campaign_planning.clone())
            }
            JobKind::ClientReporting => JobSettings::ClientReporting(self.client_reporting.clone()),
            JobKind::Networking => JobSettings::Networking(self.networking.clone()),
            JobKind::PrResearch => JobSettings::PrResearch(self.pr_research.clone()),
        }
    }

    /// Edit one field of one kind by its wire name
    ///
    /// List fields take comma-separated text. Enumerated fields take their
    /// wire names. On error the record is left unchanged.
    pub fn set(&mut self, kind: JobKind, field: &str, value: &str) -> Result<(), SettingsError> {
        match kind {
            JobKind::Autoblogging => self.autoblogging.set(field, value),
            JobKind::CampaignPlanning => self.campaign_planning.set(field, value),
            JobKind::ClientReporting => self.client_reporting.set(field, value),
            JobKind::Networking => self.networking.set(field, value),
            JobKind::PrResearch => self.pr_research.set(field, value),
        }
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_enum<T: DeserializeOwned>(field: &str, value: &str) -> Result<T, SettingsError> {
    serde_json::from_value(serde_json::Value::String(value.trim().to_string()))
        .map_err(|e| invalid(field, value, e.to_string()))
}

fn unknown(kind: JobKind, field: &str) -> SettingsError {
    SettingsError::UnknownField {
        kind,
        field: field.to_string(),
    }
}

fn invalid(field: &str, value: &str, reason: String) -> SettingsError {
    SettingsError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authoring_defaults_match_form() {
        let settings = AutobloggingSettings::default();
        assert_eq!(settings.release_urgency, ReleaseUrgency::Normal);
        assert_eq!(settings.target_word_count, "500");
        assert_eq!(settings.tone_of_voice, ToneOfVoice::Unset);

        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["tone_of_voice"], json!(""));
        assert_eq!(value["release_urgency"], json!("normal"));
        assert_eq!(value["key_points"], json!([]));
    }

    #[test]
    fn test_job_settings_serialize_without_tag() {
        let registry = SettingsRegistry::new();
        let value = serde_json::to_value(registry.settings_for(JobKind::ClientReporting)).unwrap();
        assert_eq!(
            value,
            json!({ "client_name": "", "report_frequency": "daily" })
        );
    }

    #[test]
    fn test_set_list_and_enum_fields() {
        let mut registry = SettingsRegistry::new();
        registry
            .set(JobKind::Autoblogging, "key_points", "launch, pricing ,, roadmap")
            .unwrap();
        registry
            .set(JobKind::Autoblogging, "tone_of_voice", "technical")
            .unwrap();
        registry
            .set(JobKind::ClientReporting, "report_frequency", "quarterly")
            .unwrap();

        assert_eq!(
            registry.autoblogging.key_points,
            vec!["launch", "pricing", "roadmap"]
        );
        assert_eq!(registry.autoblogging.tone_of_voice, ToneOfVoice::Technical);
        assert_eq!(
            registry.client_reporting.report_frequency,
            ReportFrequency::Quarterly
        );
    }

    #[test]
    fn test_set_rejects_unknown_field_and_bad_values() {
        let mut registry = SettingsRegistry::new();

        let err = registry
            .set(JobKind::PrResearch, "location", "Berlin")
            .unwrap_err();
        assert!(matches!(err, SettingsError::UnknownField { kind: JobKind::PrResearch, .. }));

        let err = registry
            .set(JobKind::Autoblogging, "release_urgency", "yesterday")
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));

        let err = registry
            .set(JobKind::Autoblogging, "target_word_count", "lots")
            .unwrap_err();
        assert!(matches!(err, SettingsError::InvalidValue { .. }));
        assert_eq!(registry, SettingsRegistry::new());
    }

    #[test]
    fn test_edits_are_scoped_to_their_kind() {
        let mut registry = SettingsRegistry::new();
        registry
            .set(JobKind::CampaignPlanning, "target_audience", "CFOs")
            .unwrap();

        assert_eq!(registry.campaign_planning.target_audience, "CFOs");
        assert_eq!(registry.autoblogging.target_audience, "");
    }

    #[test]
    fn test_settings_for_reports_its_kind() {
        let registry = SettingsRegistry::new();
        for kind in JobKind::ALL {
            assert_eq!(registry.settings_for(kind).kind(), kind);
        }
    }
}
