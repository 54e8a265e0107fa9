//! Job domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::settings::JobSettings;

/// Kind of crew work the backend can run
///
/// The kind decides which settings record travels with a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Content authoring (press releases, blog posts)
    #[default]
    Autoblogging,
    CampaignPlanning,
    /// Status reporting for a client
    ClientReporting,
    /// Contact discovery within an industry
    Networking,
    PrResearch,
}

impl JobKind {
    /// All kinds, in the order they are offered to the operator
    pub const ALL: [JobKind; 5] = [
        JobKind::Autoblogging,
        JobKind::CampaignPlanning,
        JobKind::ClientReporting,
        JobKind::Networking,
        JobKind::PrResearch,
    ];

    /// Wire name sent as `crew`
    pub fn as_str(&self) -> &'static str {
        match self {
            JobKind::Autoblogging => "autoblogging",
            JobKind::CampaignPlanning => "campaign_planning",
            JobKind::ClientReporting => "client_reporting",
            JobKind::Networking => "networking",
            JobKind::PrResearch => "pr_research",
        }
    }

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            JobKind::Autoblogging => "Autoblogging Content Creation",
            JobKind::CampaignPlanning => "Campaign Planning",
            JobKind::ClientReporting => "Client Reporting",
            JobKind::Networking => "Industry Networking",
            JobKind::PrResearch => "PR Research",
        }
    }
}

impl fmt::Display for JobKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        JobKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                let names: Vec<&str> = JobKind::ALL.iter().map(JobKind::as_str).collect();
                format!("unknown job kind '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Everything needed to submit one crew job
///
/// Built by [`crate::build_payload`]. A payload is only submitted when it
/// carries non-empty content and a client id.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionPayload {
    pub kind: JobKind,
    pub content: String,
    pub client_id: Option<String>,
    pub settings: JobSettings,
    pub special_instructions: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_round_trips_through_wire_name() {
        for kind in JobKind::ALL {
            assert_eq!(kind.as_str().parse::<JobKind>().unwrap(), kind);
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_unknown_kind_lists_alternatives() {
        let err = "blogging".parse::<JobKind>().unwrap_err();
        assert!(err.contains("autoblogging"));
        assert!(err.contains("pr_research"));
    }

    #[test]
    fn test_default_kind_is_authoring() {
        assert_eq!(JobKind::default(), JobKind::Autoblogging);
    }
}
