//! Crew execution DTOs

use serde::{Deserialize, Serialize};

use crate::domain::job::{JobKind, SubmissionPayload};
use crate::domain::settings::JobSettings;
use crate::domain::update::TaskId;

/// Body of `POST /execute-crew`
#[derive(Debug, Clone, Serialize)]
pub struct ExecuteCrewRequest {
    pub crew: JobKind,
    pub data: CrewData,
}

/// Job data carried by an execute request
#[derive(Debug, Clone, Serialize)]
pub struct CrewData {
    pub content: String,
    pub client_id: Option<String>,
    pub settings: JobSettings,
    /// Always present; `""` when the operator gave none
    pub special_instructions: String,
}

impl From<SubmissionPayload> for ExecuteCrewRequest {
    fn from(payload: SubmissionPayload) -> Self {
        Self {
            crew: payload.kind,
            data: CrewData {
                content: payload.content,
                client_id: payload.client_id,
                settings: payload.settings,
                special_instructions: payload.special_instructions.unwrap_or_default(),
            },
        }
    }
}

/// Successful response of `POST /execute-crew`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteCrewResponse {
    pub task_id: TaskId,
}

/// Error body returned by the backend on failure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
}
