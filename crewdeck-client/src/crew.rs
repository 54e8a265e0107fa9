//! Crew submission endpoint

use crewdeck_core::domain::job::SubmissionPayload;
use crewdeck_core::domain::update::TaskId;
use crewdeck_core::dto::crew::{ErrorResponse, ExecuteCrewRequest, ExecuteCrewResponse};
use tracing::{info, warn};

use crate::BackendClient;
use crate::error::{GENERIC_REJECTION, SubmitError};

impl BackendClient {
    // =============================================================================
    // Crew Submission
    // =============================================================================

    /// Submit a crew job
    ///
    /// Performs a single round trip and returns the task id the backend
    /// assigned. Nothing is retried.
    ///
    /// # Errors
    /// - [`SubmitError::Rejected`] when the backend answers with a non-2xx
    ///   status; the reason is the body's `error` field when present
    /// - [`SubmitError::Transport`] when the request fails or a 2xx body has
    ///   no usable task id
    pub async fn submit(&self, payload: SubmissionPayload) -> Result<TaskId, SubmitError> {
        let url = self.url("/execute-crew");
        let kind = payload.kind;
        let request = ExecuteCrewRequest::from(payload);

        let response = self.client.post(&url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let reason = rejection_reason(&body);
            warn!(crew = %kind, status = status.as_u16(), "crew submission rejected: {}", reason);
            return Err(SubmitError::Rejected {
                status: status.as_u16(),
                reason,
            });
        }

        let body: ExecuteCrewResponse = response
            .json()
            .await
            .map_err(|e| SubmitError::Transport(format!("malformed response: {}", e)))?;

        info!(crew = %kind, task_id = %body.task_id, "crew submitted");

        Ok(body.task_id)
    }
}

/// `error` field of a rejection body, or the generic message
fn rejection_reason(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|r| r.error)
        .filter(|e| !e.is_empty())
        .unwrap_or_else(|| GENERIC_REJECTION.to_string())
}
