use crate::domain::job::SubmissionPayload;
use crate::domain::update::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Send the payload to the backend.
    Submit(SubmissionPayload),
    /// Start a polling session for the task.
    StartTracking(TaskId),
    /// Cancel the live polling session.
    StopTracking,
}
