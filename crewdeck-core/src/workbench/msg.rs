use crate::domain::client::ClientProfile;
use crate::domain::job::JobKind;
use crate::domain::update::TaskId;

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Operator picked a job kind.
    KindSelected(JobKind),
    /// Operator edited the free-text content.
    ContentChanged(String),
    /// Operator picked (or cleared) a client.
    ClientSelected(Option<ClientProfile>),
    /// Operator edited one settings field of one kind.
    SettingChanged {
        kind: JobKind,
        field: String,
        value: String,
    },
    /// Operator edited the special instructions.
    InstructionsChanged(String),
    /// Operator asked to submit.
    SubmitClicked,
    /// Backend accepted the submission.
    SubmissionSucceeded(TaskId),
    /// Submission failed; the reason is shown to the operator.
    SubmissionFailed(String),
    /// The tracker stopped the session for `task_id`.
    TrackingStopped { task_id: TaskId },
    /// The operator's view is going away.
    TornDown,
}
