use crate::domain::client::ClientProfile;
use crate::domain::job::{JobKind, SubmissionPayload};
use crate::domain::settings::SettingsRegistry;
use crate::domain::update::TaskId;
use crate::payload::{build_payload, derive_settings_from_client};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbench {
    kind: JobKind,
    content: String,
    client: Option<ClientProfile>,
    settings: SettingsRegistry,
    special_instructions: String,
    busy: bool,
    active_task: Option<TaskId>,
    tracking: bool,
    error: Option<String>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(&self) -> JobKind {
        self.kind
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn client(&self) -> Option<&ClientProfile> {
        self.client.as_ref()
    }

    pub fn settings(&self) -> &SettingsRegistry {
        &self.settings
    }

    pub fn special_instructions(&self) -> &str {
        &self.special_instructions
    }

    /// A submission is outstanding
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn active_task(&self) -> Option<&TaskId> {
        self.active_task.as_ref()
    }

    /// A polling session is live for the active task
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Error banner shown to the operator
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Submission is allowed: content and client present, nothing outstanding
    pub fn can_submit(&self) -> bool {
        !self.busy && self.client.is_some() && !self.content.is_empty()
    }

    pub(crate) fn payload(&self) -> SubmissionPayload {
        build_payload(
            self.kind,
            &self.content,
            self.client.as_ref(),
            self.settings.settings_for(self.kind),
            Some(&self.special_instructions),
        )
    }

    pub(crate) fn set_kind(&mut self, kind: JobKind) {
        self.kind = kind;
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }

    pub(crate) fn set_instructions(&mut self, instructions: String) {
        self.special_instructions = instructions;
    }

    /// Select a client, refreshing authoring settings when the client changes
    pub(crate) fn select_client(&mut self, client: Option<ClientProfile>) {
        let changed = match (&self.client, &client) {
            (Some(current), Some(next)) => current.id != next.id,
            (None, Some(_)) => true,
            (_, None) => false,
        };
        if let (true, Some(next)) = (changed, &client) {
            self.settings
                .autoblogging
                .apply_client_fields(derive_settings_from_client(next));
        }
        self.client = client;
    }

    pub(crate) fn settings_mut(&mut self) -> &mut SettingsRegistry {
        &mut self.settings
    }

    pub(crate) fn begin_submission(&mut self) {
        self.busy = true;
        self.error = None;
        self.active_task = None;
        self.tracking = false;
    }

    pub(crate) fn submission_succeeded(&mut self, task_id: TaskId) {
        self.busy = false;
        self.active_task = Some(task_id);
        self.tracking = true;
    }

    pub(crate) fn submission_failed(&mut self, reason: String) {
        self.busy = false;
        self.error = Some(reason);
    }

    pub(crate) fn tracking_stopped(&mut self) {
        self.tracking = false;
    }

    pub(crate) fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}
