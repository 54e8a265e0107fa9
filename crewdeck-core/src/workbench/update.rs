use tracing::{debug, info};

use super::{Effect, Msg, Workbench};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: Workbench, msg: Msg) -> (Workbench, Vec<Effect>) {
    let effects = match msg {
        Msg::KindSelected(kind) => {
            state.set_kind(kind);
            Vec::new()
        }
        Msg::ContentChanged(content) => {
            state.set_content(content);
            Vec::new()
        }
        Msg::ClientSelected(client) => {
            state.select_client(client);
            Vec::new()
        }
        Msg::SettingChanged { kind, field, value } => {
            if let Err(e) = state.settings_mut().set(kind, &field, &value) {
                state.set_error(e.to_string());
            }
            Vec::new()
        }
        Msg::InstructionsChanged(instructions) => {
            state.set_instructions(instructions);
            Vec::new()
        }
        Msg::SubmitClicked => {
            if !state.can_submit() {
                debug!(
                    busy = state.is_busy(),
                    has_client = state.client().is_some(),
                    "submission not allowed"
                );
                return (state, Vec::new());
            }

            let was_tracking = state.is_tracking();
            let payload = state.payload();
            state.begin_submission();

            let mut effects = Vec::with_capacity(2);
            if was_tracking {
                effects.push(Effect::StopTracking);
            }
            effects.push(Effect::Submit(payload));
            effects
        }
        Msg::SubmissionSucceeded(task_id) => {
            if !state.is_busy() {
                return (state, Vec::new());
            }
            info!(task_id = %task_id, "submission accepted");
            state.submission_succeeded(task_id.clone());
            vec![Effect::StartTracking(task_id)]
        }
        Msg::SubmissionFailed(reason) => {
            if state.is_busy() {
                state.submission_failed(reason);
            }
            Vec::new()
        }
        Msg::TrackingStopped { task_id } => {
            if state.active_task() == Some(&task_id) {
                state.tracking_stopped();
            }
            Vec::new()
        }
        Msg::TornDown => {
            if state.is_tracking() {
                state.tracking_stopped();
                vec![Effect::StopTracking]
            } else {
                Vec::new()
            }
        }
    };

    (state, effects)
}
