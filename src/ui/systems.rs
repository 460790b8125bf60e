// src/ui/systems.rs
use bevy::prelude::*;

use crate::transform::events::{TransformCompleted, TransformFeedback};
use crate::transform::resources::{HattSelections, SubmissionDraft};
use crate::ui::state::FormState;
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<TransformFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    for event in feedback_events.read() {
        ui_feedback_state.last_message = event.message.clone();
        ui_feedback_state.is_error = event.is_error;
        if event.is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

/// Writes each completed attempt into the output area, last writer wins,
/// and stamps the status line.
pub fn handle_transform_results(
    mut events: EventReader<TransformCompleted>,
    mut form: ResMut<FormState>,
    mut draft: ResMut<SubmissionDraft>,
    mut feedback_writer: EventWriter<TransformFeedback>,
) {
    for event in events.read() {
        form.output = event.output.clone();
        if draft.in_flight {
            draft.in_flight = false;
        }
        let stamp = chrono::Local::now().format("%H:%M:%S");
        let message = if event.is_error {
            format!("Ο μετασχηματισμός απέτυχε ({})", stamp)
        } else {
            format!("Ο μετασχηματισμός ολοκληρώθηκε ({})", stamp)
        };
        feedback_writer.write(TransformFeedback {
            message,
            is_error: event.is_error,
        });
    }
}

/// Reflects selection-state names into the search boxes whenever a group's
/// selection changes behind the UI (autocomplete pick or picker close).
/// Only the group that actually changed is touched, so in-progress typing
/// in the other box survives.
pub fn sync_selection_names(selections: Res<HattSelections>, mut form: ResMut<FormState>) {
    if !selections.is_changed() {
        return;
    }
    if form.last_source_name != selections.source.name() {
        form.last_source_name = selections.source.name().to_string();
        form.source_hatt_query = form.last_source_name.clone();
    }
    if form.last_target_name != selections.target.name() {
        form.last_target_name = selections.target.name().to_string();
        form.target_hatt_query = form.last_target_name.clone();
    }
}
