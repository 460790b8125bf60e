// src/transform/plugin.rs
use bevy::prelude::*;

use crate::search::SheetSearchIndex;
use super::events::{
    InputFormatChanged, PickerClosed, PickerOpened, SheetChosen, SheetIndexLoaded, SridChanged,
    TransformCompleted, TransformFeedback, TransformRequested,
};
use super::resources::{
    HattSelections, InputFormatChoice, PickerState, SheetCatalog, SridSelection, SubmissionDraft,
    VisibilityState,
};
use super::systems;

/// Ordering: UI-originated events are applied to state before anything that
/// consults that state, and network completions run last.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum TransformSystemSet {
    ApplyChanges,
    Network,
}

/// Plugin owning the form's domain state: SRID choices, hatt selections,
/// the picker session, derived visibility and the submit flow.
pub struct TransformPlugin;

impl Plugin for TransformPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                TransformSystemSet::ApplyChanges,
                TransformSystemSet::Network.after(TransformSystemSet::ApplyChanges),
            ),
        );

        app.init_resource::<SheetCatalog>()
            .init_resource::<SheetSearchIndex>()
            .init_resource::<HattSelections>()
            .init_resource::<SridSelection>()
            .init_resource::<InputFormatChoice>()
            .init_resource::<PickerState>()
            .init_resource::<VisibilityState>()
            .init_resource::<SubmissionDraft>();

        app.add_event::<SridChanged>()
            .add_event::<InputFormatChanged>()
            .add_event::<SheetChosen>()
            .add_event::<PickerOpened>()
            .add_event::<PickerClosed>()
            .add_event::<SheetIndexLoaded>()
            .add_event::<TransformRequested>()
            .add_event::<TransformCompleted>()
            .add_event::<TransformFeedback>();

        app.add_systems(
            Startup,
            (
                systems::visibility::apply_default_srids,
                systems::catalog::spawn_sheet_index_fetch,
                systems::visibility::synthesize_initial_change_events,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                systems::selection::handle_sheet_chosen,
                systems::selection::handle_picker_opened,
                systems::selection::handle_picker_closed,
                systems::visibility::recompute_visibility,
            )
                .chain()
                .in_set(TransformSystemSet::ApplyChanges),
        );

        app.add_systems(
            Update,
            (
                systems::catalog::handle_sheet_index_loaded,
                systems::submit::handle_transform_requested,
            )
                .chain()
                .in_set(TransformSystemSet::Network),
        );

        info!("TransformPlugin initialized.");
    }
}
