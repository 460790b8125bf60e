// src/transform/systems/selection.rs
use bevy::prelude::*;

use crate::transform::events::{PickerClosed, PickerOpened, SheetChosen};
use crate::transform::resources::{HattSelections, PickerState, SheetCatalog};

/// Applies an autocomplete pick to the selection state of the group the
/// pick came from. Groups are independent.
pub fn handle_sheet_chosen(
    mut events: EventReader<SheetChosen>,
    mut selections: ResMut<HattSelections>,
) {
    for event in events.read() {
        selections.get_mut(event.side).select(event.id, &event.name);
        debug!(
            "Sheet {} ('{}') chosen for {} group.",
            event.id, event.name, event.side
        );
    }
}

/// Starts a picker session for the requested group. Any prior dialog
/// selection is discarded; the bound group's current sheet is pre-selected,
/// deferred until the catalog load completes when necessary.
pub fn handle_picker_opened(
    mut events: EventReader<PickerOpened>,
    mut picker: ResMut<PickerState>,
    selections: Res<HattSelections>,
    catalog: Res<SheetCatalog>,
) {
    for event in events.read() {
        let token = picker.open(event.side, selections.get(event.side), catalog.is_loaded());
        debug!("Picker session {} opened for {} group.", token, event.side);
    }
}

/// Commits the dialog result when it closes: a non-empty selection set is
/// popped into the bound group, an empty one clears it.
pub fn handle_picker_closed(
    mut events: EventReader<PickerClosed>,
    mut picker: ResMut<PickerState>,
    mut selections: ResMut<HattSelections>,
    catalog: Res<SheetCatalog>,
) {
    for _ in events.read() {
        let Some(session) = picker.close() else {
            continue;
        };
        let group = selections.get_mut(session.side);
        match session.selected.and_then(|id| catalog.get(id)) {
            Some(sheet) => {
                group.select(sheet.id, &sheet.name);
                debug!(
                    "Picker session {} committed sheet {} to {} group.",
                    session.token, sheet.id, session.side
                );
            }
            None => {
                group.clear();
                debug!("Picker session {} closed with no selection.", session.token);
            }
        }
    }
}
