// src/transform/systems/visibility.rs
use bevy::prelude::*;

use crate::settings::AppSettings;
use crate::transform::definitions::{delimited_field_labels, FieldVisibility};
use crate::transform::events::{InputFormatChanged, SridChanged};
use crate::transform::resources::{InputFormatChoice, SridSelection, VisibilityState};

/// Applies the configured default SRID (the hatt system) to both dropdowns
/// before the first synthesized change event runs.
pub fn apply_default_srids(settings: Res<AppSettings>, mut srids: ResMut<SridSelection>) {
    srids.from = settings.srids.hatt;
    srids.to = settings.srids.hatt;
}

/// Emits one change event per selector at startup so the derived visibility
/// matches the defaults without waiting for user input.
pub fn synthesize_initial_change_events(
    mut srid_writer: EventWriter<SridChanged>,
    mut format_writer: EventWriter<InputFormatChanged>,
) {
    srid_writer.write(SridChanged);
    format_writer.write(InputFormatChanged);
}

/// Recomputes the whole `VisibilityState` from current inputs whenever any
/// relevant selector changed. Always a fresh derivation, never an
/// incremental toggle.
pub fn recompute_visibility(
    mut srid_events: EventReader<SridChanged>,
    mut format_events: EventReader<InputFormatChanged>,
    settings: Res<AppSettings>,
    srids: Res<SridSelection>,
    format: Res<InputFormatChoice>,
    mut visibility: ResMut<VisibilityState>,
) {
    if srid_events.is_empty() && format_events.is_empty() {
        return;
    }
    srid_events.clear();
    format_events.clear();

    let cfg = &settings.srids;
    visibility.fields = FieldVisibility::derive(cfg, srids.from, srids.to, format.0);
    visibility.delimited_labels = delimited_field_labels(cfg, srids.from);
    debug!(
        "Visibility recomputed: from={} to={} -> source_hatt={} target_hatt={} delimited={}",
        srids.from,
        srids.to,
        visibility.fields.source_hatt,
        visibility.fields.target_hatt,
        visibility.fields.delimited_options
    );
}
