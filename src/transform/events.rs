// src/transform/events.rs
use bevy::prelude::Event;

use super::definitions::{Sheet, SheetId, Side};

/// Sent by the UI whenever either SRID dropdown changes, and synthesized
/// once at startup so visibility reflects the default selection.
#[derive(Event, Debug, Clone)]
pub struct SridChanged;

/// Sent by the UI whenever the input-format radio changes, and synthesized
/// once at startup.
#[derive(Event, Debug, Clone)]
pub struct InputFormatChanged;

/// Sent when the user picks a sheet from the autocomplete suggestions of a
/// specific hatt group.
#[derive(Event, Debug, Clone)]
pub struct SheetChosen {
    pub side: Side,
    pub id: SheetId,
    pub name: String,
}

/// Sent when the map-picker dialog is opened for a hatt group.
#[derive(Event, Debug, Clone)]
pub struct PickerOpened {
    pub side: Side,
}

/// Sent when the map-picker dialog is dismissed, by any route.
#[derive(Event, Debug, Clone)]
pub struct PickerClosed;

/// Delivered on the main thread once the sheet-index fetch finishes.
/// `Err` carries a display string; the fetch is never retried.
#[derive(Event, Debug, Clone)]
pub struct SheetIndexLoaded {
    pub result: Result<Vec<Sheet>, String>,
}

/// Sent when the user presses the transform button.
#[derive(Event, Debug, Clone)]
pub struct TransformRequested;

/// Delivered once per submit attempt: either the raw response body (success
/// or server error, shown verbatim) or a synthesized validation/transport
/// message.
#[derive(Event, Debug, Clone)]
pub struct TransformCompleted {
    pub output: String,
    pub is_error: bool,
}

/// Status-line feedback, mirrored to the log.
#[derive(Event, Debug, Clone)]
pub struct TransformFeedback {
    pub message: String,
    pub is_error: bool,
}
