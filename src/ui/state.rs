// src/ui/state.rs
use bevy::prelude::*;

use crate::transform::definitions::Side;

/// Purely-visual form state: text-edit buffers and the output display.
/// Domain state lives in the transform resources; this only mirrors it.
#[derive(Resource, Debug, Default)]
pub struct FormState {
    pub source_hatt_query: String,
    pub target_hatt_query: String,
    pub output: String,
    pub(crate) last_source_name: String,
    pub(crate) last_target_name: String,
}

impl FormState {
    pub fn hatt_query_mut(&mut self, side: Side) -> &mut String {
        match side {
            Side::Source => &mut self.source_hatt_query,
            Side::Target => &mut self.target_hatt_query,
        }
    }
}
