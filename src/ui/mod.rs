// src/ui/mod.rs
use bevy::prelude::*;
use bevy_egui::EguiContextPass;

pub mod elements;
pub mod state;
pub mod systems;

use state::FormState;

/// Last status-line message shown under the form.
#[derive(Resource, Default, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
}

/// Plugin for the transform-form surface.
pub struct FormUiPlugin;

impl Plugin for FormUiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiFeedbackState>()
            .init_resource::<FormState>()
            .add_systems(
                Update,
                (
                    systems::handle_ui_feedback,
                    systems::handle_transform_results,
                    systems::sync_selection_names,
                ),
            )
            .add_systems(
                EguiContextPass,
                (
                    elements::form::transform_form_ui,
                    elements::picker_popup::sheet_picker_ui,
                )
                    .chain(),
            );

        info!("FormUiPlugin initialized.");
    }
}
