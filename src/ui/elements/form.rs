// src/ui/elements/form.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::search::SheetSearchIndex;
use crate::settings::AppSettings;
use crate::transform::definitions::{InputFormat, Side, SridConfig, SridId, ANIM_SECS};
use crate::transform::events::{
    InputFormatChanged, PickerOpened, SheetChosen, SridChanged, TransformRequested,
};
use crate::transform::resources::{
    CatalogStatus, InputFormatChoice, SheetCatalog, SridSelection, SubmissionDraft,
    VisibilityState,
};
use crate::ui::state::FormState;
use crate::ui::UiFeedbackState;

use super::hatt_group::hatt_group;

/// The central form: SRID selectors, the conditional hatt groups, format
/// options, payload input, submit button and output area.
#[allow(clippy::too_many_arguments)]
pub fn transform_form_ui(
    mut contexts: EguiContexts,
    settings: Res<AppSettings>,
    mut srids: ResMut<SridSelection>,
    mut format: ResMut<InputFormatChoice>,
    mut draft: ResMut<SubmissionDraft>,
    mut form: ResMut<FormState>,
    visibility: Res<VisibilityState>,
    catalog: Res<SheetCatalog>,
    search: Res<SheetSearchIndex>,
    ui_feedback: Res<UiFeedbackState>,
    mut srid_changed: EventWriter<SridChanged>,
    mut format_changed: EventWriter<InputFormatChanged>,
    mut sheet_chosen: EventWriter<SheetChosen>,
    mut picker_opened: EventWriter<PickerOpened>,
    mut transform_requested: EventWriter<TransformRequested>,
) {
    let ctx = contexts.ctx_mut();

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Μετασχηματισμός συντεταγμένων");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Από:");
            if srid_dropdown(ui, "from-srid", &settings.srids, &mut srids.from) {
                srid_changed.write(SridChanged);
            }
            ui.add_space(12.0);
            ui.label("Σε:");
            if srid_dropdown(ui, "to-srid", &settings.srids, &mut srids.to) {
                srid_changed.write(SridChanged);
            }
        });

        for side in [Side::Source, Side::Target] {
            let visible = visibility.hatt_visible(side);
            let openness = ui.ctx().animate_bool_with_time(
                egui::Id::new(("hatt-group-visible", side)),
                visible,
                ANIM_SECS,
            );
            if openness > 0.0 {
                ui.scope(|ui| {
                    ui.multiply_opacity(openness);
                    // Fading out means the group is already disabled; its
                    // fields no longer take part in the submission.
                    ui.add_enabled_ui(visible, |ui| {
                        let heading = match side {
                            Side::Source => "Φύλλο χάρτη (από):",
                            Side::Target => "Φύλλο χάρτη (σε):",
                        };
                        hatt_group(
                            ui,
                            side,
                            heading,
                            form.hatt_query_mut(side),
                            &search,
                            &mut sheet_chosen,
                            &mut picker_opened,
                        );
                    });
                });
            }
        }

        if catalog.status() == CatalogStatus::Failed {
            ui.colored_label(
                egui::Color32::RED,
                "Το ευρετήριο φύλλων χάρτη δεν είναι διαθέσιμο.",
            );
        }
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Μορφή εισόδου:");
            let mut changed = false;
            changed |= ui
                .radio_value(&mut format.0, InputFormat::Delimited, "Κείμενο (CSV)")
                .changed();
            changed |= ui
                .radio_value(&mut format.0, InputFormat::Structured, "GeoJSON")
                .changed();
            if changed {
                format_changed.write(InputFormatChanged);
            }
        });

        let csv_openness = ui.ctx().animate_bool_with_time(
            egui::Id::new("csv-format-visible"),
            visibility.fields.delimited_options,
            ANIM_SECS,
        );
        if csv_openness > 0.0 {
            ui.scope(|ui| {
                ui.multiply_opacity(csv_openness);
                ui.add_enabled_ui(visibility.fields.delimited_options, |ui| {
                    ui.horizontal(|ui| {
                        ui.label("Στήλες:");
                        egui::ComboBox::from_id_salt("csv-fields")
                            .selected_text(
                                *visibility
                                    .delimited_labels
                                    .get(draft.field_order)
                                    .unwrap_or(&visibility.delimited_labels[0]),
                            )
                            .show_ui(ui, |ui| {
                                for (index, label) in
                                    visibility.delimited_labels.iter().enumerate()
                                {
                                    ui.selectable_value(&mut draft.field_order, index, *label);
                                }
                            });
                    });
                });
            });
        }
        ui.separator();

        ui.label("Δεδομένα εισόδου:");
        ui.add(
            egui::TextEdit::multiline(&mut draft.payload)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .code_editor(),
        );

        ui.horizontal(|ui| {
            ui.add_enabled_ui(!draft.in_flight, |ui| {
                if ui.button("Μετασχηματισμός").clicked() {
                    transform_requested.write(TransformRequested);
                }
            });
            if draft.in_flight {
                ui.spinner();
            }
        });

        if !ui_feedback.last_message.is_empty() {
            let text_color = if ui_feedback.is_error {
                egui::Color32::RED
            } else {
                ui.style().visuals.text_color()
            };
            ui.colored_label(text_color, &ui_feedback.last_message);
        }
        ui.separator();

        ui.label("Αποτέλεσμα:");
        ui.add(
            egui::TextEdit::multiline(&mut form.output)
                .desired_rows(8)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
    });
}

/// SRID dropdown over the configured menu. Returns true when the selection
/// changed this frame.
fn srid_dropdown(
    ui: &mut egui::Ui,
    id_salt: &str,
    cfg: &SridConfig,
    current: &mut SridId,
) -> bool {
    let selected_label = cfg
        .menu
        .iter()
        .find(|entry| entry.id == *current)
        .map(|entry| entry.label.clone())
        .unwrap_or_else(|| current.to_string());

    let mut changed = false;
    egui::ComboBox::from_id_salt(id_salt)
        .selected_text(selected_label)
        .width(260.0)
        .show_ui(ui, |ui| {
            for entry in &cfg.menu {
                if ui.selectable_value(current, entry.id, &entry.label).changed() {
                    changed = true;
                }
            }
        });
    changed
}
