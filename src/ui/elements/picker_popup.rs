// src/ui/elements/picker_popup.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use egui_extras::{Column, TableBuilder};

use crate::transform::events::PickerClosed;
use crate::transform::resources::{CatalogStatus, PickerState, SheetCatalog};

/// The modal sheet-picker dialog. Rendered only while a picker session is
/// open; every way of dismissing it emits `PickerClosed` so the session is
/// committed by the close handler.
pub fn sheet_picker_ui(
    mut contexts: EguiContexts,
    mut picker: ResMut<PickerState>,
    catalog: Res<SheetCatalog>,
    mut picker_closed: EventWriter<PickerClosed>,
) {
    if picker.session().is_none() {
        return;
    }
    let ctx = contexts.ctx_mut();

    let mut is_window_open = true;
    let mut close_requested = false;

    egui::Window::new("Επιλογή φύλλου χάρτη")
        .collapsible(false)
        .resizable(true)
        .default_size([440.0, 420.0])
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut is_window_open)
        .show(ctx, |ui| {
            let Some(session) = picker.session_mut() else {
                return;
            };

            let selected_name = session
                .selected
                .and_then(|id| catalog.get(id))
                .map(|sheet| sheet.name.as_str())
                .unwrap_or("");
            ui.label(format!("Επιλογή φύλλου χάρτη: {}", selected_name));
            ui.separator();

            match catalog.status() {
                CatalogStatus::Pending => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label("Φόρτωση φύλλων χάρτη…");
                    });
                }
                CatalogStatus::Failed => {
                    ui.colored_label(
                        egui::Color32::RED,
                        "Η φόρτωση του ευρετηρίου φύλλων απέτυχε.",
                    );
                }
                CatalogStatus::Loaded => {
                    let sheets = catalog.sorted();
                    let row_height = ui.text_style_height(&egui::TextStyle::Body)
                        + ui.style().spacing.item_spacing.y;

                    TableBuilder::new(ui)
                        .striped(true)
                        .sense(egui::Sense::click())
                        .max_scroll_height(280.0)
                        .column(Column::auto().at_least(60.0))
                        .column(Column::remainder())
                        .header(row_height, |mut header| {
                            header.col(|ui| {
                                ui.strong("Id");
                            });
                            header.col(|ui| {
                                ui.strong("Φύλλο");
                            });
                        })
                        .body(|body| {
                            body.rows(row_height, sheets.len(), |mut row| {
                                let sheet = sheets[row.index()];
                                row.set_selected(session.selected == Some(sheet.id));
                                row.col(|ui| {
                                    ui.label(sheet.id.to_string());
                                });
                                row.col(|ui| {
                                    ui.label(&sheet.name);
                                });
                                if row.response().clicked() {
                                    session.selected = Some(sheet.id);
                                }
                            });
                        });
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Καθαρισμός").clicked() {
                    session.selected = None;
                }
                if ui.button("OK").clicked() {
                    close_requested = true;
                }
            });
        });

    if !is_window_open || close_requested {
        picker_closed.write(PickerClosed);
    }
}
