// src/ui/elements/hatt_group.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::search::SheetSearchIndex;
use crate::transform::definitions::Side;
use crate::transform::events::{PickerOpened, SheetChosen};

const MAX_SUGGESTIONS: usize = 8;

/// One hatt-selection group: a search box with autocomplete suggestions
/// plus the button opening the map picker. Events carry the group's side,
/// so several groups coexist independently on the same form.
pub fn hatt_group(
    ui: &mut egui::Ui,
    side: Side,
    heading: &str,
    query: &mut String,
    search: &SheetSearchIndex,
    sheet_chosen: &mut EventWriter<SheetChosen>,
    picker_opened: &mut EventWriter<PickerOpened>,
) {
    ui.horizontal(|ui| {
        ui.label(heading);

        let edit_id = egui::Id::new(("hatt-name", side));
        let popup_id = egui::Id::new(("hatt-suggestions", side));
        let response = ui.add(
            egui::TextEdit::singleline(query)
                .id(edit_id)
                .desired_width(220.0)
                .hint_text("Όνομα φύλλου χάρτη"),
        );
        if response.changed() && !query.trim().is_empty() {
            ui.ctx().memory_mut(|mem| mem.open_popup(popup_id));
        }

        egui::containers::popup::popup_below_widget(
            ui,
            popup_id,
            &response,
            egui::containers::popup::PopupCloseBehavior::CloseOnClickOutside,
            |popup_ui| {
                popup_ui.set_min_width(220.0);
                let hits = search.query(query, MAX_SUGGESTIONS);
                if hits.is_empty() {
                    popup_ui.weak("Καμία αντιστοιχία");
                    return;
                }
                let mut picked: Option<(crate::transform::definitions::SheetId, String)> = None;
                for (id, name) in hits {
                    if popup_ui.selectable_label(false, name).clicked() {
                        picked = Some((id, name.to_string()));
                    }
                }
                if let Some((id, name)) = picked {
                    sheet_chosen.write(SheetChosen {
                        side,
                        id,
                        name: name.clone(),
                    });
                    *query = name;
                    popup_ui.memory_mut(|mem| mem.close_popup());
                }
            },
        );

        if ui.button("Χάρτης…").clicked() {
            picker_opened.write(PickerOpened { side });
        }
    });
}
