// src/transform/systems/catalog.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::search::SheetSearchIndex;
use crate::settings::AppSettings;
use crate::transform::definitions::Sheet;
use crate::transform::error::TransformError;
use crate::transform::events::{SheetIndexLoaded, TransformFeedback};
use crate::transform::resources::{HattSelections, PickerState, SheetCatalog};

/// Spawns the one-shot sheet-index fetch at startup. The completion (or
/// failure) comes back as a single `SheetIndexLoaded` event on the main
/// thread; there is no retry.
pub fn spawn_sheet_index_fetch(settings: Res<AppSettings>, runtime: Res<TokioTasksRuntime>) {
    let url = settings.endpoints.sheet_index_url.clone();
    info!("Fetching sheet index from {}", url);

    runtime.spawn_background_task(move |mut ctx| async move {
        let result = fetch_sheet_index(&url).await.map_err(|e| e.to_string());

        ctx.run_on_main_thread(move |ctx| {
            ctx.world.send_event(SheetIndexLoaded { result });
        })
        .await;
    });
}

async fn fetch_sheet_index(url: &str) -> Result<Vec<Sheet>, TransformError> {
    let response = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| TransformError::IndexFetch(e.to_string()))?;
    response
        .json::<Vec<Sheet>>()
        .await
        .map_err(|e| TransformError::IndexDecode(e.to_string()))
}

/// Populates the catalog and the search index once the fetch completes, and
/// lets an open picker session apply its deferred pre-selection. A
/// completion arriving with no live session is simply dropped by
/// `apply_catalog_loaded`.
pub fn handle_sheet_index_loaded(
    mut events: EventReader<SheetIndexLoaded>,
    mut catalog: ResMut<SheetCatalog>,
    mut picker: ResMut<PickerState>,
    selections: Res<HattSelections>,
    mut search: ResMut<SheetSearchIndex>,
    mut feedback_writer: EventWriter<TransformFeedback>,
) {
    for event in events.read() {
        match &event.result {
            Ok(sheets) => {
                info!("Sheet index loaded: {} sheets.", sheets.len());
                *search = SheetSearchIndex::build(sheets);
                catalog.populate(sheets.clone());
                picker.apply_catalog_loaded(&selections);
            }
            Err(message) => {
                error!("Sheet index load failed: {}", message);
                catalog.mark_failed();
                feedback_writer.write(TransformFeedback {
                    message: message.clone(),
                    is_error: true,
                });
            }
        }
    }
}
