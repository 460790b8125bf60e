// src/transform/systems/submit.rs
use bevy::prelude::*;
use bevy_tokio_tasks::TokioTasksRuntime;

use crate::settings::AppSettings;
use crate::transform::definitions::{
    FieldVisibility, InputFormat, SridConfig, DELIMITED_FIELD_CODES, SELECT_SHEET_MESSAGE,
};
use crate::transform::error::TransformError;
use crate::transform::events::{TransformCompleted, TransformRequested};
use crate::transform::resources::{
    HattSelections, InputFormatChoice, SridSelection, SubmissionDraft, VisibilityState,
};

/// Checks that every HATT side has a sheet selected. Pure; the caller
/// decides what to do with the fixed message.
pub fn validate_submission(
    cfg: &SridConfig,
    srids: &SridSelection,
    selections: &HattSelections,
) -> Result<(), &'static str> {
    if (cfg.is_hatt(srids.from) && selections.source.is_none())
        || (cfg.is_hatt(srids.to) && selections.target.is_none())
    {
        return Err(SELECT_SHEET_MESSAGE);
    }
    Ok(())
}

/// Assembles the plain form fields for one submission. Hidden (disabled)
/// sections contribute nothing.
pub fn build_form_fields(
    srids: &SridSelection,
    format: InputFormat,
    visibility: &FieldVisibility,
    selections: &HattSelections,
    field_order: usize,
) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("from_srid", srids.from.to_string()),
        ("to_srid", srids.to.to_string()),
        ("input_type", format.wire_code().to_string()),
    ];
    if visibility.source_hatt {
        fields.push(("from_hatt_id", selections.source.id().to_string()));
    }
    if visibility.target_hatt {
        fields.push(("to_hatt_id", selections.target.id().to_string()));
    }
    if visibility.delimited_options {
        let code = DELIMITED_FIELD_CODES
            .get(field_order)
            .copied()
            .unwrap_or(DELIMITED_FIELD_CODES[0]);
        fields.push(("csv_fields", code.to_string()));
    }
    fields
}

/// Handles a transform request: validate, then fire exactly one multipart
/// POST. The response body comes back verbatim as a `TransformCompleted`
/// event, success and failure alike.
pub fn handle_transform_requested(
    mut events: EventReader<TransformRequested>,
    settings: Res<AppSettings>,
    srids: Res<SridSelection>,
    format: Res<InputFormatChoice>,
    visibility: Res<VisibilityState>,
    selections: Res<HattSelections>,
    mut draft: ResMut<SubmissionDraft>,
    runtime: Res<TokioTasksRuntime>,
    mut completed_writer: EventWriter<TransformCompleted>,
) {
    for _ in events.read() {
        if draft.in_flight {
            warn!("Transform requested while a request is outstanding; ignoring.");
            continue;
        }

        if let Err(message) = validate_submission(&settings.srids, &srids, &selections) {
            completed_writer.write(TransformCompleted {
                output: message.to_string(),
                is_error: true,
            });
            continue;
        }

        let fields = build_form_fields(
            &srids,
            format.0,
            &visibility.fields,
            &selections,
            draft.field_order,
        );
        let url = settings.endpoints.transform_url.clone();
        let payload = draft.payload.clone();
        draft.in_flight = true;
        info!("Submitting transform request to {}", url);

        runtime.spawn_background_task(move |mut ctx| async move {
            let (output, is_error) = post_transform(url, fields, payload).await;

            ctx.run_on_main_thread(move |ctx| {
                ctx.world.send_event(TransformCompleted { output, is_error });
            })
            .await;
        });
    }
}

/// One multipart POST: every enabled form field plus the free-text payload
/// as a `text/plain; charset=utf-8` part named `input`. The body is
/// returned unmodified either way.
async fn post_transform(
    url: String,
    fields: Vec<(&'static str, String)>,
    payload: String,
) -> (String, bool) {
    let mut form = reqwest::multipart::Form::new();
    for (name, value) in fields {
        form = form.text(name, value);
    }
    let part = match reqwest::multipart::Part::bytes(payload.into_bytes())
        .mime_str("text/plain; charset=utf-8")
    {
        Ok(part) => part,
        Err(e) => return (TransformError::Transport(e.to_string()).to_string(), true),
    };
    form = form.part("input", part);

    let client = reqwest::Client::new();
    match client.post(&url).multipart(form).send().await {
        Ok(response) => {
            let is_error = !response.status().is_success();
            match response.text().await {
                Ok(body) => (body, is_error),
                Err(e) => (TransformError::Transport(e.to_string()).to_string(), true),
            }
        }
        Err(e) => (TransformError::Transport(e.to_string()).to_string(), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::definitions::{SheetId, SridId};

    fn cfg() -> SridConfig {
        SridConfig::default()
    }

    fn hatt_both() -> SridSelection {
        SridSelection {
            from: SridId(1_000_000),
            to: SridId(1_000_000),
        }
    }

    #[test]
    fn test_validate_rejects_missing_source_sheet() {
        let srids = SridSelection {
            from: SridId(1_000_000),
            to: SridId(4326),
        };
        let selections = HattSelections::default();
        assert_eq!(
            validate_submission(&cfg(), &srids, &selections),
            Err(SELECT_SHEET_MESSAGE)
        );
    }

    #[test]
    fn test_validate_rejects_missing_target_sheet() {
        let srids = SridSelection {
            from: SridId(4326),
            to: SridId(1_000_000),
        };
        let selections = HattSelections::default();
        assert_eq!(
            validate_submission(&cfg(), &srids, &selections),
            Err(SELECT_SHEET_MESSAGE)
        );
    }

    #[test]
    fn test_validate_passes_with_sheets_chosen() {
        let srids = hatt_both();
        let mut selections = HattSelections::default();
        selections.source.select(SheetId(3), "Αθήναι");
        selections.target.select(SheetId(4), "Θήβαι");
        assert!(validate_submission(&cfg(), &srids, &selections).is_ok());
    }

    #[test]
    fn test_validate_ignores_non_hatt_sides() {
        let srids = SridSelection {
            from: SridId(2100),
            to: SridId(4326),
        };
        let selections = HattSelections::default();
        assert!(validate_submission(&cfg(), &srids, &selections).is_ok());
    }

    #[test]
    fn test_hidden_sections_are_not_submitted() {
        let srids = SridSelection {
            from: SridId(2100),
            to: SridId(4326),
        };
        let visibility = FieldVisibility {
            source_hatt: false,
            target_hatt: false,
            delimited_options: false,
        };
        let fields = build_form_fields(
            &srids,
            InputFormat::Structured,
            &visibility,
            &HattSelections::default(),
            0,
        );
        let names: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, vec!["from_srid", "to_srid", "input_type"]);
    }

    #[test]
    fn test_visible_sections_are_submitted() {
        let srids = hatt_both();
        let visibility = FieldVisibility {
            source_hatt: true,
            target_hatt: true,
            delimited_options: true,
        };
        let mut selections = HattSelections::default();
        selections.source.select(SheetId(3), "Αθήναι");
        let fields = build_form_fields(&srids, InputFormat::Delimited, &visibility, &selections, 2);
        assert!(fields.contains(&("from_hatt_id", "3".to_string())));
        assert!(fields.contains(&("to_hatt_id", "-1".to_string())));
        assert!(fields.contains(&("csv_fields", "id_xy".to_string())));
        assert!(fields.contains(&("input_type", "csv".to_string())));
    }

    #[test]
    fn test_out_of_range_field_order_falls_back() {
        let srids = hatt_both();
        let visibility = FieldVisibility {
            source_hatt: false,
            target_hatt: false,
            delimited_options: true,
        };
        let fields = build_form_fields(
            &srids,
            InputFormat::Delimited,
            &visibility,
            &HattSelections::default(),
            99,
        );
        assert!(fields.contains(&("csv_fields", "xy".to_string())));
    }
}
