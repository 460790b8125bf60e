// src/transform/resources.rs
use bevy::prelude::*;
use std::collections::HashMap;

use super::definitions::{FieldVisibility, InputFormat, Sheet, SheetId, Side, SridId};

/// Load status of the sheet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    /// Fetch spawned, completion event not yet seen.
    #[default]
    Pending,
    Loaded,
    Failed,
}

/// The prefetched sheet index, keyed by id. Lookup is usable before the
/// load completes and simply finds nothing.
#[derive(Resource, Debug, Default)]
pub struct SheetCatalog {
    sheets: HashMap<SheetId, Sheet>,
    status: CatalogStatus,
}

impl SheetCatalog {
    pub fn status(&self) -> CatalogStatus {
        self.status
    }

    pub fn is_loaded(&self) -> bool {
        self.status == CatalogStatus::Loaded
    }

    pub fn get(&self, id: SheetId) -> Option<&Sheet> {
        self.sheets.get(&id)
    }

    /// Sheets in display order (by name).
    pub fn sorted(&self) -> Vec<&Sheet> {
        let mut all: Vec<&Sheet> = self.sheets.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn populate(&mut self, sheets: Vec<Sheet>) {
        self.sheets = sheets.into_iter().map(|s| (s.id, s)).collect();
        self.status = CatalogStatus::Loaded;
    }

    pub fn mark_failed(&mut self) {
        self.status = CatalogStatus::Failed;
    }
}

/// The single source of truth for "which sheet is chosen" in one hatt
/// form group. Invariant: `id` is the NONE sentinel exactly when `name`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    id: SheetId,
    name: String,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            id: SheetId::NONE,
            name: String::new(),
        }
    }
}

impl SelectionState {
    pub fn id(&self) -> SheetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_none(&self) -> bool {
        self.id.is_none()
    }

    /// Sets both fields. Selecting the NONE sentinel is a no-op.
    pub fn select(&mut self, id: SheetId, name: &str) {
        if id.is_none() {
            return;
        }
        self.id = id;
        self.name = name.to_string();
    }

    pub fn clear(&mut self) {
        self.id = SheetId::NONE;
        self.name.clear();
    }
}

/// One `SelectionState` per hatt-selection group on the form.
#[derive(Resource, Debug, Default)]
pub struct HattSelections {
    pub source: SelectionState,
    pub target: SelectionState,
}

impl HattSelections {
    pub fn get(&self, side: Side) -> &SelectionState {
        match side {
            Side::Source => &self.source,
            Side::Target => &self.target,
        }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut SelectionState {
        match side {
            Side::Source => &mut self.source,
            Side::Target => &mut self.target,
        }
    }
}

/// Currently chosen SRIDs of the two dropdowns.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SridSelection {
    pub from: SridId,
    pub to: SridId,
}

impl Default for SridSelection {
    fn default() -> Self {
        // Overwritten at startup with the configured hatt SRID.
        Self {
            from: SridId(0),
            to: SridId(0),
        }
    }
}

/// Currently chosen payload shape.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputFormatChoice(pub InputFormat);

/// What the user is about to submit: the free-text payload, the delimited
/// column-order choice (index into the code/label tables) and whether a
/// request is currently outstanding.
#[derive(Resource, Debug, Default)]
pub struct SubmissionDraft {
    pub payload: String,
    pub field_order: usize,
    pub in_flight: bool,
}

/// One open picker dialog. Created on open, dropped on close; a sheet-index
/// completion that finds no session (or a different one) is stale and must
/// be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickerSession {
    pub side: Side,
    pub token: u64,
    /// The dialog's single-selection set: at most one sheet.
    pub selected: Option<SheetId>,
    /// Set when the dialog opened before the catalog finished loading;
    /// consumed exactly once by the load completion.
    pub deferred_preselect: bool,
}

/// Dialog session holder. The token counter makes every session distinct
/// so late async completions can be matched against the session that is
/// actually on screen.
#[derive(Resource, Debug, Default)]
pub struct PickerState {
    session: Option<PickerSession>,
    next_token: u64,
}

impl PickerState {
    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PickerSession> {
        self.session.as_mut()
    }

    /// Opens a dialog session for `side`, discarding any prior selection
    /// set. Pre-selects the bound group's sheet when one is chosen; when
    /// the catalog has not loaded yet the pre-selection is deferred to the
    /// load completion.
    pub fn open(&mut self, side: Side, bound: &SelectionState, catalog_loaded: bool) -> u64 {
        self.next_token += 1;
        let mut session = PickerSession {
            side,
            token: self.next_token,
            selected: None,
            deferred_preselect: false,
        };
        if !bound.is_none() {
            if catalog_loaded {
                session.selected = Some(bound.id());
            } else {
                session.deferred_preselect = true;
            }
        }
        self.session = Some(session);
        self.next_token
    }

    /// Applies a deferred pre-selection after the catalog loads. No-op when
    /// no session is open or the open session has none pending, which is
    /// exactly the stale-completion case.
    pub fn apply_catalog_loaded(&mut self, selections: &HattSelections) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.deferred_preselect {
            return;
        }
        session.deferred_preselect = false;
        let bound = selections.get(session.side);
        if !bound.is_none() {
            session.selected = Some(bound.id());
        }
    }

    /// Ends the session, returning it for the close handler to commit.
    pub fn close(&mut self) -> Option<PickerSession> {
        self.session.take()
    }
}

/// Last derived visibility plus the label template currently applicable to
/// the delimited column-order dropdown.
#[derive(Resource, Debug)]
pub struct VisibilityState {
    pub fields: FieldVisibility,
    pub delimited_labels: &'static [&'static str; 8],
}

impl Default for VisibilityState {
    fn default() -> Self {
        Self {
            fields: FieldVisibility::default(),
            delimited_labels: &super::definitions::PLANAR_FIELD_LABELS,
        }
    }
}

impl VisibilityState {
    pub fn hatt_visible(&self, side: Side) -> bool {
        self.fields.hatt_visible(side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(id: i64, name: &str) -> Sheet {
        Sheet {
            id: SheetId(id),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_select_round_trip() {
        let mut sel = SelectionState::default();
        sel.select(SheetId(7), "Αθήναι");
        assert_eq!(sel.id(), SheetId(7));
        assert_eq!(sel.name(), "Αθήναι");
    }

    #[test]
    fn test_select_none_is_noop() {
        let mut sel = SelectionState::default();
        sel.select(SheetId(7), "Αθήναι");
        sel.select(SheetId::NONE, "anything");
        assert_eq!(sel.id(), SheetId(7));
        assert_eq!(sel.name(), "Αθήναι");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut sel = SelectionState::default();
        sel.select(SheetId(7), "Αθήναι");
        sel.clear();
        sel.clear();
        assert!(sel.is_none());
        assert_eq!(sel.name(), "");
    }

    #[test]
    fn test_none_iff_name_empty() {
        let mut sel = SelectionState::default();
        assert!(sel.is_none() == sel.name().is_empty());
        sel.select(SheetId(3), "Σπάρτη");
        assert!(sel.is_none() == sel.name().is_empty());
        sel.clear();
        assert!(sel.is_none() == sel.name().is_empty());
    }

    #[test]
    fn test_catalog_lookup_before_load() {
        let catalog = SheetCatalog::default();
        assert_eq!(catalog.status(), CatalogStatus::Pending);
        assert!(catalog.get(SheetId(1)).is_none());
    }

    #[test]
    fn test_picker_preselect_when_loaded() {
        let mut picker = PickerState::default();
        let mut bound = SelectionState::default();
        bound.select(SheetId(5), "Λαμία");
        picker.open(Side::Source, &bound, true);
        assert_eq!(picker.session().unwrap().selected, Some(SheetId(5)));
        assert!(!picker.session().unwrap().deferred_preselect);
    }

    #[test]
    fn test_picker_defers_before_load() {
        let mut picker = PickerState::default();
        let mut bound = SelectionState::default();
        bound.select(SheetId(5), "Λαμία");
        picker.open(Side::Target, &bound, false);
        assert_eq!(picker.session().unwrap().selected, None);
        assert!(picker.session().unwrap().deferred_preselect);

        let mut selections = HattSelections::default();
        selections.target = bound;
        picker.apply_catalog_loaded(&selections);
        assert_eq!(picker.session().unwrap().selected, Some(SheetId(5)));
        assert!(!picker.session().unwrap().deferred_preselect);
    }

    #[test]
    fn test_stale_load_after_close_is_discarded() {
        let mut picker = PickerState::default();
        let mut bound = SelectionState::default();
        bound.select(SheetId(5), "Λαμία");
        picker.open(Side::Source, &bound, false);
        let closed = picker.close().unwrap();
        assert!(closed.deferred_preselect);

        // Load completes after the dialog has gone away: nothing to apply.
        let mut selections = HattSelections::default();
        selections.source = bound;
        picker.apply_catalog_loaded(&selections);
        assert!(picker.session().is_none());
    }

    #[test]
    fn test_reopen_supersedes_stale_session() {
        let mut picker = PickerState::default();
        let empty = SelectionState::default();
        let first = picker.open(Side::Source, &empty, false);
        let _ = picker.close();
        let second = picker.open(Side::Source, &empty, false);
        assert_ne!(first, second);
        // The open session had nothing selected and nothing deferred, so a
        // late load leaves it untouched.
        picker.apply_catalog_loaded(&HattSelections::default());
        assert_eq!(picker.session().unwrap().selected, None);
    }

    #[test]
    fn test_open_clears_prior_selection() {
        let mut picker = PickerState::default();
        let mut bound = SelectionState::default();
        bound.select(SheetId(9), "Χανιά");
        picker.open(Side::Source, &bound, true);
        picker.session_mut().unwrap().selected = Some(SheetId(1));
        // Re-opening for another group starts from that group's state, not
        // from whatever the dialog showed last.
        picker.open(Side::Target, &SelectionState::default(), true);
        assert_eq!(picker.session().unwrap().selected, None);
    }

    #[test]
    fn test_catalog_sorted_by_name() {
        let mut catalog = SheetCatalog::default();
        catalog.populate(vec![sheet(2, "Βόλος"), sheet(1, "Αθήναι")]);
        let names: Vec<&str> = catalog.sorted().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Αθήναι", "Βόλος"]);
    }
}
