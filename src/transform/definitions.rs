// src/transform/definitions.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel meaning "no sheet selected". Mirrors the wire value the
/// transform service expects for an absent hatt id.
pub const NOT_SELECTED_ID: i64 = -1;

/// Shared show/hide animation length for every visibility-coupled widget.
pub const ANIM_SECS: f32 = 0.3;

/// Fixed message shown when a HATT side is submitted without a sheet.
pub const SELECT_SHEET_MESSAGE: &str = "Παρακαλώ επιλέξτε φύλλο χάρτη HATT.";

/// Identifier of a hatt block (map sheet) as issued by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SheetId(pub i64);

impl SheetId {
    pub const NONE: SheetId = SheetId(NOT_SELECTED_ID);

    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named hatt block. The geometry itself stays with the map service;
/// the client only ever handles the id and the display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sheet {
    pub id: SheetId,
    pub name: String,
}

/// Spatial reference system identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SridId(pub i64);

impl fmt::Display for SridId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable entry of the SRID dropdowns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SridEntry {
    pub id: SridId,
    pub label: String,
}

/// SRID classification table. Supplied by configuration, never hardcoded
/// into the policy logic: the classifying sets drive visibility only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SridConfig {
    /// The distinguished hatt SRID.
    pub hatt: SridId,
    /// Systems that are ambiguous without a sheet reference.
    pub legacy_greek: Vec<SridId>,
    /// Systems expressed in angular (λ/φ) rather than planar units.
    pub geodetic: Vec<SridId>,
    /// Dropdown contents, in display order.
    pub menu: Vec<SridEntry>,
}

impl SridConfig {
    pub fn is_hatt(&self, srid: SridId) -> bool {
        srid == self.hatt
    }

    pub fn is_legacy_greek(&self, srid: SridId) -> bool {
        self.legacy_greek.contains(&srid)
    }

    pub fn is_geodetic(&self, srid: SridId) -> bool {
        self.geodetic.contains(&srid)
    }
}

impl Default for SridConfig {
    fn default() -> Self {
        let entry = |id: i64, label: &str| SridEntry {
            id: SridId(id),
            label: label.to_string(),
        };
        Self {
            hatt: SridId(1_000_000),
            legacy_greek: [1_000_000, 1_000_001, 1_000_002, 1_000_003, 4815]
                .iter()
                .copied()
                .map(SridId)
                .collect(),
            geodetic: [4121, 4815, 4326, 4230, 1_000_004]
                .iter()
                .copied()
                .map(SridId)
                .collect(),
            menu: vec![
                entry(1_000_000, "Παλαιό Ελληνικό (Hatt)"),
                entry(1_000_001, "Παλαιό Ελληνικό (TM3 Δυτική ζώνη)"),
                entry(1_000_002, "Παλαιό Ελληνικό (TM3 Κεντρική ζώνη)"),
                entry(1_000_003, "Παλαιό Ελληνικό (TM3 Ανατολική ζώνη)"),
                entry(4815, "Παλαιό Ελληνικό (γεωδαιτικές)"),
                entry(2100, "ΕΓΣΑ87 (TM87)"),
                entry(4121, "ΕΓΣΑ87 (γεωδαιτικές)"),
                entry(4326, "WGS84"),
                entry(4230, "ED50"),
                entry(1_000_004, "ED50 (γεωδαιτικές)"),
            ],
        }
    }
}

/// Which hatt-selection form group a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Source,
    Target,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// Shape of the coordinate payload the user supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InputFormat {
    /// Delimited text, one point per line.
    #[default]
    Delimited,
    /// Structured shape data handled opaquely by the service.
    Structured,
}

impl InputFormat {
    /// Value submitted under the `input_type` form field.
    pub fn wire_code(self) -> &'static str {
        match self {
            InputFormat::Delimited => "csv",
            InputFormat::Structured => "geojson",
        }
    }
}

/// Derived visibility of the conditional form sections. Always recomputed
/// from scratch on every change event; never toggled incrementally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldVisibility {
    pub source_hatt: bool,
    pub target_hatt: bool,
    pub delimited_options: bool,
}

impl FieldVisibility {
    /// A side's hatt selector is shown when that side IS the hatt system,
    /// or when it is the legacy end of a legacy↔non-legacy transformation
    /// (a legacy system needs a sheet to be interpreted unambiguously;
    /// legacy-to-legacy is exempt).
    pub fn derive(cfg: &SridConfig, from: SridId, to: SridId, format: InputFormat) -> Self {
        let from_legacy = cfg.is_legacy_greek(from);
        let to_legacy = cfg.is_legacy_greek(to);
        Self {
            source_hatt: cfg.is_hatt(from) || (from_legacy && !to_legacy),
            target_hatt: cfg.is_hatt(to) || (!from_legacy && to_legacy),
            delimited_options: format == InputFormat::Delimited,
        }
    }

    pub fn hatt_visible(&self, side: Side) -> bool {
        match side {
            Side::Source => self.source_hatt,
            Side::Target => self.target_hatt,
        }
    }
}

/// Column-order labels for the delimited-text options, angular flavour.
pub(crate) const GEODETIC_FIELD_LABELS: [&str; 8] = [
    "λ, φ",
    "λ, φ, h",
    "id, λ, φ",
    "id, λ, φ, h",
    "φ, λ",
    "φ, λ, h",
    "id, φ, λ",
    "id, φ, λ, h",
];

/// Column-order labels for the delimited-text options, planar flavour.
pub(crate) const PLANAR_FIELD_LABELS: [&str; 8] = [
    "Ε, Ν",
    "Ε, Ν, h",
    "id, Ε, Ν",
    "id, Ε, Ν, h",
    "N, E",
    "N, E, h",
    "id, N, E",
    "id, N, E, h",
];

/// Stable wire codes for the eight delimited column orders, submitted under
/// the `csv_fields` form field. Labels above are presentational only.
pub const DELIMITED_FIELD_CODES: [&str; 8] = [
    "xy", "xyz", "id_xy", "id_xyz", "yx", "yxz", "id_yx", "id_yxz",
];

/// Picks the label template for the delimited column-order dropdown based
/// on whether the source SRID is angular or planar.
pub fn delimited_field_labels(cfg: &SridConfig, from: SridId) -> &'static [&'static str; 8] {
    if cfg.is_geodetic(from) {
        &GEODETIC_FIELD_LABELS
    } else {
        &PLANAR_FIELD_LABELS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_id_sentinel() {
        assert!(SheetId::NONE.is_none());
        assert!(SheetId(-1).is_none());
        assert!(!SheetId(42).is_none());
    }

    #[test]
    fn test_hatt_side_visible_when_hatt_selected() {
        let cfg = SridConfig::default();
        let vis = FieldVisibility::derive(&cfg, SridId(1_000_000), SridId(4326), InputFormat::Delimited);
        assert!(vis.source_hatt);
        assert!(!vis.target_hatt);
    }

    #[test]
    fn test_legacy_to_modern_needs_source_sheet() {
        let cfg = SridConfig::default();
        let vis = FieldVisibility::derive(&cfg, SridId(1_000_001), SridId(4326), InputFormat::Delimited);
        assert!(vis.source_hatt);
        assert!(!vis.target_hatt);
    }

    #[test]
    fn test_modern_to_legacy_needs_target_sheet() {
        let cfg = SridConfig::default();
        let vis = FieldVisibility::derive(&cfg, SridId(2100), SridId(1_000_002), InputFormat::Delimited);
        assert!(!vis.source_hatt);
        assert!(vis.target_hatt);
    }

    #[test]
    fn test_legacy_to_legacy_exempt() {
        let cfg = SridConfig::default();
        let vis = FieldVisibility::derive(&cfg, SridId(1_000_001), SridId(1_000_002), InputFormat::Delimited);
        assert!(!vis.source_hatt);
        assert!(!vis.target_hatt);
    }

    #[test]
    fn test_delimited_options_follow_format() {
        let cfg = SridConfig::default();
        let delimited =
            FieldVisibility::derive(&cfg, SridId(2100), SridId(4326), InputFormat::Delimited);
        let structured =
            FieldVisibility::derive(&cfg, SridId(2100), SridId(4326), InputFormat::Structured);
        assert!(delimited.delimited_options);
        assert!(!structured.delimited_options);
    }

    #[test]
    fn test_field_labels_by_source_class() {
        let cfg = SridConfig::default();
        assert_eq!(delimited_field_labels(&cfg, SridId(4326))[0], "λ, φ");
        assert_eq!(delimited_field_labels(&cfg, SridId(2100))[0], "Ε, Ν");
        // 4815 is both legacy and geodetic; the label choice only looks at
        // the geodetic set.
        assert_eq!(delimited_field_labels(&cfg, SridId(4815))[0], "λ, φ");
    }

    #[test]
    fn test_label_and_code_tables_line_up() {
        assert_eq!(GEODETIC_FIELD_LABELS.len(), DELIMITED_FIELD_CODES.len());
        assert_eq!(PLANAR_FIELD_LABELS.len(), DELIMITED_FIELD_CODES.len());
    }

    /// Pins the policy over every configured SRID pair against its truth
    /// table: a side shows its hatt selector when it is the hatt system
    /// itself, or when it is the legacy end of a mixed legacy/non-legacy
    /// pair. Legacy-to-legacy deliberately shows neither.
    #[test]
    fn test_visibility_matrix_exhaustive() {
        let cfg = SridConfig::default();
        for from_entry in &cfg.menu {
            for to_entry in &cfg.menu {
                let from = from_entry.id;
                let to = to_entry.id;
                let vis = FieldVisibility::derive(&cfg, from, to, InputFormat::Delimited);

                let expected_source = match (cfg.is_legacy_greek(from), cfg.is_legacy_greek(to)) {
                    (true, false) => true,
                    _ => cfg.is_hatt(from),
                };
                let expected_target = match (cfg.is_legacy_greek(from), cfg.is_legacy_greek(to)) {
                    (false, true) => true,
                    _ => cfg.is_hatt(to),
                };
                assert_eq!(
                    vis.source_hatt, expected_source,
                    "source visibility for from={} to={}",
                    from, to
                );
                assert_eq!(
                    vis.target_hatt, expected_target,
                    "target visibility for from={} to={}",
                    from, to
                );

                // Deterministic: deriving twice from the same inputs agrees.
                assert_eq!(
                    vis,
                    FieldVisibility::derive(&cfg, from, to, InputFormat::Delimited)
                );
            }
        }
    }
}
