// src/settings/mod.rs
pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};

use crate::transform::definitions::SridConfig;

/// Service endpoints the client talks to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceEndpoints {
    /// Transform endpoint; the form POSTs here.
    pub transform_url: String,
    /// Sheet index endpoint; returns the id/name records of every hatt block.
    pub sheet_index_url: String,
}

impl Default for ServiceEndpoints {
    fn default() -> Self {
        Self {
            transform_url: "http://localhost:8000/transform/".to_string(),
            sheet_index_url: "http://localhost:8000/transform/hattblocks/".to_string(),
        }
    }
}

/// Persisted application settings. The SRID table is data here on purpose:
/// the visibility policy consults it and never bakes ids into logic.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    pub endpoints: ServiceEndpoints,
    pub srids: SridConfig,
}
