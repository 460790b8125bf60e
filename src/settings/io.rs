// src/settings/io.rs
use directories_next::ProjectDirs;
use std::fs;
use std::io::{self, BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use bevy::log::{error, info, warn};

use super::AppSettings;
use crate::cli::CliArgs;

const QUALIFIER: &str = "gr";
const ORGANIZATION: &str = "Hattdesk";
const APPLICATION: &str = "Hattdesk";
const CONFIG_FILE: &str = "settings.json";

fn default_config_path() -> io::Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION) {
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(CONFIG_FILE))
    } else {
        Err(io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine project directories for settings.",
        ))
    }
}

fn load_from_path(config_file: &Path) -> io::Result<AppSettings> {
    info!("Settings: Attempting to load settings from {:?}", config_file);
    match fs::File::open(config_file) {
        Ok(file) => {
            let reader = BufReader::new(file);
            match serde_json::from_reader(reader) {
                Ok(settings) => {
                    info!("Settings: Successfully deserialized settings.");
                    Ok(settings)
                }
                Err(e) => {
                    error!("Settings: Failed to parse settings file {:?}: {}", config_file, e);
                    Err(io::Error::new(
                        ErrorKind::InvalidData,
                        format!("Failed to parse settings file: {}", e),
                    ))
                }
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            info!(
                "Settings: File not found at {:?}. Writing defaults there.",
                config_file
            );
            let defaults = AppSettings::default();
            if let Err(save_err) = save_to_path(config_file, &defaults) {
                warn!("Settings: Could not write default settings: {}", save_err);
            }
            Ok(defaults)
        }
        Err(e) => {
            error!("Settings: Failed to open settings file {:?}: {}", config_file, e);
            Err(e)
        }
    }
}

fn save_to_path(config_file: &Path, settings: &AppSettings) -> io::Result<()> {
    let file = fs::File::create(config_file)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, settings).map_err(|e| {
        error!("Settings: Failed to serialize settings to {:?}: {}", config_file, e);
        io::Error::new(io::ErrorKind::Other, e)
    })?;
    Ok(())
}

/// Resolves the effective settings: file (or defaults), then `HATTDESK_*`
/// environment overrides, then CLI flags.
pub fn resolve_settings(cli: &CliArgs) -> AppSettings {
    let path = match cli.config.clone() {
        Some(path) => path,
        None => match default_config_path() {
            Ok(path) => path,
            Err(e) => {
                warn!("Settings: {}. Using built-in defaults.", e);
                return apply_overrides(AppSettings::default(), cli);
            }
        },
    };

    let settings = load_from_path(&path).unwrap_or_else(|e| {
        warn!("Settings: Falling back to built-in defaults: {}", e);
        AppSettings::default()
    });
    apply_overrides(settings, cli)
}

fn apply_overrides(mut settings: AppSettings, cli: &CliArgs) -> AppSettings {
    if let Ok(url) = std::env::var("HATTDESK_TRANSFORM_URL") {
        settings.endpoints.transform_url = url;
    }
    if let Ok(url) = std::env::var("HATTDESK_SHEET_INDEX_URL") {
        settings.endpoints.sheet_index_url = url;
    }
    if let Some(url) = &cli.transform_url {
        settings.endpoints.transform_url = url.clone();
    }
    if let Some(url) = &cli.sheet_index_url {
        settings.endpoints.sheet_index_url = url.clone();
    }
    settings
}
