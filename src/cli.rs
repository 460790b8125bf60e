// src/cli.rs
use clap::Parser;
use std::path::PathBuf;

/// Desktop client for the hatt coordinate-transformation service.
#[derive(Parser, Debug, Clone)]
#[command(name = "hattdesk", version, about)]
pub struct CliArgs {
    /// Path to a settings file (defaults to the platform config directory).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the transform endpoint URL.
    #[arg(long)]
    pub transform_url: Option<String>,

    /// Override the sheet index endpoint URL.
    #[arg(long)]
    pub sheet_index_url: Option<String>,

    /// Log filter passed to the Bevy log plugin.
    #[arg(long, default_value = "wgpu=error,naga=warn,bevy_tokio_tasks=warn")]
    pub log_filter: String,
}
