// src/main.rs

#![cfg_attr(all(not(debug_assertions), target_os = "windows"), windows_subsystem = "windows")]

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use std::time::Duration;

use bevy_egui::EguiPlugin;
use bevy_tokio_tasks::TokioTasksPlugin;
use clap::Parser;

mod cli;
mod search;
mod settings;
mod transform;
mod ui;

use cli::CliArgs;
use transform::TransformPlugin;
use ui::FormUiPlugin;

fn main() {
    dotenvy::dotenv().ok();
    let args = CliArgs::parse();
    let app_settings = settings::io::resolve_settings(&args);

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .insert_resource(app_settings)
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Hattdesk: Μετασχηματισμός συντεταγμένων".into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: args.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(TokioTasksPlugin::default())
        .add_plugins(TransformPlugin)
        .add_plugins(FormUiPlugin)
        .run();
}
