//! Tomeo - a tag-organized video library and media player
//! Built with iced, playing through a dedicated media thread

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod database;
mod features;
mod i18n;
mod media;
mod ui;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "tomeo", version, about = "Tag-organized video library and player")]
struct Args {
    /// Media files to add to the playlist
    files: Vec<PathBuf>,

    /// Database file (defaults to tomeo.db in the data directory)
    #[arg(long, value_name = "PATH")]
    database: Option<PathBuf>,
}

fn main() -> iced::Result {
    // Initialize tracing for logging; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tomeo=info")),
        )
        .init();

    let args = Args::parse();
    let options = app::StartupOptions {
        files: args.files,
        database: args.database,
    };

    // Run as a daemon so closing the window goes through RequestClose
    iced::daemon(
        move || app::App::new(options.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .antialiasing(true)
    .run()
}
