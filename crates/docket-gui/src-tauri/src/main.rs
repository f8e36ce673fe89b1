mod commands;
mod state;

use anyhow::Context;
use tracing::{error, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info,docket_gui_tauri=debug,docket_core=debug"))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_line_number(true))
        .try_init();
}

fn main() {
    init_tracing();

    info!("starting docket shell backend");

    let state = match state::AppState::new().context("failed to initialize app state") {
        Ok(state) => state,
        Err(err) => {
            error!(error = %err, "initialization failed");
            std::process::exit(1);
        }
    };

    tauri::Builder::default()
        .manage(state)
        .invoke_handler(tauri::generate_handler![
            commands::greet,
            commands::get_os,
            commands::select_app_file,
            commands::settings_load,
            commands::settings_save,
            commands::tasks_load,
            commands::tasks_save,
            commands::open_browser,
            commands::send_notification,
        ])
        .run(tauri::generate_context!())
        .expect("error while running docket shell backend");
}
