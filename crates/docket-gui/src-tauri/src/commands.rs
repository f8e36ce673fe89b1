use docket_core::config::Config;
use docket_core::task::Task;
use tauri::State;
use tracing::instrument;

use crate::state::AppState;

fn err_to_string(err: anyhow::Error) -> String {
    err.to_string()
}

#[tauri::command]
#[instrument]
pub fn greet(name: String) -> String {
    docket_core::greeting(&name)
}

#[tauri::command]
#[instrument(skip(state))]
pub fn get_os(state: State<'_, AppState>) -> String {
    state.os().to_string()
}

/// Blocks on the native picker, so it runs as an async command off the main
/// thread. Cancellation resolves to an empty string.
#[tauri::command]
#[instrument(skip(state))]
pub async fn select_app_file(state: State<'_, AppState>) -> Result<String, String> {
    state.select_app_file().map_err(err_to_string)
}

/// Never rejects: load failures collapse into the default record.
#[tauri::command]
#[instrument(skip(state))]
pub async fn settings_load(state: State<'_, AppState>) -> Result<Config, String> {
    Ok(state.load_settings())
}

#[tauri::command]
#[instrument(skip(state, config), fields(urls = config.auto_open_urls.len(), apps = config.allowed_apps.len()))]
pub async fn settings_save(state: State<'_, AppState>, config: Config) -> Result<(), String> {
    state.save_settings(&config).map_err(err_to_string)
}

/// Never rejects: load failures collapse into an empty list.
#[tauri::command]
#[instrument(skip(state))]
pub async fn tasks_load(state: State<'_, AppState>) -> Result<Vec<Task>, String> {
    Ok(state.load_tasks())
}

#[tauri::command]
#[instrument(skip(state, tasks), fields(count = tasks.len()))]
pub async fn tasks_save(state: State<'_, AppState>, tasks: Vec<Task>) -> Result<(), String> {
    state.save_tasks(&tasks).map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state))]
pub async fn open_browser(state: State<'_, AppState>, url: String) -> Result<(), String> {
    state.open_browser(&url).map_err(err_to_string)
}

#[tauri::command]
#[instrument(skip(state, message))]
pub async fn send_notification(
    state: State<'_, AppState>,
    title: String,
    message: String,
) -> Result<(), String> {
    state.send_notification(&title, &message).map_err(err_to_string)
}
