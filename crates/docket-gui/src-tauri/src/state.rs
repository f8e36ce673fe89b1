use std::path::PathBuf;

use anyhow::Context;
use docket_core::config::Config;
use docket_core::host::{self, Host};
use docket_core::store::Store;
use docket_core::task::Task;
use parking_lot::Mutex;
use tracing::instrument;

/// Everything the command surface needs, handed to Tauri's `manage` once at
/// startup and passed back into each command as explicit state.
pub struct AppState {
    store: Mutex<Store>,
    host: Box<dyn Host>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let store = Store::open(&data_dir)
            .with_context(|| format!("failed to open store at {}", data_dir.display()))?;

        Ok(Self {
            store: Mutex::new(store),
            host: host::native(),
        })
    }

    pub fn os(&self) -> &'static str {
        self.host.os()
    }

    #[instrument(skip(self))]
    pub fn select_app_file(&self) -> anyhow::Result<String> {
        let picked = self.host.pick_app_file()?;
        Ok(picked
            .map(|path| path.to_string_lossy().into_owned())
            .unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub fn load_settings(&self) -> Config {
        self.store.lock().load_settings()
    }

    #[instrument(skip(self, config))]
    pub fn save_settings(&self, config: &Config) -> anyhow::Result<()> {
        self.store.lock().save_settings(config)
    }

    #[instrument(skip(self))]
    pub fn load_tasks(&self) -> Vec<Task> {
        self.store.lock().load_tasks()
    }

    #[instrument(skip(self, tasks))]
    pub fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        self.store.lock().save_tasks(tasks)
    }

    #[instrument(skip(self))]
    pub fn open_browser(&self, url: &str) -> anyhow::Result<()> {
        self.host.open_url(url)
    }

    #[instrument(skip(self, message))]
    pub fn send_notification(&self, title: &str, message: &str) -> anyhow::Result<()> {
        self.host.notify(title, message)
    }
}

/// The store lives in the process working directory; `DOCKET_DATA` overrides
/// it for tests and scratch profiles.
fn resolve_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("DOCKET_DATA") {
        return PathBuf::from(path);
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
