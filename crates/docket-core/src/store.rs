use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::task::Task;

const SETTINGS_FILE: &str = "config.json";
const TASKS_FILE: &str = "tasks.json";

/// File-backed store for the settings record and the task list. Single
/// writer assumed; callers wanting concurrent access wrap it in a mutex.
#[derive(Debug)]
pub struct Store {
    pub dir: PathBuf,
    pub settings_path: PathBuf,
    pub tasks_path: PathBuf,
}

impl Store {
    #[tracing::instrument(skip(dir))]
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        let dir = dir.to_path_buf();
        fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;

        let settings_path = dir.join(SETTINGS_FILE);
        let tasks_path = dir.join(TASKS_FILE);

        info!(
            dir = %dir.display(),
            settings = %settings_path.display(),
            tasks = %tasks_path.display(),
            "opened store"
        );

        Ok(Self {
            dir,
            settings_path,
            tasks_path,
        })
    }

    /// Read failure and parse failure both fall back to the built-in default
    /// record. The default is returned, not written back; a later save is
    /// what persists it.
    #[tracing::instrument(skip(self))]
    pub fn load_settings(&self) -> Config {
        match load_json::<Config>(&self.settings_path) {
            Ok(config) => config,
            Err(err) => {
                warn!(
                    file = %self.settings_path.display(),
                    error = %err,
                    "falling back to default settings"
                );
                Config::default()
            }
        }
    }

    #[tracing::instrument(skip(self, config))]
    pub fn save_settings(&self, config: &Config) -> anyhow::Result<()> {
        save_json_atomic(&self.settings_path, config).context("failed to save config.json")
    }

    /// Same defaulting policy as settings: any failure yields an empty list.
    #[tracing::instrument(skip(self))]
    pub fn load_tasks(&self) -> Vec<Task> {
        match load_json::<Vec<Task>>(&self.tasks_path) {
            Ok(tasks) => tasks,
            Err(err) => {
                warn!(
                    file = %self.tasks_path.display(),
                    error = %err,
                    "falling back to empty task list"
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the whole file; the caller owns ordering and ids.
    #[tracing::instrument(skip(self, tasks))]
    pub fn save_tasks(&self, tasks: &[Task]) -> anyhow::Result<()> {
        save_json_atomic(&self.tasks_path, tasks).context("failed to save tasks.json")
    }
}

#[tracing::instrument(skip(path))]
fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    debug!(file = %path.display(), "loading json");
    let raw =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

#[tracing::instrument(skip(path, value))]
fn save_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    let serialized = serde_json::to_string_pretty(value)?;
    debug!(file = %path.display(), bytes = serialized.len(), "saving json atomically");

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    writeln!(temp, "{serialized}")?;
    temp.flush()?;

    temp.persist(path)
        .map_err(|err| anyhow!("failed to persist {}: {}", path.display(), err))?;

    Ok(())
}
