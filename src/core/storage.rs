use std::env;
use std::path::{Path, PathBuf};

use super::config::Config;
use super::logging;
use super::persist::{FileBackend, JsonAdapter};
use super::utils::ensure_dir;
use crate::api::PromptStore;

/// Directory name used under `$HOME` when no data directory is given.
pub const DEFAULT_DIR_NAME: &str = ".prompt-manager";

/// Runtime context holding paths, configuration and the open store.
pub struct AppCtx {
    pub base_dir: PathBuf,
    pub data_path: PathBuf,
    pub config: Config,
    pub store: PromptStore,
}

impl AppCtx {
    /// Resolve the data directory, read its configuration, start logging and
    /// open the store.
    pub fn init(dir: Option<&Path>) -> Result<Self, String> {
        let base_dir = match dir {
            Some(d) => d.to_path_buf(),
            None => default_base_dir()?,
        };
        ensure_dir(&base_dir)?;

        let config = Config::load(&base_dir).map_err(|e| e.to_string())?;
        logging::init(&config.log_level);
        if let Some(parent) = config.data_path(&base_dir).parent() {
            ensure_dir(parent)?;
        }
        Ok(Self::with_config(base_dir, config))
    }

    /// Open the store described by an already loaded configuration.
    pub fn with_config(base_dir: PathBuf, config: Config) -> Self {
        let data_path = config.data_path(&base_dir);
        let adapter = JsonAdapter::new(FileBackend::new(&data_path), config.storage_key.clone());
        let store = PromptStore::open(adapter);
        Self {
            base_dir,
            data_path,
            config,
            store,
        }
    }
}

fn default_base_dir() -> Result<PathBuf, String> {
    let home = env::var("HOME").map_err(|_| "Unable to determine HOME directory".to_string())?;
    Ok(PathBuf::from(home).join(DEFAULT_DIR_NAME))
}
