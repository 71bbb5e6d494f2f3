use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::controller::DEFAULT_NAMESPACE;
use crate::store::{FileStore, validate_key};

pub const DEFAULT_DATA_DIR: &str = ".checklist";
pub const LOG_FILE_NAME: &str = "checklist.log";

/// Resolved runtime settings.
#[derive(Clone, Debug)]
pub struct Config {
    pub data_dir: PathBuf,
    pub namespace: String,
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Fills in defaults: `./.checklist` for data and the stock namespace.
    pub fn resolve(
        data_dir: Option<PathBuf>,
        namespace: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir()
                .context("get current dir")?
                .join(DEFAULT_DATA_DIR),
        };
        let namespace = namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
        validate_key(&namespace)?;
        Ok(Self {
            data_dir,
            namespace,
            log_file,
        })
    }

    /// Where the interactive UI writes its log.
    pub fn log_path(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| self.data_dir.join(LOG_FILE_NAME))
    }

    pub fn open_store(&self) -> Result<FileStore> {
        FileStore::open(&self.data_dir)
    }
}
