use crate::api::RollbookApi;
use crate::commands::RollbookPaths;
use crate::config::RollbookConfig;
use crate::error::{Result, RollbookError};
use crate::store::fs_backend::FsBackend;
use crate::store::RecordStore;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Overrides the data directory (primarily for testing).
pub const HOME_ENV: &str = "ROLLBOOK_HOME";

pub struct RollbookContext {
    pub api: RollbookApi<FsBackend>,
    pub config: RollbookConfig,
}

/// Determine the data directory:
/// 1. `ROLLBOOK_HOME` if set
/// 2. The OS-appropriate data directory via the directories crate
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "rollbook", "rollbook")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RollbookError::Store("Could not determine data directory".to_string()))
}

pub fn initialize() -> Result<RollbookContext> {
    let data_dir = data_dir()?;
    debug!(data_dir = %data_dir.display(), "initializing rollbook");

    let config = RollbookConfig::load(&data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        RollbookConfig::default()
    });

    let store = RecordStore::load(FsBackend::new(data_dir.clone()));
    let api = RollbookApi::new(store, RollbookPaths { data_dir });

    Ok(RollbookContext { api, config })
}
