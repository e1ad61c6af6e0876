use crate::error::{Result, RollbookError};
use crate::model::ViewMode;
use crate::query::SortKey;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SORT: &str = "name-asc";

/// Configuration for rollbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct RollbookConfig {
    /// Sort key used by `list` when none is given (e.g. "name-asc", "year-desc")
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// Layout used by `list` when none is given
    #[serde(default)]
    pub default_view: ViewMode,

    /// Directory exports are written to; the current directory when unset
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

fn default_sort() -> String {
    DEFAULT_SORT.to_string()
}

impl Default for RollbookConfig {
    fn default() -> Self {
        Self {
            default_sort: default_sort(),
            default_view: ViewMode::default(),
            export_dir: None,
        }
    }
}

impl RollbookConfig {
    pub const KEYS: [&'static str; 3] = ["default-sort", "default-view", "export-dir"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RollbookError::Io)?;
        let config: RollbookConfig =
            serde_json::from_str(&content).map_err(RollbookError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RollbookError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RollbookError::Serialization)?;
        fs::write(config_path, content).map_err(RollbookError::Io)?;
        Ok(())
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from(self.default_sort.as_str())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-sort" => Some(self.default_sort.clone()),
            "default-view" => Some(self.default_view.to_string()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-sort" => {
                if SortKey::from(value) == SortKey::Unsorted && value != "none" {
                    return Err(RollbookError::Api(format!(
                        "Unknown sort key: {} (expected name-asc, name-desc, roll-asc, roll-desc, year-asc, year-desc or none)",
                        value
                    )));
                }
                self.default_sort = value.to_string();
            }
            "default-view" => {
                self.default_view = value.parse().map_err(RollbookError::Api)?;
            }
            "export-dir" => {
                self.export_dir = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(RollbookError::Api(format!("Unknown config key: {}", other))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(String, String)> {
        Self::KEYS
            .iter()
            .map(|k| (k.to_string(), self.get(k).unwrap_or_default()))
            .collect()
    }
}
