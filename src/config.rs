//! Configuration loading and management
//!
//! Handles parsing of `.evops.toml` configuration files: the tenant's
//! core-task templates plus default filter and sort settings for list
//! views.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::date_range::DateRange;
use crate::readiness::CoreTask;
use crate::sort::SortKey;

pub const CONFIG_FILE: &str = ".evops.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the event snapshot, relative to the config directory
    #[serde(default = "default_snapshot")]
    pub snapshot: PathBuf,

    /// Core-task templates
    #[serde(default)]
    pub tasks: TasksConfig,

    /// Default list-view settings
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            tasks: TasksConfig::default(),
            defaults: DefaultsConfig::default(),
        }
    }
}

fn default_snapshot() -> PathBuf {
    PathBuf::from("events.json")
}

/// Tenant core-task templates
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Core tasks expected for every event
    #[serde(default)]
    pub core: Vec<CoreTask>,
}

impl TasksConfig {
    /// Templates with the active flag set, in configured order.
    pub fn active(&self) -> Vec<CoreTask> {
        self.core
            .iter()
            .filter(|task| task.active)
            .cloned()
            .collect()
    }

    fn validate(&self) -> crate::error::Result<()> {
        let mut seen = std::collections::HashSet::new();
        for task in &self.core {
            if task.id.trim().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "tasks.core: id cannot be empty".to_string(),
                ));
            }
            if !seen.insert(task.id.as_str()) {
                return Err(crate::error::Error::InvalidConfig(format!(
                    "tasks.core: duplicate id '{}'",
                    task.id
                )));
            }
        }
        Ok(())
    }
}

/// Default filter and sort settings for list views
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Default date range name (unknown names widen to `all`)
    #[serde(default = "default_date_range")]
    pub date_range: String,

    /// Default sort key (unknown keys fall back to `date_asc`)
    #[serde(default = "default_sort")]
    pub sort: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            date_range: default_date_range(),
            sort: default_sort(),
        }
    }
}

fn default_date_range() -> String {
    "all".to_string()
}

fn default_sort() -> String {
    "date_asc".to_string()
}

impl DefaultsConfig {
    pub fn date_range(&self) -> DateRange {
        DateRange::from_key(&self.date_range)
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::from_key(&self.sort)
    }
}

impl Config {
    /// Load configuration from a `.evops.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.tasks.validate()?;
        Ok(())
    }
}
