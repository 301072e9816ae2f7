use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::page::PageTimings;
use crate::typewriter::Timings;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub start_page: String,
    pub typing_interval_ms: u64,
    pub ellipsis_interval_ms: u64,
    pub highlight_interval_ms: u64,
    pub content_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_page: "home".to_string(),
            typing_interval_ms: 120,
            ellipsis_interval_ms: 500,
            highlight_interval_ms: 150,
            content_path: None,
        }
    }
}

impl Config {
    pub fn page_timings(&self) -> PageTimings {
        PageTimings {
            typewriter: Timings {
                typing: Duration::from_millis(self.typing_interval_ms),
                ellipsis: Duration::from_millis(self.ellipsis_interval_ms),
            },
            highlight: Duration::from_millis(self.highlight_interval_ms),
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new() -> Self {
        let path = if let Some(pd) = ProjectDirs::from("", "", "folio") {
            pd.config_dir().join("config.json")
        } else {
            PathBuf::from("folio_config.json")
        };
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        if let Ok(bytes) = fs::read(&self.path) {
            if let Ok(cfg) = serde_json::from_slice::<Config>(&bytes) {
                return cfg;
            }
        }
        Config::default()
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)
    }
}
