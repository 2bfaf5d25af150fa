use crate::error::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LANGUAGE: &str = "pt_BR";

/// Overrides the config directory (mostly for tests and scripts).
pub const CONFIG_DIR_ENV: &str = "NUMWORDS_CONFIG_DIR";

/// Configuration for the numwords binaries, stored in `config.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NumWordsConfig {
    /// Language used when `--language` is not given. Validated on use, not on load.
    #[serde(default = "default_language")]
    pub default_language: String,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

impl Default for NumWordsConfig {
    fn default() -> Self {
        Self {
            default_language: default_language(),
        }
    }
}

impl NumWordsConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: NumWordsConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load from [`config_dir`], falling back to defaults when there is none.
    pub fn load_default() -> Result<Self> {
        match config_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Save config to the given directory. The binaries only ever read it.
    #[cfg(test)]
    fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

/// `$NUMWORDS_CONFIG_DIR`, else the platform config dir (e.g. `~/.config/numwords`).
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "numwords", "numwords").map(|dirs| dirs.config_dir().to_path_buf())
}
