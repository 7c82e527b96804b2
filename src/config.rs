use crate::error::{AlumniFinderError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Region hint appended to every search query.
    pub region: String,
    /// Synonym table JSON; the built-in table is used when unset.
    pub synonyms_path: Option<PathBuf>,
    /// Credential store JSON; defaults to cred.json next to the config file.
    pub credentials_path: Option<PathBuf>,
    pub pacing_min_secs: u64,
    pub pacing_max_secs: u64,
    pub workers: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AlumniFinderError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("alumni-finder").join("config.json"))
    }

    /// Credential store location: the configured path, or cred.json in the
    /// config directory.
    pub fn resolved_credentials_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.credentials_path {
            return Ok(path.clone());
        }
        let config_path = Self::config_path()?;
        let dir = config_path.parent().unwrap_or(Path::new("."));
        Ok(dir.join("cred.json"))
    }

    fn default_config() -> Self {
        Self {
            region: "Buffalo".into(),
            synonyms_path: None,
            credentials_path: None,
            pacing_min_secs: 2,
            pacing_max_secs: 4,
            workers: 1,
        }
    }
}
