use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use agristat_core::Domain;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("settings parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("settings encode error: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// Defaults resolved before CLI flags are applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub seed: u64,
    pub run_dir: PathBuf,
    pub domain: Domain,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 42,
            run_dir: PathBuf::from("runs"),
            domain: Domain::default(),
        }
    }
}

/// Load the settings file, creating it with defaults on first use.
pub fn load_or_create_settings(path: &Path) -> Result<Settings, SettingsError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        return Ok(settings);
    }

    let settings = Settings::default();
    let encoded = toml::to_string_pretty(&settings)?;
    std::fs::write(path, encoded)?;
    Ok(settings)
}
