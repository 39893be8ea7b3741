use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for tiredit, stored as JSON in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TireditConfig {
    /// Parameter names to offer for editing on top of the built-in list.
    #[serde(default)]
    pub extra_params: Vec<String>,

    /// Write the edited line as `KEY=VALUE` with no space after the `=`,
    /// the output convention of the original tool. Set false for uniform
    /// `KEY= VALUE` lines.
    #[serde(default = "default_legacy_spacing")]
    pub legacy_spacing: bool,
}

fn default_legacy_spacing() -> bool {
    true
}

impl Default for TireditConfig {
    fn default() -> Self {
        Self {
            extra_params: Vec::new(),
            legacy_spacing: default_legacy_spacing(),
        }
    }
}

impl TireditConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: TireditConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }
}
