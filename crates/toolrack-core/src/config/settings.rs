use crate::Result;
use crate::session::SurfaceConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration
///
/// Holds one [`SurfaceConfig`] per shipped search surface. A missing file
/// yields the defaults; fields absent from the file keep their defaults too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "SurfaceConfig::header")]
    pub header: SurfaceConfig,

    #[serde(default = "SurfaceConfig::tools_page")]
    pub tools_page: SurfaceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            header: SurfaceConfig::header(),
            tools_page: SurfaceConfig::tools_page(),
        }
    }
}

impl Config {
    /// Load config from file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid JSON.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to file.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
