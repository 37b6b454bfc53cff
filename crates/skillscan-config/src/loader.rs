use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use skillscan_core::{Result, SkillscanError};

use crate::schema::ScanConfig;

/// Default config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "skillscan.toml";

/// Loads the skillscan configuration.
pub struct ConfigLoader {
    config: ScanConfig,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Resolve the config path: explicit path > ./skillscan.toml > none (defaults).
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(p) = explicit {
            return Some(p.to_path_buf());
        }
        let local = PathBuf::from(CONFIG_FILE_NAME);
        local.is_file().then_some(local)
    }

    /// Load the config from disk, falling back to defaults when no file is found.
    ///
    /// An explicitly named file that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = Self::resolve_path(path);
        let config = match &config_path {
            Some(p) if p.exists() => {
                info!(config_path = ?p, "loading configuration");
                Self::parse_file(p)?
            }
            Some(p) => {
                return Err(SkillscanError::Config(format!(
                    "config file not found: {}",
                    p.display()
                )));
            }
            None => {
                debug!("no {CONFIG_FILE_NAME} found, using defaults");
                ScanConfig::default()
            }
        };

        Ok(Self {
            config: Self::checked(config)?,
            config_path,
        })
    }

    /// Parse a TOML string into a validated config (no file involved).
    pub fn from_toml_str(raw: &str) -> Result<ScanConfig> {
        let config = toml::from_str::<ScanConfig>(raw)
            .map_err(|e| SkillscanError::Config(format!("failed to parse config: {e}")))?;
        Self::checked(config)
    }

    /// Get a copy of the loaded config.
    pub fn get(&self) -> ScanConfig {
        self.config.clone()
    }

    /// File the config came from, if any.
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn parse_file(path: &Path) -> Result<ScanConfig> {
        let raw = std::fs::read_to_string(path)?;
        toml::from_str::<ScanConfig>(&raw).map_err(|e| {
            SkillscanError::Config(format!("failed to parse {}: {}", path.display(), e))
        })
    }

    /// Validate config: log warnings, fail on errors.
    fn checked(config: ScanConfig) -> Result<ScanConfig> {
        match config.validate() {
            Ok(warnings) => {
                for w in &warnings {
                    warn!("{}", w);
                }
                Ok(config)
            }
            Err(e) => Err(SkillscanError::Config(e)),
        }
    }
}
