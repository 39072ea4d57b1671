//! Job configuration for a calibration-and-verification session.
//!
//! One `JobConfig` captures the external inputs the engine consumes:
//! stock dimensions and the rotary flag, the declared origin reference,
//! the verification mode, the coordinate-setup method, and the job's
//! work range when one is known. Stored as TOML in the platform config
//! directory.

use crate::error::{SettingsError, SettingsResult};
use originkit_core::coordinate::OriginReference;
use originkit_core::data::{SetupMethod, StockDimensions, VerificationMode, WorkRange};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete job configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    /// The material being worked on
    pub stock: StockDimensions,
    /// Declared origin reference on the stock
    pub origin_reference: OriginReference,
    /// How boundary runs are shown to the operator
    pub verification_mode: VerificationMode,
    /// How the working origin was established
    pub setup_method: SetupMethod,
    /// The job's work range, if known (absent until a job is loaded)
    pub work_range: Option<WorkRange>,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            stock: StockDimensions::flat(100.0, 100.0),
            origin_reference: OriginReference::BottomLeft,
            verification_mode: VerificationMode::Crosshair,
            setup_method: SetupMethod::Manual,
            work_range: None,
        }
    }
}

impl JobConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|err| SettingsError::Load(format!("{}: {err}", path.display())))?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .map_err(|err| SettingsError::Save(format!("{}: {err}", path.display())))?;
        Ok(())
    }

    /// The default configuration file location for this platform
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        Ok(base.join("originkit").join("job.toml"))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist yet
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !(self.stock.width.is_finite() && self.stock.width > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "stock.width".to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
        if !(self.stock.height.is_finite() && self.stock.height > 0.0) {
            return Err(SettingsError::InvalidSetting {
                key: "stock.height".to_string(),
                reason: "must be positive and finite".to_string(),
            });
        }
        Ok(())
    }
}
