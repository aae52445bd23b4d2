//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod access;
pub mod logging;
pub mod program;
pub mod tiers;

use serde::{Deserialize, Serialize};

use self::access::AccessConfig;
use self::logging::LoggingConfig;
use self::program::ProgramConfig;
use self::tiers::TiersConfig;

use crate::error::AppError;

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reading-program settings (completion threshold, windows, streak cap).
    #[serde(default)]
    pub program: ProgramConfig,
    /// Tier threshold tables for streaks and rolling averages.
    #[serde(default)]
    pub tiers: TiersConfig,
    /// Premium feature access settings.
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `LECTIO_`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("LECTIO")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let config: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.program.validate()?;
        self.tiers.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            program: ProgramConfig::default(),
            tiers: TiersConfig::default(),
            access: AccessConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
