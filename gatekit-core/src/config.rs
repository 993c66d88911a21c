//! Configuration system
//!
//! Values resolve with the usual supersedence (highest priority wins):
//!
//! 1. **Code** (builder methods)
//! 2. **Environment variables** (`GK_*`)
//! 3. **Config file** (`gatekit.toml`)
//! 4. **Defaults**
//!
//! # Example
//!
//! ```rust,ignore
//! use gatekit_core::config::GatekitConfig;
//!
//! let config = GatekitConfig::load()?;           // defaults + file + env
//! let config = GatekitConfig::from_file("gatekit.toml")?;
//! let config = GatekitConfig::default();
//! ```

use std::env;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::logging::LoggingConfig;

/// Default config file name searched in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "gatekit.toml";

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GatekitConfig {
    pub seed: SeedConfig,
    pub logging: LoggingConfig,
}

/// Store seeding configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Pre-populate stores with the shipped role/permission catalogue
    pub enabled: bool,

    /// Seed the user directory with sample users
    pub sample_users: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self { enabled: true, sample_users: true }
    }
}

impl SeedConfig {
    pub fn apply_env_vars(&mut self) {
        if let Ok(enabled) = env::var("GK_SEED_ENABLED") {
            self.enabled = enabled.parse().unwrap_or(true);
        }
        if let Ok(sample) = env::var("GK_SEED_SAMPLE_USERS") {
            self.sample_users = sample.parse().unwrap_or(true);
        }
    }

    pub fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl GatekitConfig {
    /// Load with full supersedence: defaults, then `gatekit.toml` if
    /// present, then environment variables.
    pub fn load() -> Result<Self> {
        let mut config = if Path::new(DEFAULT_CONFIG_FILE).exists() {
            Self::from_file(DEFAULT_CONFIG_FILE)?
        } else {
            Self::default()
        };
        config.apply_env_vars();
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific TOML file (no env overrides)
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `GK_*` environment variable overrides
    pub fn apply_env_vars(&mut self) {
        self.seed.apply_env_vars();
        self.logging.apply_env_vars();
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.seed.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Disable store seeding (builder style)
    pub fn without_seed(mut self) -> Self {
        self.seed.enabled = false;
        self.seed.sample_users = false;
        self
    }

    /// Set the logging configuration (builder style)
    pub fn with_logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = logging;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_seed_everything() {
        let config = GatekitConfig::default();
        assert!(config.seed.enabled);
        assert!(config.seed.sample_users);
        config.validate().unwrap();
    }

    #[test]
    fn test_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[seed]\nenabled = false\n\n[logging]\nlevel = \"debug\"\n"
        )
        .unwrap();

        let config = GatekitConfig::from_file(file.path()).unwrap();
        assert!(!config.seed.enabled);
        // Unspecified keys keep their defaults.
        assert!(config.seed.sample_users);
        assert_eq!(config.logging.level, crate::logging::LogLevel::Debug);
    }

    #[test]
    fn test_builder_overrides_win() {
        let config = GatekitConfig::default().without_seed();
        assert!(!config.seed.enabled);
        assert!(!config.seed.sample_users);
    }
}
