//! Optional JSON override for `PickupConfig` and an optional RNG seed, both
//! read from environment variables at startup.

use std::fmt;
use std::path::Path;

use bevy::prelude::*;

use simulation::config::PickupConfig;
use simulation::error::PickupError;

/// Path to a JSON file whose fields override the pickup defaults.
pub const CONFIG_ENV: &str = "PICKUPS_CONFIG";
/// Decimal `u64` seed for spawn placement.
pub const SEED_ENV: &str = "PICKUPS_SEED";

#[derive(Debug)]
pub enum ConfigLoadError {
    /// The override file could not be read.
    Io(std::io::Error),
    /// The file is not valid JSON for `PickupConfig`.
    Parse(serde_json::Error),
    /// The file parsed but a value is out of range.
    Invalid(PickupError),
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigLoadError::Parse(e) => write!(f, "JSON error: {e}"),
            ConfigLoadError::Invalid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigLoadError::Io(e) => Some(e),
            ConfigLoadError::Parse(e) => Some(e),
            ConfigLoadError::Invalid(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigLoadError {
    fn from(e: std::io::Error) -> Self {
        ConfigLoadError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigLoadError {
    fn from(e: serde_json::Error) -> Self {
        ConfigLoadError::Parse(e)
    }
}

impl From<PickupError> for ConfigLoadError {
    fn from(e: PickupError) -> Self {
        ConfigLoadError::Invalid(e)
    }
}

/// Parse and validate a config. Missing fields keep their defaults.
pub fn parse_config(json: &str) -> Result<PickupConfig, ConfigLoadError> {
    let config: PickupConfig = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
}

pub fn read_config(path: &Path) -> Result<PickupConfig, ConfigLoadError> {
    let json = std::fs::read_to_string(path)?;
    parse_config(&json)
}

/// Config named by `PICKUPS_CONFIG`, or the defaults when it is unset or
/// unusable.
pub fn load_config_from_env() -> PickupConfig {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return PickupConfig::default();
    };
    match read_config(Path::new(&path)) {
        Ok(config) => {
            info!("Loaded pickup config from {path}");
            config
        }
        Err(e) => {
            warn!("Ignoring pickup config {path}: {e}");
            PickupConfig::default()
        }
    }
}

pub fn parse_seed(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

/// Seed named by `PICKUPS_SEED`, if set and valid.
pub fn seed_from_env() -> Option<u64> {
    let value = std::env::var(SEED_ENV).ok()?;
    let seed = parse_seed(&value);
    if seed.is_none() {
        warn!("Ignoring {SEED_ENV}={value:?}: not an unsigned integer");
    }
    seed
}
