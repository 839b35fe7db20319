use std::path::{Path, PathBuf};

use bevy::prelude::*;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    tabletop::components::BarSlot,
    values::{
        BLOOD_BASE_HEIGHT, BLOOD_BASE_WIDTH, BLOOD_TYPE_PREFIX, CONFIG_ENV_VAR, DECAL_NAME,
        DEFAULT_BLEED_TYPE, MAX_ROTATION, MAX_SIZE_MULTIPLIER, MIN_ALLOWED_MULTIPLIER,
    },
};

/// Fixed at startup; every system reads it through `Res<BloodConfig>`.
#[derive(Clone, Debug, PartialEq, Deserialize, Resource)]
#[serde(default, deny_unknown_fields)]
pub struct BloodConfig {
    /// Bar holding the token's health.
    pub health_bar: BarSlot,
    /// Prefix of the handouts holding decal images. May be empty.
    pub prefix: String,
    /// Bleed type used when a character has none, and as the fallback asset.
    pub default_bleed_type: String,
    /// Name given to every spawned decal, used to find them again.
    pub decal_name: String,
    pub min_allowed_multiplier: f32,
    pub max_size_multiplier: f32,
    pub base_width: f32,
    pub base_height: f32,
    pub max_rotation: u32,
}

impl Default for BloodConfig {
    fn default() -> Self {
        Self {
            health_bar: BarSlot::Bar1,
            prefix: BLOOD_TYPE_PREFIX.into(),
            default_bleed_type: DEFAULT_BLEED_TYPE.into(),
            decal_name: DECAL_NAME.into(),
            min_allowed_multiplier: MIN_ALLOWED_MULTIPLIER,
            max_size_multiplier: MAX_SIZE_MULTIPLIER,
            base_width: BLOOD_BASE_WIDTH,
            base_height: BLOOD_BASE_HEIGHT,
            max_rotation: MAX_ROTATION,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {0:?}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("Failed to parse config {0:?}: {1}")]
    Parse(PathBuf, #[source] ron::error::SpannedError),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

impl BloodConfig {
    pub fn asset_name(&self, bleed_type: &str) -> String {
        format!("{}{}", self.prefix, bleed_type)
    }

    pub fn fallback_asset_name(&self) -> String {
        self.asset_name(&self.default_bleed_type)
    }

    pub fn from_ron(path: &Path, contents: &str) -> Result<Self, ConfigError> {
        let config = ron::from_str::<BloodConfig>(contents)
            .map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;

        config.validate()?;

        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading blood config from: {:?}", path);

        let contents = std::fs::read_to_string(path)
            .map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;

        Self::from_ron(path, &contents)
    }

    /// Reads the file named by `BLOOD_CONFIG`, or the defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rotation == 0 {
            return Err(ConfigError::Invalid("max_rotation must be at least 1"));
        }

        if self.decal_name.is_empty() {
            return Err(ConfigError::Invalid("decal_name must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = BloodConfig::from_ron(
            Path::new("blood.ron"),
            "(health_bar: Bar2, prefix: \"splat_\")",
        )
        .unwrap();

        assert_eq!(config.health_bar, BarSlot::Bar2);
        assert_eq!(config.asset_name("green"), "splat_green");
        assert_eq!(config.fallback_asset_name(), "splat_default");
        assert_eq!(config.max_rotation, 360);
        assert_eq!(config.min_allowed_multiplier, 0.10);
    }

    #[test]
    fn rejects_zero_rotation() {
        let result = BloodConfig::from_ron(Path::new("blood.ron"), "(max_rotation: 0)");

        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_malformed_file() {
        let result = BloodConfig::from_ron(Path::new("blood.ron"), "(health_bar: Bar9)");

        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }

    #[test]
    fn rejects_misspelled_key() {
        let result = BloodConfig::from_ron(Path::new("blood.ron"), "(max_rotaton: 90)");

        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }

    #[test]
    fn missing_file() {
        let result = BloodConfig::load(Path::new("does/not/exist.ron"));

        assert!(matches!(result, Err(ConfigError::Read(_, _))));
    }
}
