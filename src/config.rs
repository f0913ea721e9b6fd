//! Session configuration
//!
//! Every field has a default, so partial JSON documents are accepted.
//! Persisted in LocalStorage on the web, read from a JSON file natively.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Arena {width}x{height} is too small for a border inset of {border}")]
    ArenaTooSmall { width: f32, height: f32, border: f32 },

    #[error("A {what} of radius {radius} does not fit inside a {inner_width}x{inner_height} arena")]
    DoesNotFit {
        what: &'static str,
        radius: f32,
        inner_width: f32,
        inner_height: f32,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunable parameters of a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub border_inset: f32,
    pub avatar_radius: f32,
    /// Distance of the avatar center from the bottom edge
    pub avatar_offset_y: f32,
    pub avatar_accel_x: f32,
    pub growth_per_absorb: f32,
    pub entity_radius: f32,
    pub entity_max_speed: f32,
    /// Chance per tick (0.0 - 1.0) that an entity spawns
    pub spawn_chance: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            border_inset: BORDER_INSET,
            avatar_radius: AVATAR_RADIUS,
            avatar_offset_y: AVATAR_OFFSET_Y,
            avatar_accel_x: AVATAR_ACCEL_X,
            growth_per_absorb: GROWTH_PER_ABSORB,
            entity_radius: ENTITY_RADIUS,
            entity_max_speed: ENTITY_MAX_SPEED,
            spawn_chance: SPAWN_CHANCE,
        }
    }
}

impl GameConfig {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "orb_arena_config";

    /// Check the config against an arena extent
    pub fn validate(&self, width: f32, height: f32) -> Result<(), ConfigError> {
        let positive = [
            ("avatar_radius", self.avatar_radius),
            ("entity_radius", self.entity_radius),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        let non_negative = [
            ("border_inset", self.border_inset),
            ("avatar_offset_y", self.avatar_offset_y),
            ("growth_per_absorb", self.growth_per_absorb),
            ("entity_max_speed", self.entity_max_speed),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        if !self.avatar_accel_x.is_finite() {
            return Err(ConfigError::InvalidValue {
                field: "avatar_accel_x",
                value: self.avatar_accel_x,
            });
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(ConfigError::InvalidValue {
                field: "spawn_chance",
                value: self.spawn_chance,
            });
        }

        let min = self.border_inset * 2.0;
        if !(width.is_finite() && height.is_finite()) || width <= min || height <= min {
            return Err(ConfigError::ArenaTooSmall {
                width,
                height,
                border: self.border_inset,
            });
        }

        let inner_width = width - min;
        let inner_height = height - min;
        for (what, radius) in [
            ("roaming entity", self.entity_radius),
            ("avatar", self.avatar_radius),
        ] {
            if radius * 2.0 > inner_width || radius * 2.0 > inner_height {
                return Err(ConfigError::DoesNotFit {
                    what,
                    radius,
                    inner_width,
                    inner_height,
                });
            }
        }

        Ok(())
    }

    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load_local() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json_str(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }
}
