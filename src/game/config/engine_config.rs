//! Engine Configuration
//!
//! Centralized tuning for placement, movement, sensors and lights.
//! `Default` returns the stock values; JSON text may override any subset of
//! them, section by section.
//!
//! ```json
//! { "movement": { "max_redirects": 1 }, "lights": { "range": 8.0 } }
//! ```

use serde::{Deserialize, Serialize};

use crate::game::error::ConfigError;
use crate::game::objects::{LightConfig, SensorConfig};
use crate::physics::MovementConfig;
use crate::world::PlacementConfig;

/// Every tunable of the engine in one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub placement: PlacementConfig,
    pub movement: MovementConfig,
    pub sensors: SensorConfig,
    pub lights: LightConfig,
}

impl EngineConfig {
    /// Parse from JSON text and validate. Missing fields keep their defaults.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values that would make placement or resolution meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("placement.room_size", self.placement.room_size)?;
        non_negative("placement.camera_pull_back", self.placement.camera_pull_back)?;

        let step = self.movement.step;
        if !step.is_finite() || step <= 0.0 || step > 1.0 {
            return Err(ConfigError::Invalid {
                field: "movement.step",
                reason: "must be in (0, 1]",
            });
        }

        cosine("sensors.facing_cos", self.sensors.facing_cos)?;
        positive("sensors.range", self.sensors.range)?;
        non_negative(
            "sensors.player_suppress_distance",
            self.sensors.player_suppress_distance,
        )?;

        cosine("lights.cone_cos", self.lights.cone_cos)?;
        positive("lights.range", self.lights.range)?;
        Ok(())
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite and positive",
        })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be finite and not negative",
        })
    }
}

fn cosine(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (-1.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Invalid {
            field,
            reason: "must be a cosine in [-1, 1]",
        })
    }
}
