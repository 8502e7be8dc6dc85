//! Simulation configuration.
//!
//! Every constant the simulation uses lives in [`FieldConfig`], which
//! serializes to JSON so a host can ship tuned presets. The defaults
//! reproduce the reference background exactly.

use crate::error::ConfigError;
use crate::lifecycle::Lifespan;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_color() -> [f32; 3] {
    [1.0, 0.84, 0.0]
}

/// Complete particle field configuration.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of particles, fixed for the life of the field.
    pub particle_count: u32,
    /// Half-size of the reflecting cube.
    pub bounds: f32,
    /// Half-size of the cube particles spawn and respawn in.
    pub spawn_extent: f32,
    /// Per-axis spawn velocity is drawn from `-initial_speed..initial_speed`.
    pub initial_speed: f32,
    /// Smallest base point size.
    pub size_min: f32,
    /// Largest base point size (exclusive).
    pub size_max: f32,
    /// Ticks each particle lives before it is recycled.
    pub lifespan: Lifespan,
    /// Fraction of the positional error toward the pointer target added to
    /// velocity each tick.
    pub attraction_gain: f32,
    /// World distance the pointer target sits at when the pointer is at the
    /// edge of the window.
    pub pointer_reach: f32,
    /// Per-tick velocity multiplier.
    pub damping: f32,
    /// Fraction of velocity kept (and reversed) when crossing `bounds`.
    pub restitution: f32,
    /// Optional cap on velocity magnitude. `None` leaves velocity unclamped.
    pub speed_limit: Option<f32>,
    /// RGB color published for every particle.
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            bounds: 10.0,
            spawn_extent: 10.0,
            initial_speed: 0.01,
            size_min: 0.05,
            size_max: 0.15,
            lifespan: Lifespan::default(),
            attraction_gain: 1e-4,
            pointer_reach: 10.0,
            damping: 0.99,
            restitution: 0.5,
            speed_limit: None,
            color: default_color(),
        }
    }
}

impl FieldConfig {
    /// Base particle color as a vector.
    pub fn color_vec(&self) -> Vec3 {
        Vec3::from_array(self.color)
    }

    /// Check that every value is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("bounds", self.bounds),
            ("spawn_extent", self.spawn_extent),
            ("initial_speed", self.initial_speed),
            ("size_min", self.size_min),
            ("size_max", self.size_max),
            ("attraction_gain", self.attraction_gain),
            ("pointer_reach", self.pointer_reach),
            ("damping", self.damping),
            ("restitution", self.restitution),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(invalid(format!("{} must be finite, got {}", name, value)));
            }
        }
        if self.color.iter().any(|c| !c.is_finite()) {
            return Err(invalid(format!("color must be finite, got {:?}", self.color)));
        }

        if self.bounds <= 0.0 {
            return Err(invalid(format!("bounds must be positive, got {}", self.bounds)));
        }
        if self.spawn_extent <= 0.0 {
            return Err(invalid(format!(
                "spawn_extent must be positive, got {}",
                self.spawn_extent
            )));
        }
        if self.initial_speed < 0.0 {
            return Err(invalid(format!(
                "initial_speed must not be negative, got {}",
                self.initial_speed
            )));
        }
        if self.size_min <= 0.0 || self.size_max < self.size_min {
            return Err(invalid(format!(
                "size range {}..{} is empty or not positive",
                self.size_min, self.size_max
            )));
        }
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(invalid(format!("damping must be in [0, 1], got {}", self.damping)));
        }
        if self.attraction_gain < 0.0 {
            return Err(invalid(format!(
                "attraction_gain must not be negative, got {}",
                self.attraction_gain
            )));
        }
        if self.restitution < 0.0 {
            return Err(invalid(format!(
                "restitution must not be negative, got {}",
                self.restitution
            )));
        }
        if let Some(limit) = self.speed_limit {
            if !(limit.is_finite() && limit > 0.0) {
                return Err(invalid(format!("speed_limit must be positive, got {}", limit)));
            }
        }
        self.lifespan.validate().map_err(ConfigError::Invalid)
    }

    /// Save the configuration to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::debug!("Saved field config to {}", path.display());
        Ok(())
    }

    /// Load and validate a configuration from a JSON file.
    ///
    /// Missing keys fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config: FieldConfig = serde_json::from_str(&json)?;
        config.validate()?;
        log::debug!(
            "Loaded field config from {} ({} particles)",
            path.display(),
            config.particle_count
        );
        Ok(config)
    }
}

fn invalid(msg: String) -> ConfigError {
    ConfigError::Invalid(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.particle_count, 50);
        assert_eq!(config.lifespan, Lifespan::Fixed(100.0));
        assert_eq!(config.speed_limit, None);
        assert_eq!(config.color_vec(), Vec3::new(1.0, 0.84, 0.0));
    }

    #[test]
    fn test_validate_rejects_inverted_size_range() {
        let config = FieldConfig {
            size_min: 0.2,
            size_max: 0.1,
            ..FieldConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let config = FieldConfig {
            attraction_gain: f32::NAN,
            ..FieldConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("attraction_gain"));
    }

    #[test]
    fn test_validate_rejects_damping_above_one() {
        let config = FieldConfig {
            damping: 1.01,
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_speed_limit() {
        let config = FieldConfig {
            speed_limit: Some(0.0),
            ..FieldConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: FieldConfig =
            serde_json::from_str(r#"{ "particle_count": 12, "lifespan": { "range": { "min": 40.0, "max": 60.0 } } }"#)
                .unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.lifespan, Lifespan::Range { min: 40.0, max: 60.0 });
        assert_eq!(config.damping, 0.99);
        assert_eq!(config.color, [1.0, 0.84, 0.0]);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.json");

        let config = FieldConfig {
            particle_count: 20,
            speed_limit: Some(0.5),
            ..FieldConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = FieldConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FieldConfig::load(dir.path().join("missing.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "bounds": -1.0 }"#).unwrap();
        assert!(matches!(FieldConfig::load(&path), Err(ConfigError::Invalid(_))));

        fs::write(&path, "not json").unwrap();
        assert!(matches!(FieldConfig::load(&path), Err(ConfigError::Json(_))));
    }
}
