/// Tunable constants for the runner, loadable from a JSON file.
///
/// Every section falls back to its defaults, so a config file only needs to
/// name the values it changes.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ── Sections ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f32,
    pub height: f32,
    /// Y coordinate of the ground line; entities stand on it.
    pub ground_y: f32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 400.0,
            ground_y: 350.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to the player's vertical velocity every airborne tick.
    pub gravity: f32,
    /// Vertical velocity applied on jump (negative = upward).
    pub jump_impulse: f32,
    /// Ducking height as a fraction of the standing height.
    pub duck_ratio: f32,
    pub player_x: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.6,
            jump_impulse: -12.0,
            duck_ratio: 0.6,
            player_x: 50.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    pub start: f32,
    pub max: f32,
    pub step: f32,
    /// Speed is bumped whenever the frame counter is a multiple of this.
    pub interval: u64,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            start: 6.0,
            max: 14.0,
            step: 0.5,
            interval: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub min_gap: f32,
    pub gap_jitter: f32,
    pub spawn_jitter: f32,
    /// Raw score after which airborne obstacles may appear.
    pub airborne_after_score: u64,
    /// Heights above the ground line an airborne obstacle may fly at.
    pub airborne_altitudes: Vec<f32>,
    pub tall_threshold: f32,
    pub airborne_threshold: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            min_gap: 350.0,
            gap_jitter: 250.0,
            spawn_jitter: 200.0,
            airborne_after_score: 500,
            airborne_altitudes: vec![60.0, 100.0, 30.0],
            tall_threshold: 0.45,
            airborne_threshold: 0.7,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BullConfig {
    pub start_x: f32,
    pub speed: f32,
    pub max_x: f32,
    /// Countdown in ticks once the secret code is entered.
    pub duration: u32,
}

impl Default for BullConfig {
    fn default() -> Self {
        Self {
            start_x: -150.0,
            speed: 4.0,
            max_x: 250.0,
            duration: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreConfig {
    /// Raw counter is divided by this before display.
    pub divisor: u64,
    /// Displayed score that triggers the one-time interrupt.
    pub milestone: u64,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            divisor: 10,
            milestone: 200,
        }
    }
}

// ── Root ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub canvas: CanvasConfig,
    pub physics: PhysicsConfig,
    pub speed: SpeedConfig,
    pub obstacles: ObstacleConfig,
    pub bull: BullConfig,
    pub score: ScoreConfig,
    pub collision_padding: f32,
    pub cheat_code: String,
    pub fps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            physics: PhysicsConfig::default(),
            speed: SpeedConfig::default(),
            obstacles: ObstacleConfig::default(),
            bull: BullConfig::default(),
            score: ScoreConfig::default(),
            collision_padding: 12.0,
            cheat_code: "b".to_string(),
            fps: 60,
        }
    }
}

impl Config {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.canvas.ground_y <= 0.0 || self.canvas.ground_y > self.canvas.height {
            return invalid("canvas.ground_y must lie within the canvas");
        }
        if self.physics.gravity <= 0.0 {
            return invalid("physics.gravity must be positive");
        }
        if self.physics.jump_impulse >= 0.0 {
            return invalid("physics.jump_impulse must be negative");
        }
        if !(0.0..=1.0).contains(&self.physics.duck_ratio) {
            return invalid("physics.duck_ratio must be within 0..=1");
        }
        if self.speed.max < self.speed.start {
            return invalid("speed.max must not be below speed.start");
        }
        if self.speed.step < 0.0 {
            return invalid("speed.step must not be negative");
        }
        if self.speed.interval == 0 {
            return invalid("speed.interval must be non-zero");
        }
        if self.obstacles.airborne_altitudes.is_empty() {
            return invalid("obstacles.airborne_altitudes must not be empty");
        }
        if self.bull.duration == 0 {
            return invalid("bull.duration must be non-zero");
        }
        if self.score.divisor == 0 {
            return invalid("score.divisor must be non-zero");
        }
        if self.cheat_code.is_empty() {
            return invalid("cheat_code must not be empty");
        }
        if self.fps == 0 {
            return invalid("fps must be non-zero");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let cfg: Config = serde_json::from_str(r#"{ "speed": { "max": 20.0 }, "fps": 30 }"#).unwrap();
        assert_eq!(cfg.speed.max, 20.0);
        assert_eq!(cfg.speed.start, 6.0);
        assert_eq!(cfg.fps, 30);
        assert_eq!(cfg.canvas, CanvasConfig::default());
    }

    #[test]
    fn rejects_cap_below_start() {
        let mut cfg = Config::default();
        cfg.speed.max = 2.0;
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn rejects_empty_cheat_code() {
        let mut cfg = Config::default();
        cfg.cheat_code.clear();
        assert!(cfg.validate().is_err());
    }
}
