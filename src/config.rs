//! Game tuning configuration
//!
//! All gameplay constants (physics, geometry, spawn timing) and asset paths
//! live in one serde struct. The config is loaded from JSON at startup when a
//! file is present, otherwise the built-in defaults are used. Bad values are
//! rejected here, at configuration time, so the spawner never has to deal
//! with an impossible random range mid-game.

use serde::{Deserialize, Serialize};

/// Complete game configuration.
///
/// Field defaults reproduce the classic tuning: a 400x600 screen, gravity
/// 0.5/tick², flap impulse -8, pipes 70 wide with a 150 gap every 1200 ms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: u32,
    pub screen_height: u32,

    /// Downward acceleration applied to the bird each tick.
    pub gravity: f32,
    /// Vertical velocity set by a flap (negative = up).
    pub flap_impulse: f32,

    pub bird_width: u32,
    pub bird_height: u32,
    pub bird_start_x: i32,

    pub pipe_width: u32,
    pub pipe_gap: u32,
    /// Inclusive range for the randomized height of the top segment.
    pub pipe_min_top: u32,
    pub pipe_max_top: u32,
    /// Horizontal pipe speed in pixels per tick.
    pub pipe_speed: i32,
    /// Wall-clock milliseconds between pipe pair spawns.
    pub pipe_interval_ms: u64,

    pub cloud_width: u32,
    pub cloud_height: u32,
    pub cloud_speed: i32,
    pub cloud_interval_ms: u64,

    pub bird_image: String,
    pub flap_sound: String,
    pub music: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            screen_width: 400,
            screen_height: 600,
            gravity: 0.5,
            flap_impulse: -8.0,
            bird_width: 40,
            bird_height: 30,
            bird_start_x: 100,
            pipe_width: 70,
            pipe_gap: 150,
            pipe_min_top: 100,
            pipe_max_top: 400,
            pipe_speed: 3,
            pipe_interval_ms: 1200,
            cloud_width: 60,
            cloud_height: 30,
            cloud_speed: 1,
            cloud_interval_ms: 3000,
            bird_image: "assets/sprites/bird.png".to_string(),
            flap_sound: "assets/audio/flap.mp3".to_string(),
            music: "assets/audio/music.mp3".to_string(),
        }
    }
}

impl GameConfig {
    /// Loads and validates a config from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the config file if it exists, otherwise falls back to defaults.
    ///
    /// A present-but-invalid file is an error: silently ignoring a broken
    /// config would make tuning mistakes invisible.
    pub fn load_or_default(path: &str) -> Result<Self, String> {
        if std::path::Path::new(path).exists() {
            GameConfig::load_from_file(path)
                .map_err(|e| format!("Failed to load config {}: {}", path, e))
        } else {
            println!("No config at {}, using defaults", path);
            Ok(GameConfig::default())
        }
    }

    /// Checks that every tunable is usable before the game starts.
    pub fn validate(&self) -> Result<(), String> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err("screen dimensions must be non-zero".to_string());
        }
        if self.pipe_min_top > self.pipe_max_top {
            return Err(format!(
                "pipe_min_top ({}) exceeds pipe_max_top ({})",
                self.pipe_min_top, self.pipe_max_top
            ));
        }
        // The bottom segment must keep positive height at the deepest gap.
        // checked_add keeps absurd values from wrapping past the comparison.
        match self.pipe_max_top.checked_add(self.pipe_gap) {
            Some(gap_bottom) if gap_bottom < self.screen_height => {}
            _ => {
                return Err(format!(
                    "pipe_max_top ({}) + pipe_gap ({}) does not fit in screen height ({})",
                    self.pipe_max_top, self.pipe_gap, self.screen_height
                ));
            }
        }
        // The cloud spawn band must contain at least one row.
        if (self.screen_height as i32 / 2) < crate::cloud::CLOUD_MIN_Y {
            return Err(format!(
                "screen_height ({}) leaves no room for clouds (needs at least {})",
                self.screen_height,
                2 * crate::cloud::CLOUD_MIN_Y
            ));
        }
        if self.pipe_interval_ms == 0 || self.cloud_interval_ms == 0 {
            return Err("spawn intervals must be non-zero".to_string());
        }
        if self.pipe_speed <= 0 || self.cloud_speed <= 0 {
            return Err("entity speeds must be positive".to_string());
        }
        if self.gravity <= 0.0 {
            return Err("gravity must be positive".to_string());
        }
        if self.flap_impulse >= 0.0 {
            return Err("flap_impulse must be negative (upward)".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_gap_range_outside_screen() {
        let config = GameConfig {
            pipe_max_top: 500,
            pipe_gap: 150,
            screen_height: 600,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("does not fit"));
    }

    #[test]
    fn rejects_overflowing_pipe_range() {
        // Hostile values must fail the check, not wrap around it
        let config = GameConfig {
            pipe_max_top: u32::MAX,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("does not fit"));
    }

    #[test]
    fn rejects_screen_too_short_for_clouds() {
        // Every pipe check passes; only the cloud band is impossible
        let config = GameConfig {
            screen_height: 80,
            pipe_min_top: 5,
            pipe_max_top: 10,
            pipe_gap: 20,
            ..GameConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("no room for clouds"));
    }

    #[test]
    fn rejects_inverted_top_range() {
        let config = GameConfig {
            pipe_min_top: 300,
            pipe_max_top: 200,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_zero_spawn_interval() {
        let config = GameConfig {
            pipe_interval_ms: 0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_upward_gravity_and_downward_flap() {
        let mut config = GameConfig::default();
        config.gravity = -0.5;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.flap_impulse = 8.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn round_trips_through_json() {
        let config = GameConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.pipe_gap, config.pipe_gap);
        assert_eq!(parsed.bird_image, config.bird_image);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let parsed: GameConfig = serde_json::from_str(r#"{"pipe_speed": 5}"#).unwrap();
        assert_eq!(parsed.pipe_speed, 5);
        assert_eq!(parsed.screen_width, 400);
    }
}
