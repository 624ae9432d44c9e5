use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{ConfigError, Params, Side};

/// Paddle-contact deflection tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Deflection {
    /// Multiplier applied to the baseline vertical speed at a full-edge hit
    pub gain: f64,
    /// Hard ceiling on vertical speed after a deflection (units per tick)
    pub max_speed: i32,
}

impl Default for Deflection {
    fn default() -> Self {
        Self {
            gain: Params::DEFLECTION_GAIN,
            max_speed: Params::DEFLECTION_MAX_SPEED,
        }
    }
}

/// Game configuration
///
/// Every field has a default from [`Params`], so a JSON file only needs to
/// name the fields it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub field_width: i32,
    pub field_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub player_speed: i32,
    pub opponent_speed: i32,
    pub ball_size: i32,
    pub ball_speed_x: i32,
    pub ball_speed_y: i32,
    pub dead_zone: i32,
    pub deflection: Deflection,
    pub tick_rate: u32,
    pub score_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_speed: Params::PLAYER_SPEED,
            opponent_speed: Params::OPPONENT_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_SPEED_X,
            ball_speed_y: Params::BALL_SPEED_Y,
            dead_zone: Params::DEAD_ZONE,
            deflection: Deflection::default(),
            tick_rate: Params::TICK_RATE,
            score_pause_ms: Params::SCORE_PAUSE_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Check the geometric and speed constraints the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.field_width <= 0 {
            return Err(ConfigError::invalid("field_width", "must be positive"));
        }
        if self.field_height <= 0 {
            return Err(ConfigError::invalid("field_height", "must be positive"));
        }
        if self.paddle_width <= 0 {
            return Err(ConfigError::invalid("paddle_width", "must be positive"));
        }
        if self.paddle_height <= 0 {
            return Err(ConfigError::invalid("paddle_height", "must be positive"));
        }
        if self.paddle_height > self.field_height {
            return Err(ConfigError::invalid(
                "paddle_height",
                "must not exceed field_height",
            ));
        }
        if self.ball_size <= 0 {
            return Err(ConfigError::invalid("ball_size", "must be positive"));
        }
        if self.ball_size > self.field_height || self.ball_size > self.field_width {
            return Err(ConfigError::invalid("ball_size", "must fit inside the field"));
        }
        if self.paddle_margin < 0 {
            return Err(ConfigError::invalid("paddle_margin", "must not be negative"));
        }
        if 2 * (self.paddle_margin + self.paddle_width) >= self.field_width {
            return Err(ConfigError::invalid(
                "paddle_margin",
                "paddles must sit apart inside the field",
            ));
        }
        if self.player_speed < 0 {
            return Err(ConfigError::invalid("player_speed", "must not be negative"));
        }
        if self.opponent_speed < 0 {
            return Err(ConfigError::invalid("opponent_speed", "must not be negative"));
        }
        if self.ball_speed_x <= 0 {
            return Err(ConfigError::invalid("ball_speed_x", "must be positive"));
        }
        if self.ball_speed_y < 0 {
            return Err(ConfigError::invalid("ball_speed_y", "must not be negative"));
        }
        if self.dead_zone < 0 {
            return Err(ConfigError::invalid("dead_zone", "must not be negative"));
        }
        if !self.deflection.gain.is_finite() || self.deflection.gain < 0.0 {
            return Err(ConfigError::invalid(
                "deflection.gain",
                "must be finite and not negative",
            ));
        }
        if self.deflection.max_speed < 0 {
            return Err(ConfigError::invalid(
                "deflection.max_speed",
                "must not be negative",
            ));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::invalid("tick_rate", "must be positive"));
        }
        Ok(())
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.paddle_margin,
            Side::Opponent => self.field_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge that vertically centers a paddle
    pub fn paddle_spawn_y(&self) -> i32 {
        self.field_height / 2 - self.paddle_height / 2
    }

    /// Baseline paddle speed for a side
    pub fn paddle_speed(&self, side: Side) -> i32 {
        match side {
            Side::Player => self.player_speed,
            Side::Opponent => self.opponent_speed,
        }
    }

    /// Nominal wall-clock length of one tick
    pub fn tick_duration(&self) -> Duration {
        Duration::from_secs(1) / self.tick_rate.max(1)
    }

    /// Presentation pause after a point is scored
    pub fn score_pause(&self) -> Duration {
        Duration::from_millis(self.score_pause_ms)
    }
}
