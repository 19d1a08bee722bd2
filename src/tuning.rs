//! Game tuning and input bounds
//!
//! Loaded from JSON so balance can change without a rebuild. Any field left
//! out of the file keeps its default.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::BallParams;

/// Errors from loading or validating tuning
#[derive(Debug)]
pub enum TuningError {
    /// Tuning file could not be read
    Io(std::io::Error),
    /// Tuning file is not valid JSON for `Tuning`
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid { field: &'static str, reason: &'static str },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TuningError::Io(e) => write!(f, "failed to read tuning: {}", e),
            TuningError::Parse(e) => write!(f, "failed to parse tuning: {}", e),
            TuningError::Invalid { field, reason } => write!(f, "invalid tuning `{}`: {}", field, reason),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TuningError::Io(e) => Some(e),
            TuningError::Parse(e) => Some(e),
            TuningError::Invalid { .. } => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        TuningError::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        TuningError::Parse(e)
    }
}

/// Game balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Scene ===
    pub scene_height: f32,
    pub stretch_constant: f32,
    pub ground_height: f32,
    pub player_radius: f32,

    // === Ball ===
    pub ball_mass: f32,
    pub ball_radius: f32,
    pub gravity: f32,
    pub ground_friction: f32,
    pub ground_restitution: f32,
    pub ball_speed_boost: f32,
    pub ball_terminal_velocity: f32,
    pub min_pitch_speed_x: f32,
    pub max_pitch_speed_x: f32,
    pub min_pitch_speed_y: f32,
    pub max_pitch_speed_y: f32,

    // === Bat ===
    pub bat_mass: f32,
    pub bat_radius: f32,
    /// Bat may not move left of scene_width / this factor
    pub bat_x_limit_factor: f32,

    // === Rules ===
    pub max_outs: u32,
    /// Pixels per foot for display
    pub distance_scale: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scene_height: SCENE_HEIGHT,
            stretch_constant: STRETCH_CONSTANT,
            ground_height: GROUND_HEIGHT,
            player_radius: PLAYER_RADIUS,

            ball_mass: BALL_MASS,
            ball_radius: BALL_RADIUS,
            gravity: GRAVITY,
            ground_friction: GROUND_FRICTION,
            ground_restitution: GROUND_RESTITUTION,
            ball_speed_boost: BALL_SPEED_BOOST,
            ball_terminal_velocity: BALL_TERMINAL_VELOCITY,
            min_pitch_speed_x: MIN_PITCH_SPEED_X,
            max_pitch_speed_x: MAX_PITCH_SPEED_X,
            min_pitch_speed_y: MIN_PITCH_SPEED_Y,
            max_pitch_speed_y: MAX_PITCH_SPEED_Y,

            bat_mass: BAT_MASS,
            bat_radius: BAT_RADIUS,
            bat_x_limit_factor: BAT_X_LIMIT_FACTOR,

            max_outs: MAX_OUTS,
            distance_scale: DISTANCE_SCALE,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Read, parse and validate a tuning file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning");
        Ok(tuning)
    }

    /// Check every value is usable by the simulation
    pub fn validate(&self) -> Result<(), TuningError> {
        fn positive(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid { field, reason: "must be positive" })
            }
        }
        fn non_negative(field: &'static str, value: f32) -> Result<(), TuningError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(TuningError::Invalid { field, reason: "must not be negative" })
            }
        }
        fn fraction(field: &'static str, value: f32) -> Result<(), TuningError> {
            if (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(TuningError::Invalid { field, reason: "must be between 0 and 1" })
            }
        }

        positive("scene_height", self.scene_height)?;
        positive("stretch_constant", self.stretch_constant)?;
        non_negative("ground_height", self.ground_height)?;
        non_negative("player_radius", self.player_radius)?;

        positive("ball_mass", self.ball_mass)?;
        positive("ball_radius", self.ball_radius)?;
        non_negative("gravity", self.gravity)?;
        fraction("ground_friction", self.ground_friction)?;
        fraction("ground_restitution", self.ground_restitution)?;
        non_negative("ball_speed_boost", self.ball_speed_boost)?;
        positive("ball_terminal_velocity", self.ball_terminal_velocity)?;
        non_negative("min_pitch_speed_x", self.min_pitch_speed_x)?;
        non_negative("max_pitch_speed_x", self.max_pitch_speed_x)?;
        non_negative("min_pitch_speed_y", self.min_pitch_speed_y)?;
        non_negative("max_pitch_speed_y", self.max_pitch_speed_y)?;
        if self.min_pitch_speed_x > self.max_pitch_speed_x {
            return Err(TuningError::Invalid { field: "min_pitch_speed_x", reason: "exceeds max_pitch_speed_x" });
        }
        if self.min_pitch_speed_y > self.max_pitch_speed_y {
            return Err(TuningError::Invalid { field: "min_pitch_speed_y", reason: "exceeds max_pitch_speed_y" });
        }

        positive("bat_mass", self.bat_mass)?;
        positive("bat_radius", self.bat_radius)?;
        positive("bat_x_limit_factor", self.bat_x_limit_factor)?;

        if self.max_outs == 0 {
            return Err(TuningError::Invalid { field: "max_outs", reason: "must be at least 1" });
        }
        positive("distance_scale", self.distance_scale)?;
        Ok(())
    }

    #[inline]
    pub fn scene_width(&self) -> f32 {
        self.scene_height * self.stretch_constant
    }

    /// Ball physics for this tuning
    pub fn ball_params(&self) -> BallParams {
        BallParams {
            mass: self.ball_mass,
            radius: self.ball_radius,
            gravity: self.gravity,
            friction: self.ground_friction,
            restitution: self.ground_restitution,
            boost_factor: self.ball_speed_boost,
            terminal_velocity: self.ball_terminal_velocity,
            min_pitch_x: self.min_pitch_speed_x,
            max_pitch_x: self.max_pitch_speed_x,
            min_pitch_y: self.min_pitch_speed_y,
            max_pitch_y: self.max_pitch_speed_y,
            scene_height: self.scene_height,
        }
    }

    /// Leftmost x the bat may reach
    #[inline]
    pub fn bat_min_x(&self) -> f32 {
        self.scene_width() / self.bat_x_limit_factor
    }

    /// Clamp a pointer position to where the bat is allowed to be.
    ///
    /// The bat always stays right of `bat_min_x`. While hovering it also stays
    /// between the top of the scene and the grass; a drag only clamps x.
    pub fn clamp_bat_target(&self, target: Vec2, dragging: bool) -> Vec2 {
        let x = target.x.max(self.bat_min_x());
        if dragging {
            return Vec2::new(x, target.y);
        }
        let max_y = self.scene_height - self.bat_radius - self.ground_height;
        Vec2::new(x, target.y.max(self.bat_radius).min(max_y))
    }
}
