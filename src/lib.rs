//! Home Run Derby - a 2D batting game core
//!
//! Core modules:
//! - `sim`: Simulation (ball physics, swept bat collisions, scoring, game state)
//! - `tuning`: Data-driven game balance and input bounds
//!
//! Coordinates follow screen convention: x grows to the right, y grows
//! downward, so gravity adds to y-velocity and "up" is negative y.

pub mod sim;
pub mod tuning;

pub use sim::{Ball, Bat, Frame, GamePhase, PitchOutcome, Simulator};
pub use tuning::{Tuning, TuningError};

/// Default game configuration constants
pub mod consts {
    /// Scene height in pixels (also the ball's vertical reference)
    pub const SCENE_HEIGHT: f32 = 1000.0;
    /// Horizontal stretch of the scene (width = height * stretch)
    pub const STRETCH_CONSTANT: f32 = 16.0 / 9.0;
    /// Height of the grass band above the bottom of the scene
    pub const GROUND_HEIGHT: f32 = 70.0;
    /// Radius of the batter's head
    pub const PLAYER_RADIUS: f32 = 90.0;

    /// Ball defaults
    pub const BALL_MASS: f32 = 10.0;
    pub const BALL_RADIUS: f32 = 50.0;
    /// Gravity added to y-velocity every tick
    pub const GRAVITY: f32 = 0.09;
    pub const GROUND_FRICTION: f32 = 0.1;
    pub const GROUND_RESTITUTION: f32 = 0.4;
    /// Multiplier on the velocity change imparted by a bat hit
    pub const BALL_SPEED_BOOST: f32 = 1.5;
    pub const BALL_TERMINAL_VELOCITY: f32 = 1000.0;

    /// Pitch speed bounds (pixels per tick)
    pub const MIN_PITCH_SPEED_X: f32 = 13.0;
    pub const MAX_PITCH_SPEED_X: f32 = 15.0;
    pub const MIN_PITCH_SPEED_Y: f32 = 4.0;
    pub const MAX_PITCH_SPEED_Y: f32 = 7.0;

    /// Bat defaults
    pub const BAT_MASS: f32 = 5.0;
    pub const BAT_RADIUS: f32 = 15.0;
    /// Bat may not move left of scene_width / this factor
    pub const BAT_X_LIMIT_FACTOR: f32 = 3.0;

    /// Outs per game
    pub const MAX_OUTS: u32 = 10;
    /// Pixels per foot when displaying distances
    pub const DISTANCE_SCALE: f32 = 50.0;

    /// Horizontal speed at or below which the ball counts as stopped
    pub const BALL_STOPPED_VELOCITY: f32 = 0.02;
}

/// Convert a distance in pixels to whole feet for display.
///
/// Negative totals (possible internally when a struck ball rolls back past the
/// plate) display as zero.
#[inline]
pub fn display_feet(distance: f32, distance_scale: f32) -> f32 {
    (distance.max(0.0) / distance_scale).round()
}
