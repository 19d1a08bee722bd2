//! Game controller
//!
//! Owns the ball, bat and scene frame, and is their only mutator. Each tick
//! while playing, the caller invokes `update_ball_states` once; input events
//! in between feed `update_bat_states`.
//!
//! The ball always bounces on the world ground. Following a struck ball only
//! scrolls the frame; an explicit `update_offset` is the one way to move the
//! ground the ball sees.

use glam::Vec2;

use super::ball::Ball;
use super::bat::Bat;
use super::frame::Frame;
use super::state::{FlightStats, GamePhase, PitchOutcome, Scoreboard};
use crate::consts::BALL_STOPPED_VELOCITY;
use crate::tuning::{Tuning, TuningError};

/// The home run derby simulation
#[derive(Debug, Clone)]
pub struct Simulator {
    scene_height: f32,
    scene_width: f32,
    ground_height: f32,
    phase: GamePhase,
    outs: u32,
    score: f32,
    high_score: f32,
    frame: Frame,
    ball: Ball,
    bat: Bat,
}

impl Simulator {
    /// Create a simulator in the Start phase. `seed` drives the pitches.
    ///
    /// Fails if `tuning` does not pass `Tuning::validate`.
    pub fn new(tuning: &Tuning, seed: u64) -> Result<Self, TuningError> {
        tuning.validate()?;
        let mut sim = Self {
            scene_height: tuning.scene_height,
            scene_width: tuning.scene_width(),
            ground_height: tuning.ground_height,
            phase: GamePhase::Start,
            outs: 0,
            score: 0.0,
            high_score: 0.0,
            frame: Frame::new(
                tuning.player_radius,
                tuning.scene_height,
                tuning.stretch_constant,
                tuning.ground_height,
            ),
            ball: Ball::new(tuning.ball_params(), seed),
            bat: Bat::new(tuning.bat_mass, tuning.bat_radius),
        };
        sim.sync_ground();
        Ok(sim)
    }

    /// Scroll the scene frame and re-sync the ground the ball bounces on
    pub fn update_offset(&mut self, offset: Vec2, velocity: Vec2) {
        self.frame.update(offset, velocity);
        self.sync_ground();
    }

    /// The frame and ball are not linked; every frame change goes through here
    fn sync_ground(&mut self) {
        self.ball.set_ground_y(self.frame.ground_y());
    }

    #[inline]
    fn scene_center(&self) -> Vec2 {
        Vec2::new(self.scene_width / 2.0, self.scene_height / 2.0)
    }

    /// Advance the ball one tick.
    ///
    /// Returns the outcome if the pitch ended during this tick.
    pub fn update_ball_states(&mut self) -> Option<PitchOutcome> {
        self.ball.update_states();

        let mut outcome = None;
        if self.ball.hit_past_screen() {
            // Follow the ball: keep it centered while the world scrolls past.
            // Only the picture moves; the ball keeps bouncing on the world ground.
            let offset = self.scene_center() - self.ball.position();
            self.frame.update(offset, -self.ball.velocity());
        } else {
            self.ball.handle_bat_collision(&self.bat);

            // Pitched past the right edge without a hit
            if self.ball.position().x >= self.scene_width + self.ball.radius() {
                outcome = Some(self.reset_states());
            }
        }

        // Rolled to a stop (or decelerated in flight)
        if self.ball.velocity().x.abs() <= BALL_STOPPED_VELOCITY {
            outcome = Some(self.reset_states());
        }
        outcome
    }

    /// Move the bat to a new (already clamped) position
    pub fn update_bat_states(&mut self, new_pos: Vec2) {
        self.bat.move_to(new_pos);
    }

    /// Advance to the next game phase
    pub fn increment_game_state(&mut self) {
        let next = self.phase.next();
        log::info!("Game phase {} -> {}", self.phase.as_str(), next.as_str());
        self.phase = next;
    }

    /// Score the finished pitch and queue up a new one
    pub fn reset_states(&mut self) -> PitchOutcome {
        let previous_high = self.high_score;
        let outcome = self.settle_pitch();
        match outcome {
            PitchOutcome::Hit { distance } => {
                if self.high_score > previous_high {
                    log::info!("New high score: {:.0}", self.high_score);
                }
                log::info!("Hit! {:.0} px (total {:.0})", distance, self.score);
            }
            PitchOutcome::Out => log::info!("Out {}", self.outs),
        }
        outcome
    }

    /// Bookkeeping behind `reset_states`, without the pitch log
    fn settle_pitch(&mut self) -> PitchOutcome {
        let outcome = if self.ball.hit_past_screen() {
            let distance = -self.ball.position().x;
            self.score += distance;
            self.high_score = self.high_score.max(self.score);
            PitchOutcome::Hit { distance }
        } else {
            self.outs += 1;
            PitchOutcome::Out
        };

        self.ball.reset_state();
        self.frame.reset_state();
        self.sync_ground();
        outcome
    }

    /// Start a fresh game, keeping the high score
    pub fn reset_game(&mut self) {
        // The pitch being cleared away is not part of the new game
        self.settle_pitch();
        self.outs = 0;
        self.score = 0.0;
        log::debug!("New game (high score {:.0})", self.high_score);
    }

    /// Where to draw the ball: the scene center once the camera is following it
    pub fn ball_display_position(&self) -> Vec2 {
        if self.ball.hit_past_screen() {
            self.scene_center()
        } else {
            self.ball.position()
        }
    }

    /// Distance and altitude of a struck ball, while it is in flight
    pub fn flight_stats(&self) -> Option<FlightStats> {
        if !self.ball.hit_past_screen() {
            return None;
        }
        let pos = self.ball.position();
        Some(FlightStats {
            distance: -pos.x,
            altitude: self.scene_height - self.ground_height - pos.y - self.ball.radius(),
        })
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            phase: self.phase,
            outs: self.outs,
            score: self.score,
            high_score: self.high_score,
        }
    }

    pub fn current_game_state(&self) -> GamePhase {
        self.phase
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bat(&self) -> &Bat {
        &self.bat
    }

    pub fn outs(&self) -> u32 {
        self.outs
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn high_score(&self) -> f32 {
        self.high_score
    }

    pub fn scene_width(&self) -> f32 {
        self.scene_width
    }

    pub fn scene_height(&self) -> f32 {
        self.scene_height
    }
}
