//! Frame-driven game loop
//!
//! Sits between the platform (pointer, confirm key, frame timer) and the
//! simulator: clamps bat input, drives the Start -> Playing -> End cycle and
//! ends the game once the batter runs out of outs.

use glam::Vec2;

use super::simulator::Simulator;
use super::state::{GamePhase, PitchOutcome};
use crate::tuning::Tuning;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer position to move the bat to (unclamped)
    pub bat_target: Option<Vec2>,
    /// Pointer is being dragged (only the x-limit applies)
    pub dragging: bool,
    /// Confirm (space) - advances Start and End screens
    pub confirm: bool,
    /// Idle/demo mode - AI swings the bat
    pub idle_mode: bool,
}

/// Advance the game by one frame.
///
/// Returns the outcome of a pitch that ended during this frame.
pub fn tick(sim: &mut Simulator, input: &TickInput, tuning: &Tuning) -> Option<PitchOutcome> {
    let mut input = input.clone();
    if input.idle_mode {
        match sim.current_game_state() {
            GamePhase::Start => input.confirm = true,
            GamePhase::Playing => {
                input.bat_target = Some(autoplay_target(sim, tuning));
                input.dragging = false;
            }
            GamePhase::End => {}
        }
    }
    let input = &input;

    if let Some(target) = input.bat_target {
        sim.update_bat_states(tuning.clamp_bat_target(target, input.dragging));
    }

    match sim.current_game_state() {
        GamePhase::Start => {
            if input.confirm {
                sim.increment_game_state();
                sim.reset_game();
            }
            None
        }

        GamePhase::Playing => {
            let outcome = sim.update_ball_states();

            if sim.outs() >= tuning.max_outs {
                log::info!(
                    "Game over: {:.0} ft in {} outs",
                    crate::display_feet(sim.score(), tuning.distance_scale),
                    sim.outs()
                );
                sim.increment_game_state();
            }
            outcome
        }

        GamePhase::End => {
            if input.confirm {
                sim.increment_game_state();
            }
            None
        }
    }
}

/// Pick a bat position for the demo batter.
///
/// Hovers a swing-length to the right of the incoming ball, then once the ball
/// is inside the hitting zone sweeps back across where it will be next tick.
fn autoplay_target(sim: &Simulator, tuning: &Tuning) -> Vec2 {
    let ball = sim.ball();
    if ball.has_collided() {
        return Vec2::new(sim.scene_width() * 0.75, sim.scene_height() / 2.0);
    }

    let reach = ball.radius() + sim.bat().radius();
    let swing_length = 2.0 * reach;
    let predicted = ball.position() + ball.velocity();

    if predicted.x < tuning.bat_min_x() + reach {
        Vec2::new(predicted.x + swing_length, predicted.y)
    } else {
        Vec2::new(predicted.x - swing_length, predicted.y)
    }
}
