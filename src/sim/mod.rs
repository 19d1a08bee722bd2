//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `Simulator::update_ball_states` per tick (unit timestep)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod bat;
pub mod collision;
pub mod frame;
pub mod simulator;
pub mod state;
pub mod tick;

pub use ball::{Ball, BallParams};
pub use bat::Bat;
pub use collision::{Swing, resolve_contact, solve_quadratic};
pub use frame::Frame;
pub use simulator::Simulator;
pub use state::{FlightStats, GamePhase, PitchOutcome, Scoreboard};
pub use tick::{TickInput, tick};
