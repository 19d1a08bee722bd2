//! Game state types shared by the simulator and its callers

use serde::{Deserialize, Serialize};

/// Current phase of the game, cycling Start -> Playing -> End -> Start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for confirm
    #[default]
    Start,
    /// Pitches are being thrown
    Playing,
    /// Out of outs, showing the final distance
    End,
}

impl GamePhase {
    pub const COUNT: usize = 3;

    /// The following phase (wraps End back to Start)
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Numeric phase: 0 = Start, 1 = Playing, 2 = End
    pub fn index(self) -> usize {
        match self {
            GamePhase::Start => 0,
            GamePhase::Playing => 1,
            GamePhase::End => 2,
        }
    }

    /// Phase for an index, taken modulo the number of phases
    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => GamePhase::Start,
            1 => GamePhase::Playing,
            _ => GamePhase::End,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Start => "Start",
            GamePhase::Playing => "Playing",
            GamePhase::End => "End",
        }
    }
}

/// How a pitch ended
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PitchOutcome {
    /// Missed, or hit without leaving the left edge
    Out,
    /// Struck past the left edge; distance travelled left of x = 0
    Hit { distance: f32 },
}

/// Live numbers for a struck ball in flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightStats {
    /// Distance travelled left of the scene edge
    pub distance: f32,
    /// Height of the ball's underside above the ground
    pub altitude: f32,
}

/// Read-only snapshot for a HUD
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub phase: GamePhase,
    pub outs: u32,
    pub score: f32,
    pub high_score: f32,
}

impl Scoreboard {
    /// The finished game set the high score
    pub fn is_new_high_score(&self) -> bool {
        self.score == self.high_score && self.score != 0.0
    }
}
