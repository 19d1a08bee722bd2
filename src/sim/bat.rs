//! The user-controlled bat

use glam::Vec2;

/// A circular bat whose velocity is the delta between its last two positions.
#[derive(Debug, Clone)]
pub struct Bat {
    mass: f32,
    radius: f32,
    pos: Vec2,
    vel: Vec2,
}

impl Bat {
    pub fn new(mass: f32, radius: f32) -> Self {
        Self {
            mass,
            radius,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
        }
    }

    /// Move the bat, deriving its velocity from the previous position.
    ///
    /// This is the only way to change the bat's velocity: the swept collision
    /// treats `position - velocity` as the start of the swing.
    pub fn move_to(&mut self, new_pos: Vec2) {
        self.vel = new_pos - self.pos;
        self.pos = new_pos;
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }
}
