//! Collision detection between the ball and a swinging bat
//!
//! The bat is only sampled once per tick, so a fast swing can jump clean over
//! the ball. Instead of testing the bat's position, we test the line segment it
//! swept since the last tick, then solve for the point where the bat circle
//! first touched the ball along that line.

use glam::Vec2;

use super::bat::Bat;

/// Swings shorter than this are treated as a stationary bat
const MIN_SWING_LENGTH_SQ: f32 = 1e-8;

/// The segment a bat travelled during the last tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swing {
    /// Where the bat was one tick ago
    pub start: Vec2,
    /// Where the bat is now
    pub end: Vec2,
}

impl Swing {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Reconstruct the swing from the bat's position and derived velocity
    pub fn from_bat(bat: &Bat) -> Self {
        Self {
            start: bat.position() - bat.velocity(),
            end: bat.position(),
        }
    }

    /// Direction and length of the swing
    #[inline]
    pub fn vector(&self) -> Vec2 {
        self.end - self.start
    }
}

/// Solve `a*x^2 + b*x + c = 0`.
///
/// Returns `(larger-sign root, smaller-sign root)` as `((-b + √d) / 2a, (-b - √d) / 2a)`,
/// or `None` when there is no real solution (negative or NaN discriminant,
/// or `a == 0`).
pub fn solve_quadratic(a: f32, b: f32, c: f32) -> Option<(f32, f32)> {
    if a == 0.0 {
        return None;
    }
    let discriminant = b * b - 4.0 * a * c;
    if discriminant.is_nan() || discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    Some(((-b + root) / (2.0 * a), (-b - root) / (2.0 * a)))
}

/// Check whether a swing reaches a ball.
///
/// Fires when either:
/// - the bat's current position already overlaps the ball, or
/// - the ball's projection onto the swing lies within the swing (leaving room
///   for the bat radius) and the ball center is within reach of the swing line.
pub fn swing_reaches_ball(swing: &Swing, ball_pos: Vec2, ball_radius: f32, bat_radius: f32) -> bool {
    let reach = ball_radius + bat_radius;

    if ball_pos.distance(swing.end) <= reach {
        return true;
    }

    let line = swing.vector();
    let len_sq = line.length_squared();
    if len_sq < MIN_SWING_LENGTH_SQ {
        // A bat that didn't move can only hit by overlapping
        return false;
    }

    let to_ball = ball_pos - swing.start;
    let projection = line * (to_ball.dot(line) / len_sq);
    let orthogonal = to_ball - projection;

    projection.length() + bat_radius <= len_sq.sqrt() && orthogonal.length() <= reach
}

/// Find where the bat first touched the ball along the swing.
///
/// Intersects the swing line `y = slope*x + intercept` with the circle of
/// radius `reach` around the ball and picks the intersection closest to the
/// swing start. A swing with no horizontal motion uses the bat's current
/// position directly. Returns `None` when the line misses the circle.
pub fn resolve_contact(swing: &Swing, ball_pos: Vec2, reach: f32) -> Option<Vec2> {
    let line = swing.vector();
    if line.x == 0.0 {
        return Some(swing.end);
    }

    let slope = line.y / line.x;
    let intercept = swing.start.y - slope * swing.start.x;

    let a = slope * slope + 1.0;
    let b = 2.0 * (slope * (intercept - ball_pos.y) - ball_pos.x);
    let c = ball_pos.y * ball_pos.y - reach * reach + ball_pos.x * ball_pos.x
        - 2.0 * ball_pos.y * intercept
        + intercept * intercept;

    let (x1, x2) = solve_quadratic(a, b, c)?;
    let on_line = |x: f32| Vec2::new(x, slope * (x - swing.start.x) + swing.start.y);
    let (first, second) = (on_line(x1), on_line(x2));

    if swing.start.distance(first) <= swing.start.distance(second) {
        Some(first)
    } else {
        Some(second)
    }
}
