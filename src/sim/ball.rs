//! The pitched baseball
//!
//! Owns the ball's kinematics: gravity with a terminal velocity, bouncing off
//! the ground line, pitch randomization, and the response to a bat hit.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::bat::Bat;
use super::collision::{Swing, resolve_contact, swing_reaches_ball};

/// Below this squared distance the impulse direction is undefined
const MIN_CONTACT_DISTANCE_SQ: f32 = 1e-8;

/// Physical constants for a ball (immutable after construction)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallParams {
    pub mass: f32,
    pub radius: f32,
    /// Added to y-velocity every tick
    pub gravity: f32,
    /// Fraction of x-velocity lost on each bounce
    pub friction: f32,
    /// Fraction of y-velocity kept (and reversed) on each bounce
    pub restitution: f32,
    /// Multiplier on the velocity change from a bat hit
    pub boost_factor: f32,
    /// Maximum downward y-velocity
    pub terminal_velocity: f32,
    pub min_pitch_x: f32,
    pub max_pitch_x: f32,
    pub min_pitch_y: f32,
    pub max_pitch_y: f32,
    /// Scene height; pitches start at half of it
    pub scene_height: f32,
}

/// A baseball
#[derive(Debug, Clone)]
pub struct Ball {
    params: BallParams,
    /// y-coordinate of the ground line the ball bounces on
    pub(crate) ground_y: f32,
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    /// Set once the bat has hit this pitch
    pub(crate) has_collided: bool,
    rng: Pcg32,
}

impl Ball {
    /// Create a ball ready to be pitched.
    ///
    /// The ground starts infinitely far down until `set_ground_y` is called.
    /// Pitch ranges must be finite with `min <= max`; `Tuning::validate`
    /// guarantees this for params built by `Tuning::ball_params`.
    pub fn new(params: BallParams, seed: u64) -> Self {
        let mut ball = Self {
            params,
            ground_y: f32::INFINITY,
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            has_collided: false,
            rng: Pcg32::seed_from_u64(seed),
        };
        ball.reset_state();
        ball
    }

    /// Bounce off the ground if touching it while falling
    pub fn handle_ground_collision(&mut self) {
        if self.pos.y + self.params.radius >= self.ground_y && self.vel.y > 0.0 {
            self.vel.x *= 1.0 - self.params.friction;
            self.vel.y *= -self.params.restitution;
        }
    }

    /// Advance the ball one tick
    pub fn update_states(&mut self) {
        // Bounce before moving so a ball resting on the ground never sinks
        self.handle_ground_collision();
        self.pos += self.vel;
        self.vel.y = (self.vel.y + self.params.gravity).min(self.params.terminal_velocity);
    }

    /// Collide with the bat's last swing, at most once per pitch.
    ///
    /// Returns true if the bat hit the ball this call.
    pub fn handle_bat_collision(&mut self, bat: &Bat) -> bool {
        if self.has_collided {
            return false;
        }

        let swing = Swing::from_bat(bat);
        if !swing_reaches_ball(&swing, self.pos, self.params.radius, bat.radius()) {
            return false;
        }

        let reach = self.params.radius + bat.radius();
        let Some(contact) = resolve_contact(&swing, self.pos, reach) else {
            return false;
        };

        if !self.update_speed_on_collision(bat, contact) {
            return false;
        }
        self.has_collided = true;
        log::debug!(
            "Bat contact at ({:.1}, {:.1}), exit velocity ({:.2}, {:.2})",
            contact.x,
            contact.y,
            self.vel.x,
            self.vel.y
        );
        true
    }

    /// Apply a 1D elastic collision along the line from `contact` to the ball
    /// center, scaled by the boost factor.
    ///
    /// Returns false (leaving the velocity untouched) if `contact` coincides
    /// with the ball center.
    pub fn update_speed_on_collision(&mut self, bat: &Bat, contact: Vec2) -> bool {
        let normal = self.pos - contact;
        let dist_sq = normal.length_squared();
        if dist_sq < MIN_CONTACT_DISTANCE_SQ {
            return false;
        }

        let mass_ratio = 2.0 * bat.mass() / (self.params.mass + bat.mass());
        let closing = (self.vel - bat.velocity()).dot(normal) / dist_sq;
        self.vel -= self.params.boost_factor * mass_ratio * closing * normal;
        true
    }

    /// Put the ball back off the left edge, ready for a fresh pitch
    pub fn reset_state(&mut self) {
        self.has_collided = false;
        self.pos = Vec2::new(-self.params.radius, self.params.scene_height / 2.0);
        self.reset_pitch_velocity();
    }

    /// Draw a new pitch velocity: rightward and upward
    pub fn reset_pitch_velocity(&mut self) {
        let p = &self.params;
        self.vel = Vec2::new(
            self.rng.random_range(p.min_pitch_x..=p.max_pitch_x),
            self.rng.random_range(-p.max_pitch_y..=-p.min_pitch_y),
        );
        log::debug!("Pitch velocity ({:.2}, {:.2})", self.vel.x, self.vel.y);
    }

    /// True once a struck ball has crossed the left edge of the scene
    pub fn hit_past_screen(&self) -> bool {
        self.has_collided && self.pos.x < 0.0
    }

    pub fn set_ground_y(&mut self, ground_y: f32) {
        self.ground_y = ground_y;
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.params.radius
    }

    pub fn mass(&self) -> f32 {
        self.params.mass
    }

    pub fn has_collided(&self) -> bool {
        self.has_collided
    }

    pub fn params(&self) -> &BallParams {
        &self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params() -> BallParams {
        BallParams {
            mass: 1.0,
            radius: 5.0,
            gravity: 0.6,
            friction: 0.1,
            restitution: 0.2,
            boost_factor: 1.0,
            terminal_velocity: 25.0,
            min_pitch_x: 2.0,
            max_pitch_x: 2.0,
            min_pitch_y: 3.0,
            max_pitch_y: 3.0,
            scene_height: 100.0,
        }
    }

    /// Pitched from (-5, 50) at (2, -3) with the ground at y = 80
    fn test_ball() -> Ball {
        let mut ball = Ball::new(params(), 7);
        ball.set_ground_y(80.0);
        ball
    }

    /// A bat at `pos` that moved by `vel` during the last tick
    fn swung_bat(pos: Vec2, vel: Vec2) -> Bat {
        let mut bat = Bat::new(1.0, 1.0);
        bat.move_to(pos - vel);
        bat.move_to(pos);
        bat
    }

    fn approx(a: f32, b: f32, eps: f32) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_drop_and_bounce() {
        let mut ball = test_ball();
        for _ in 0..6 {
            assert!(ball.velocity().y <= 0.0);
            ball.update_states();
        }
        for _ in 0..12 {
            assert!(ball.velocity().y >= 0.0);
            ball.update_states();
        }

        assert!(approx(ball.velocity().x, 1.8, 0.01));
        assert!(approx(ball.velocity().y, -0.84, 0.01));
        assert!(approx(ball.position().x, 30.8, 0.05));
        assert!(approx(ball.position().y, 79.16, 0.05));
    }

    #[test]
    fn test_reset_state() {
        let mut ball = test_ball();
        for _ in 0..5 {
            ball.update_states();
        }
        assert_ne!(ball.position(), Vec2::new(-5.0, 50.0));

        ball.reset_state();
        assert_eq!(ball.position(), Vec2::new(-5.0, 50.0));
        assert_eq!(ball.velocity(), Vec2::new(2.0, -3.0));
        assert!(!ball.has_collided());
    }

    #[test]
    fn test_gravity() {
        let mut ball = test_ball();
        let initial = ball.velocity().y;
        ball.update_states();
        assert!(approx(ball.velocity().y, initial + 0.6, 1e-6));
        assert_eq!(ball.position(), Vec2::new(-3.0, 47.0));
    }

    #[test]
    fn test_restitution() {
        let mut ball = test_ball();
        for _ in 0..17 {
            ball.update_states();
        }
        let initial = ball.velocity().y;
        ball.update_states();
        assert!(approx(ball.velocity().y, -0.2 * initial + 0.6, 1e-4));
        assert!(approx(ball.position().x, 30.8, 0.05));
        assert!(approx(ball.position().y, 79.16, 0.05));
    }

    #[test]
    fn test_friction() {
        let mut ball = test_ball();
        ball.update_states();
        let initial = ball.velocity().x;
        for _ in 0..19 {
            ball.update_states();
        }
        assert!(approx(ball.velocity().x, 0.9 * initial, 1e-5));
        assert!(approx(ball.position().x, 34.4, 0.05));
        assert!(approx(ball.position().y, 78.08, 0.05));
    }

    #[test]
    fn test_terminal_velocity() {
        let mut ball = Ball::new(
            BallParams {
                gravity: 1.0,
                boost_factor: 0.1,
                terminal_velocity: 1.0,
                scene_height: 1000.0,
                ..params()
            },
            1,
        );
        ball.set_ground_y(970.0);
        for _ in 0..30 {
            ball.update_states();
        }
        assert_eq!(ball.velocity().y, 1.0);
    }

    #[test]
    fn test_bat_collision_linear() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-4.5, 50.0), Vec2::new(-2.0, 0.0));
        ball.update_states();
        assert!(ball.handle_bat_collision(&bat));
        assert!(approx(ball.velocity().x, 0.0392, 1e-3));
        assert!(approx(ball.velocity().y, -3.532, 1e-3));
    }

    #[test]
    fn test_bat_collision_non_linear() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-4.5, 50.0), Vec2::new(-2.0, -1.0));
        ball.update_states();
        assert!(ball.handle_bat_collision(&bat));
        assert!(approx(ball.velocity().x, 1.633, 1e-3));
        assert!(approx(ball.velocity().y, -3.051, 1e-3));
    }

    #[test]
    fn test_bat_collision_zero_x_speed_uses_bat_position() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-4.5, 50.0), Vec2::new(0.0, -1.0));
        ball.update_states();
        assert!(ball.handle_bat_collision(&bat));
        // Contact at the bat's current position (-4.5, 50)
        assert!(approx(ball.velocity().x, 1.04, 1e-3));
        assert!(approx(ball.velocity().y, -0.48, 1e-3));
    }

    #[test]
    fn test_bat_collision_end_point_overlaps() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-5.0, 50.0), Vec2::new(-10.0, -1.0));
        assert!(ball.handle_bat_collision(&bat));
        assert!(approx(ball.velocity().x, -9.683, 1e-3));
        assert!(approx(ball.velocity().y, -4.168, 1e-3));
    }

    #[test]
    fn test_bat_collision_end_point_goes_past() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-10.0, 50.0), Vec2::new(-20.0, -5.0));
        assert!(ball.handle_bat_collision(&bat));
        assert!(approx(ball.velocity().x, -16.645, 1e-3));
        assert!(approx(ball.velocity().y, -11.972, 1e-3));
    }

    #[test]
    fn test_bat_collision_only_once_per_pitch() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-4.5, 50.0), Vec2::new(-2.0, 0.0));
        ball.update_states();
        assert!(ball.handle_bat_collision(&bat));
        let after_hit = ball.velocity();

        // Same swing again, and a second swing straight through the ball
        assert!(!ball.handle_bat_collision(&bat));
        let through = swung_bat(ball.position(), Vec2::new(-10.0, 0.0));
        assert!(!ball.handle_bat_collision(&through));
        assert_eq!(ball.velocity(), after_hit);

        ball.reset_state();
        assert!(!ball.has_collided());
    }

    #[test]
    fn test_bat_miss_leaves_ball_alone() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(60.0, 20.0), Vec2::new(-5.0, 0.0));
        assert!(!ball.handle_bat_collision(&bat));
        assert!(!ball.has_collided());
        assert_eq!(ball.velocity(), Vec2::new(2.0, -3.0));
    }

    #[test]
    fn test_degenerate_contact_skips_impulse() {
        let mut ball = test_ball();
        let bat = swung_bat(Vec2::new(-4.5, 50.0), Vec2::new(-2.0, 0.0));
        let before = ball.velocity();
        assert!(!ball.update_speed_on_collision(&bat, ball.position()));
        assert_eq!(ball.velocity(), before);
    }

    #[test]
    fn test_bat_ending_on_ball_center_is_not_a_hit() {
        let mut ball = test_ball();
        // Straight-down swing that stops exactly on the ball center
        let bat = swung_bat(ball.position(), Vec2::new(0.0, 3.0));
        let before = ball.velocity();
        assert!(!ball.handle_bat_collision(&bat));
        assert!(!ball.has_collided());
        assert_eq!(ball.velocity(), before);
    }

    #[test]
    fn test_hit_past_screen() {
        let mut ball = test_ball();
        // Unstruck ball off the left edge is not a hit
        assert!(ball.position().x < 0.0);
        assert!(!ball.hit_past_screen());

        let bat = swung_bat(Vec2::new(-5.0, 50.0), Vec2::new(-10.0, -1.0));
        assert!(ball.handle_bat_collision(&bat));
        assert!(ball.hit_past_screen());
    }

    proptest! {
        #[test]
        fn prop_gravity_clamped_without_bounce(
            vx in -20.0f32..20.0,
            vy in -30.0f32..30.0,
            gravity in 0.01f32..2.0,
            terminal in 1.0f32..40.0,
        ) {
            let mut ball = Ball::new(BallParams { gravity, terminal_velocity: terminal, ..params() }, 3);
            ball.vel = Vec2::new(vx, vy);
            ball.update_states();
            prop_assert_eq!(ball.velocity().y, (vy + gravity).min(terminal));
            prop_assert_eq!(ball.velocity().x, vx);
        }

        #[test]
        fn prop_ground_bounce_flips_sign(
            vx in -20.0f32..20.0,
            vy in 0.01f32..30.0,
            depth in 0.0f32..10.0,
        ) {
            let mut ball = test_ball();
            ball.pos = Vec2::new(10.0, 80.0 - 5.0 + depth);
            ball.vel = Vec2::new(vx, vy);
            ball.handle_ground_collision();
            prop_assert!(ball.velocity().y <= 0.0);
            prop_assert!(approx(ball.velocity().y.abs(), 0.2 * vy, 1e-4));
            prop_assert!(approx(ball.velocity().x, 0.9 * vx, 1e-4));
        }

        #[test]
        fn prop_pitch_within_bounds(seed in any::<u64>()) {
            let p = BallParams {
                min_pitch_x: 13.0,
                max_pitch_x: 15.0,
                min_pitch_y: 4.0,
                max_pitch_y: 7.0,
                ..params()
            };
            let mut ball = Ball::new(p, seed);
            for _ in 0..20 {
                ball.reset_pitch_velocity();
                let v = ball.velocity();
                prop_assert!((13.0..=15.0).contains(&v.x));
                prop_assert!((-7.0..=-4.0).contains(&v.y));
            }
        }
    }
}
