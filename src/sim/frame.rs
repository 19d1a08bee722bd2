//! Scrolling scene frame
//!
//! Everything the renderer draws relative to the camera is recomputed from
//! the frame offset: the ground band the ball bounces on, the dirt below it,
//! and the batter standing at the right edge.

use glam::Vec2;

/// Scene geometry shifted by the current camera offset
#[derive(Debug, Clone)]
pub struct Frame {
    player_radius: f32,
    scene_height: f32,
    stretch_constant: f32,
    ground_height: f32,
    offset: Vec2,
    /// Camera velocity for the last update, exposed for the renderer
    velocity: Vec2,
    player_head: Vec2,
    player_body: Vec2,
    /// Top-left and bottom-right corners of the grass band
    ground: (Vec2, Vec2),
    /// Top-left and bottom-right corners of the dirt band
    dirt: (Vec2, Vec2),
}

impl Frame {
    pub fn new(player_radius: f32, scene_height: f32, stretch_constant: f32, ground_height: f32) -> Self {
        let mut frame = Self {
            player_radius,
            scene_height,
            stretch_constant,
            ground_height,
            offset: Vec2::ZERO,
            velocity: Vec2::ZERO,
            player_head: Vec2::ZERO,
            player_body: Vec2::ZERO,
            ground: (Vec2::ZERO, Vec2::ZERO),
            dirt: (Vec2::ZERO, Vec2::ZERO),
        };
        frame.reset_state();
        frame
    }

    #[inline]
    pub fn scene_width(&self) -> f32 {
        self.scene_height * self.stretch_constant
    }

    /// Apply a new camera offset and recompute all derived geometry
    pub fn update(&mut self, offset: Vec2, velocity: Vec2) {
        self.offset = offset;
        self.velocity = velocity;

        let width = self.scene_width();
        let ground_top = offset.y + self.scene_height - self.ground_height;
        let batter_x = offset.x + width - 2.0 * self.player_radius;

        self.player_head = Vec2::new(batter_x, ground_top - self.player_radius);
        self.player_body = Vec2::new(batter_x, ground_top - 2.5 * self.player_radius);
        // The ground never scrolls horizontally
        self.ground = (
            Vec2::new(0.0, ground_top),
            Vec2::new(width, offset.y + self.scene_height),
        );
        self.dirt = (
            Vec2::new(0.0, offset.y + self.scene_height),
            Vec2::new(width, self.scene_height),
        );
    }

    /// Return the camera to the origin
    pub fn reset_state(&mut self) {
        self.update(Vec2::ZERO, Vec2::ZERO);
    }

    /// y-coordinate of the top of the ground band
    #[inline]
    pub fn ground_y(&self) -> f32 {
        self.ground.0.y
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn ground(&self) -> (Vec2, Vec2) {
        self.ground
    }

    pub fn dirt(&self) -> (Vec2, Vec2) {
        self.dirt
    }

    pub fn player_head(&self) -> Vec2 {
        self.player_head
    }

    pub fn player_body(&self) -> Vec2 {
        self.player_body
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_frame() -> Frame {
        Frame::new(10.0, 1080.0, 16.0 / 9.0, 30.0)
    }

    #[test]
    fn test_geometry_without_offset() {
        let frame = test_frame();
        assert_eq!(frame.player_head(), Vec2::new(1900.0, 1040.0));
        assert_eq!(frame.player_body(), Vec2::new(1900.0, 1025.0));
        assert_eq!(frame.ground(), (Vec2::new(0.0, 1050.0), Vec2::new(1920.0, 1080.0)));
        assert_eq!(frame.dirt(), (Vec2::new(0.0, 1080.0), Vec2::new(1920.0, 1080.0)));
        assert_eq!(frame.ground_y(), 1050.0);
    }

    #[test]
    fn test_geometry_with_offset() {
        let mut frame = test_frame();
        frame.update(Vec2::new(10.0, 20.0), Vec2::new(2.0, 3.0));
        assert_eq!(frame.player_head(), Vec2::new(1910.0, 1060.0));
        assert_eq!(frame.player_body(), Vec2::new(1910.0, 1045.0));
        assert_eq!(frame.ground(), (Vec2::new(0.0, 1070.0), Vec2::new(1920.0, 1100.0)));
        assert_eq!(frame.dirt(), (Vec2::new(0.0, 1100.0), Vec2::new(1920.0, 1080.0)));
        assert_eq!(frame.offset(), Vec2::new(10.0, 20.0));
        assert_eq!(frame.velocity(), Vec2::new(2.0, 3.0));
    }

    #[test]
    fn test_ground_tracks_offset() {
        let mut frame = test_frame();
        for y in [-500.0, -1.5, 0.0, 42.0, 9000.0] {
            frame.update(Vec2::new(123.0, y), Vec2::ZERO);
            assert_eq!(frame.ground_y(), y + 1080.0 - 30.0);
            // x-span is pinned to the scene width
            assert_eq!(frame.ground().0.x, 0.0);
            assert_eq!(frame.ground().1.x, 1920.0);
        }
    }

    #[test]
    fn test_reset_state() {
        let mut frame = test_frame();
        frame.update(Vec2::new(-300.0, 250.0), Vec2::new(-4.0, 1.0));
        frame.reset_state();
        assert_eq!(frame.offset(), Vec2::ZERO);
        assert_eq!(frame.velocity(), Vec2::ZERO);
        assert_eq!(frame.ground_y(), 1050.0);
    }
}
