use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub wall_thickness: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_margin: f32,
    pub band_near: f32,
    pub band_far: f32,
    pub ball_size: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_margin: Params::PADDLE_MARGIN,
            band_near: Params::BAND_NEAR,
            band_far: Params::BAND_FAR,
            ball_size: Params::BALL_SIZE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position for a paddle's left edge
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Spawn position for a paddle: fixed x, vertically centred
    pub fn paddle_spawn(&self, side: Side) -> Vec2 {
        Vec2::new(self.paddle_x(side), self.screen_height / 2.0)
    }

    /// Clamp paddle Y so the paddle stays between the walls
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(
            half_height + self.wall_thickness,
            self.screen_height - half_height - self.wall_thickness,
        )
    }

    /// X range within which a ball qualifies for the paddle collision test,
    /// mirrored off the near vertical screen edge
    pub fn collision_band(&self, side: Side) -> (f32, f32) {
        match side {
            Side::Left => (self.band_near, self.band_far),
            Side::Right => (
                self.screen_width - self.band_far,
                self.screen_width - self.band_near,
            ),
        }
    }

    /// Initial (position, velocity) pairs for the two balls
    pub fn ball_spawns(&self) -> [(Vec2, Vec2); 2] {
        let centre = Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0);
        [
            (centre, Vec2::new(-Params::BALL_SPEED_X, Params::BALL_SPEED_Y)),
            (
                centre - Vec2::new(0.0, 2.0 * self.wall_thickness),
                Vec2::new(Params::BALL_SPEED_X, -Params::BALL_SPEED_Y),
            ),
        ]
    }
}
