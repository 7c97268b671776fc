//! Arena geometry: the fixed wall rectangles and the conversion from entity
//! positions to drawable rectangles.

use glam::Vec2;

use crate::config::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Top and bottom wall rectangles, full screen width
pub fn wall_rects(config: &Config) -> [Aabb; 2] {
    let top = Aabb::new(
        Vec2::ZERO,
        Vec2::new(config.screen_width, config.wall_thickness),
    );
    let bottom = Aabb::new(
        Vec2::new(0.0, config.screen_height - config.wall_thickness),
        Vec2::new(config.screen_width, config.screen_height),
    );
    [top, bottom]
}

/// Paddle rectangle: x is the paddle's left edge, y its vertical centre
pub fn paddle_rect(config: &Config, pos: Vec2) -> Aabb {
    let half_height = config.paddle_height / 2.0;
    Aabb::new(
        Vec2::new(pos.x, pos.y - half_height),
        Vec2::new(pos.x + config.paddle_width, pos.y + half_height),
    )
}

/// Ball square centred on the ball's position
pub fn ball_rect(config: &Config, pos: Vec2) -> Aabb {
    Aabb::from_center_size(pos, Vec2::splat(config.ball_size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_rects_span_screen_width() {
        let config = Config::new();
        let [top, bottom] = wall_rects(&config);
        assert_eq!(top.width(), config.screen_width);
        assert_eq!(top.height(), config.wall_thickness);
        assert_eq!(bottom.min.y, config.screen_height - config.wall_thickness);
        assert_eq!(bottom.max.y, config.screen_height);
    }

    #[test]
    fn test_paddle_rect_is_centred_vertically() {
        let config = Config::new();
        let rect = paddle_rect(&config, Vec2::new(10.0, 384.0));
        assert_eq!(rect.min, Vec2::new(10.0, 334.0));
        assert_eq!(rect.max, Vec2::new(25.0, 434.0));
        assert_eq!(rect.height(), config.paddle_height);
    }

    #[test]
    fn test_ball_rect_is_centred_square() {
        let config = Config::new();
        let rect = ball_rect(&config, Vec2::new(512.0, 384.0));
        assert_eq!(rect.width(), config.ball_size);
        assert_eq!(rect.height(), config.ball_size);
        assert!(rect.contains(Vec2::new(512.0, 384.0)));
    }
}
