use crate::{Aabb, Params, Side};
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub opponent_speed: f32,
    pub opponent_deadzone: f32,
    pub ball_size: f32,
    pub ball_serve_speed_x: f32,
    pub ball_serve_speed_y: f32,
    pub ball_spin: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            opponent_speed: Params::OPPONENT_SPEED,
            opponent_deadzone: Params::OPPONENT_DEADZONE,
            ball_size: Params::BALL_SIZE,
            ball_serve_speed_x: Params::BALL_SERVE_SPEED_X,
            ball_serve_speed_y: Params::BALL_SERVE_SPEED_Y,
            ball_spin: Params::BALL_SPIN,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the X of the paddle's left edge for a side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.arena_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Vertically centered paddle Y
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.arena_height - self.paddle_height) / 2.0
    }

    /// Clamp paddle Y (top edge) to arena bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.arena_height - self.paddle_height)
    }

    /// Bounding box of a paddle whose top edge sits at `y`
    pub fn paddle_box(&self, side: Side, y: f32) -> Aabb {
        Aabb::from_pos_size(
            Vec2::new(self.paddle_x(side), y),
            Vec2::new(self.paddle_width, self.paddle_height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 20.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 765.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_spawn_is_centered() {
        let config = Config::new();
        assert_eq!(config.paddle_spawn_y(), 205.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-30.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.arena_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(255.0), 255.0);
    }

    #[test]
    fn test_config_paddle_box_right_edge() {
        let config = Config::new();
        let left = config.paddle_box(Side::Left, 205.0);
        assert_eq!(left.max.x, 35.0);
        assert_eq!(left.max.y, 295.0);

        let right = config.paddle_box(Side::Right, 0.0);
        assert_eq!(right.min.x, 765.0);
        assert_eq!(right.max.x, 780.0);
    }
}
