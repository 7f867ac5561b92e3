use glam::Vec2;

use crate::{Aabb, Config, GameMap};

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,  // pointer-controlled player
    Right, // opponent controller
}

/// Paddle component - a vertically movable rectangle
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // top edge, clamped to arena
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        config.paddle_box(self.side, self.y)
    }
}

/// Marks the paddle that follows the pointer
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerControlled;

/// Marks the paddle driven by the tracking opponent
#[derive(Debug, Clone, Copy, Default)]
pub struct OpponentControlled;

/// Ball component - a square with top-left `pos`
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // units per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.ball_size / 2.0
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_pos_size(self.pos, Vec2::splat(config.ball_size))
    }

    /// Reset ball to center and serve it in a random direction
    pub fn reset(&mut self, map: &GameMap, config: &Config, rng: &mut crate::GameRng) {
        use rand::Rng;

        self.pos = map.ball_spawn(config.ball_size);

        let dir = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let max_vy = config.ball_serve_speed_y;
        self.vel = Vec2::new(
            config.ball_serve_speed_x * dir,
            rng.0.gen_range(-max_vy..=max_vy),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_ball_reset_recenters_and_serves() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::new(-5.0, 17.0), Vec2::new(-6.0, 3.5));

        for _ in 0..200 {
            ball.reset(&map, &config, &mut rng);
            assert_eq!(ball.pos, Vec2::new(392.0, 242.0));
            assert_eq!(ball.vel.x.abs(), 6.0);
            assert!((-4.0..=4.0).contains(&ball.vel.y));
        }
    }

    #[test]
    fn test_ball_reset_serves_both_directions() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut rng = GameRng::new(99);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);

        let mut left = 0;
        let mut right = 0;
        for _ in 0..200 {
            ball.reset(&map, &config, &mut rng);
            if ball.vel.x > 0.0 {
                right += 1;
            } else {
                left += 1;
            }
        }
        assert!(left > 50 && right > 50, "serve direction should be roughly 50/50");
    }

    #[test]
    fn test_center_helpers() {
        let config = Config::new();
        let paddle = Paddle::new(Side::Left, 205.0);
        let ball = Ball::new(Vec2::new(35.0, 245.0), Vec2::ZERO);
        assert_eq!(paddle.center_y(&config), 250.0);
        assert_eq!(ball.center_y(&config), 253.0);
    }
}
