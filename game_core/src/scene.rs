use hecs::World;

use crate::{Aabb, Ball, Config, GameMap, Paddle, Side};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scene {
    pub arena: Aabb,
    pub player: Aabb,
    pub opponent: Aabb,
    pub ball: Aabb,
}

impl Scene {
    /// Snapshot the world; `None` unless both paddles and the ball exist
    pub fn capture(world: &World, map: &GameMap, config: &Config) -> Option<Self> {
        let mut player = None;
        let mut opponent = None;
        for (_e, paddle) in world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => player = Some(paddle.bounds(config)),
                Side::Right => opponent = Some(paddle.bounds(config)),
            }
        }

        let ball = world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.bounds(config))?;

        Some(Self {
            arena: map.bounds(),
            player: player?,
            opponent: opponent?,
            ball,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_capture_reports_rectangles() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 205.0);
        create_paddle(&mut world, Side::Right, 100.0);
        create_ball(&mut world, Vec2::new(392.0, 242.0), Vec2::new(6.0, 0.0));

        let scene = Scene::capture(&world, &map, &config).unwrap();

        assert_eq!(scene.arena.size(), Vec2::new(800.0, 500.0));
        assert_eq!(scene.player.min, Vec2::new(20.0, 205.0));
        assert_eq!(scene.player.size(), Vec2::new(15.0, 90.0));
        assert_eq!(scene.opponent.min, Vec2::new(765.0, 100.0));
        assert_eq!(scene.ball.min, Vec2::new(392.0, 242.0));
        assert_eq!(scene.ball.size(), Vec2::splat(16.0));
    }

    #[test]
    fn test_capture_needs_all_entities() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        create_paddle(&mut world, Side::Left, 205.0);
        create_ball(&mut world, Vec2::ZERO, Vec2::ZERO);

        assert!(Scene::capture(&world, &map, &config).is_none());
    }
}
