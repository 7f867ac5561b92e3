pub mod components;
pub mod config;
pub mod map;
pub mod params;
pub mod resources;
pub mod scene;
pub mod simulation;
pub mod systems;

pub use components::*;
pub use config::*;
pub use map::*;
pub use params::*;
pub use resources::*;
pub use scene::*;
pub use simulation::*;

use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation
///
/// `pointer_y` is the pointer sample taken at the top of the frame. Units are
/// per frame, so there is no time delta.
pub fn step(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
    pointer_y: Option<f32>,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Player paddle follows the pointer
    apply_pointer(world, map, config, pointer_y);

    // 2. Opponent tracks the ball
    update_opponent(world, map, config);

    // 3. Move ball
    move_ball(world);

    // 4. Walls before paddles: paddle checks read the clamped position
    check_wall_collisions(world, map, config, events);
    check_paddle_collisions(world, config, events);

    // 5. Re-serve if the ball left the arena
    check_out_of_bounds(world, map, config, events, rng);
}

/// Helper to create a paddle entity, tagged with its controller
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    let paddle = Paddle::new(side, y);
    match side {
        Side::Left => world.spawn((paddle, PointerControlled)),
        Side::Right => world.spawn((paddle, OpponentControlled)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles centered and serve the ball from the middle
pub fn spawn_match(world: &mut World, map: &GameMap, config: &Config, rng: &mut GameRng) {
    let paddle_y = config.paddle_spawn_y();
    create_paddle(world, Side::Left, paddle_y);
    create_paddle(world, Side::Right, paddle_y);

    let mut ball = Ball::new(glam::Vec2::ZERO, glam::Vec2::ZERO);
    ball.reset(map, config, rng);
    create_ball(world, ball.pos, ball.vel);
}
