use crate::{Ball, Config, Events, GameMap, GameRng, Side};
use hecs::World;

/// Re-serve the ball from the center once it has left the arena horizontally
pub fn check_out_of_bounds(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
    rng: &mut GameRng,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !map.is_outside_x(ball.pos.x) {
            continue;
        }

        let exited = if ball.pos.x < 0.0 {
            Side::Left
        } else {
            Side::Right
        };

        ball.reset(map, config, rng);
        events.ball_reset = Some(exited);

        log::debug!(
            "ball left through the {:?} side, re-served with velocity {:?}",
            exited,
            ball.vel
        );
    }
}
