use crate::{Ball, Config, Events, GameMap, Paddle, Side};
use hecs::World;

/// Bounce the ball off the top and bottom walls
///
/// Both walls are tested every frame; the ball is clamped back inside and
/// `vy` is negated, `vx` is left alone.
pub fn check_wall_collisions(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y < 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
        if ball.pos.y + config.ball_size > map.height {
            ball.pos.y = map.height - config.ball_size;
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Bounce the ball off the paddles, left first, then right
///
/// Contact snaps the ball flush against the paddle face, flips `vx` and
/// replaces `vy` with the contact offset scaled by the spin factor. The test
/// is a half-plane check against the paddle face with no direction test, so a
/// ball anywhere behind the face and level with the paddle bounces.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // First, collect paddle data without holding borrows
    let paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| *p)
        .collect();

    for side in [Side::Left, Side::Right] {
        let Some(paddle) = paddles.iter().find(|p| p.side == side) else {
            continue;
        };
        let paddle_box = paddle.bounds(config);
        let paddle_center = paddle.center_y(config);

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            let ball_box = ball.bounds(config);

            let reached = match side {
                Side::Left => ball_box.min.x <= paddle_box.max.x,
                Side::Right => ball_box.max.x >= paddle_box.min.x,
            };
            if !reached || !ball_box.overlaps_vertically(&paddle_box) {
                continue;
            }

            ball.pos.x = match side {
                Side::Left => paddle_box.max.x,
                Side::Right => paddle_box.min.x - config.ball_size,
            };
            ball.vel.x = -ball.vel.x;
            ball.vel.y = (ball.center_y(config) - paddle_center) * config.ball_spin;

            log::trace!("ball hit {:?} paddle, new velocity {:?}", side, ball.vel);
            events.ball_hit_paddle = Some(side);
        }
    }
}
