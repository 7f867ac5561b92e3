use hecs::World;

use crate::components::*;
use crate::{Config, GameMap};

/// Step the opponent paddle toward the ball's current vertical center
///
/// Fixed-step tracker with a deadzone. Only the ball's position is read,
/// never its velocity, so steep shots can outrun it.
pub fn update_opponent(world: &mut World, map: &GameMap, config: &Config) {
    let ball_center = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.center_y(config));

    let Some(ball_center) = ball_center else {
        return; // No ball in world
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &OpponentControlled)>() {
        let diff = ball_center - paddle.center_y(config);

        if diff > config.opponent_deadzone {
            paddle.y += config.opponent_speed;
        } else if diff < -config.opponent_deadzone {
            paddle.y -= config.opponent_speed;
        }

        paddle.y = map.clamp_y(paddle.y, config.paddle_height);
    }
}
