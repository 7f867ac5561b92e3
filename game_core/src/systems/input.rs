use hecs::World;

use crate::components::*;
use crate::{Config, GameMap};

/// Place the pointer-controlled paddle so its center sits on the pointer
///
/// Pass-through mapping, recomputed from scratch each frame. With no pointer
/// sample yet the paddle stays put.
pub fn apply_pointer(world: &mut World, map: &GameMap, config: &Config, pointer_y: Option<f32>) {
    let Some(target) = pointer_y else {
        return;
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &PointerControlled)>() {
        paddle.y = map.clamp_y(target - config.paddle_height / 2.0, config.paddle_height);
    }
}
