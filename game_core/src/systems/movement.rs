use crate::Ball;
use hecs::World;

/// Move ball by one frame of velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use glam::Vec2;

    #[test]
    fn test_ball_advances_by_velocity() {
        let mut world = World::new();
        create_ball(&mut world, Vec2::new(392.0, 242.0), Vec2::new(-6.0, 2.5));

        move_ball(&mut world);
        move_ball(&mut world);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, Vec2::new(380.0, 247.0));
            assert_eq!(ball.vel, Vec2::new(-6.0, 2.5), "Velocity is untouched");
        }
    }
}
