use crate::{Ball, Config, Serve, Time};
use hecs::World;

/// Move ball based on velocity
///
/// An unserved ball is pinned to the screen center and keeps its velocity for
/// the next serve. Returns true if the ball is in play and was advanced.
pub fn move_ball(world: &mut World, time: &Time, config: &Config, serve: &Serve) -> bool {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if !serve.served {
            ball.pos = config.center();
        } else {
            ball.pos += ball.vel * time.dt;
        }
    }
    serve.served
}
