use crate::{Config, Events, InputState, Player, Serve, Time};
use hecs::World;

/// Apply polled keyboard state: serve, move paddles, clamp them to the screen
pub fn apply_input(
    world: &mut World,
    input: &InputState,
    time: &Time,
    config: &Config,
    serve: &mut Serve,
    events: &mut Events,
) {
    if input.serve && serve.serve() {
        events.served = true;
        log::debug!("Ball served");
    }

    for (_entity, player) in world.query_mut::<&mut Player>() {
        let dir = input.paddle(player.id).dir();
        player.y += dir as f32 * config.paddle_speed * time.dt;

        // Clamp every frame, moving or not
        player.y = config.clamp_paddle_y(player.y);
    }
}
