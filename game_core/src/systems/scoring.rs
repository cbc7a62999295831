use crate::{Ball, Config, Events, Player, PlayerId, Scoreboard, Serve};
use hecs::World;

/// Check if ball crossed the left or right edge (scoring)
///
/// Scoring leaves the ball velocity untouched: once served again the ball
/// resumes from center with the same heading.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    serve: &mut Serve,
    events: &mut Events,
    scoreboard: &mut Scoreboard,
) {
    let ball_x = {
        let mut query = world.query::<&Ball>();
        let data = query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos.x, ball.half_size()));
        data
    };

    let Some((x, half_size)) = ball_x else {
        return;
    };

    if x < half_size {
        update_score(world, serve, events, scoreboard, 2, config.points_per_goal);
    }
    if x > config.screen_width - half_size {
        update_score(world, serve, events, scoreboard, 1, config.points_per_goal);
    }
}

/// Award `points` to player 1 or 2 and send the ball back to center
///
/// Any other player number only resets the serve.
pub fn update_score(
    world: &mut World,
    serve: &mut Serve,
    events: &mut Events,
    scoreboard: &mut Scoreboard,
    player_index: u8,
    points: u32,
) {
    serve.reset();

    let scorer = PlayerId::from_index(player_index);
    let mut player1 = 0;
    let mut player2 = 0;
    for (_entity, player) in world.query_mut::<&mut Player>() {
        if Some(player.id) == scorer {
            player.score += points;
        }
        match player.id {
            PlayerId::One => player1 = player.score,
            PlayerId::Two => player2 = player.score,
        }
    }

    scoreboard.update(player1, player2);
    events.score_changed = true;
    if scorer.is_some() {
        events.scored = scorer;
    }

    log::info!("{}", scoreboard.title);
}
