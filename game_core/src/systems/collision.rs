use crate::{Ball, Config, Events, Player, PlayerId};
use hecs::World;

/// Bounce the ball off the top and bottom walls
///
/// Only the sign of the vertical speed changes, never its magnitude.
pub fn check_wall_bounce(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let half_size = ball.half_size();

        if ball.pos.y < half_size {
            ball.vel.y = ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
        if ball.pos.y > config.screen_height - half_size {
            ball.vel.y = -ball.vel.y.abs();
            events.ball_hit_wall = true;
        }
    }
}

/// Deflect the ball away from any paddle it overlaps
///
/// The left paddle sends the ball right and the right paddle sends it left.
/// Vertical speed is unchanged.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle boxes without holding borrows
    let paddles: Vec<(PlayerId, crate::Aabb)> = world
        .query::<&Player>()
        .iter()
        .map(|(_e, player)| (player.id, config.paddle_rect(player.id, player.y)))
        .collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = config.ball_rect(ball.pos, ball.size);

        for (player_id, paddle_rect) in &paddles {
            if !ball_rect.intersects(paddle_rect) {
                continue;
            }
            ball.vel.x = match player_id {
                PlayerId::One => ball.vel.x.abs(),
                PlayerId::Two => -ball.vel.x.abs(),
            };
            events.ball_hit_paddle = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_player};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        let mut query = world.query::<&Ball>();
        let ball = query.iter().next().map(|(_e, ball)| *ball);
        ball.expect("ball should exist")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 2.0), Vec2::new(120.0, -80.0), 10.0),
        );

        check_wall_bounce(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.y, 80.0, "Ball should bounce down off the top wall");
        assert_eq!(ball.vel.x, 120.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall, "Should trigger ball_hit_wall event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 478.0), Vec2::new(-120.0, 80.0), 10.0),
        );

        check_wall_bounce(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.y, -80.0, "Ball should bounce up off the bottom wall");
        assert_eq!(ball.vel.x, -120.0, "X velocity should be unchanged");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_wall_bounce_does_not_flip_departing_ball() {
        let (mut world, config, mut events) = setup_world();
        // Already heading down, away from the top wall
        create_ball(
            &mut world,
            Ball::new(Vec2::new(300.0, 2.0), Vec2::new(0.0, 80.0), 10.0),
        );

        check_wall_bounce(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.y, 80.0, "Ball keeps heading down");
    }

    #[test]
    fn test_no_bounce_in_open_space() {
        let (mut world, config, mut events) = setup_world();
        let vel = Vec2::new(120.0, -120.0);
        create_ball(&mut world, Ball::new(Vec2::new(300.0, 240.0), vel, 10.0));

        check_wall_bounce(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel, vel);
        assert!(!events.ball_hit_wall);
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::One, 240.0);
        // Paddle spans x 10..30; ball spans 25..35
        create_ball(
            &mut world,
            Ball::new(Vec2::new(30.0, 240.0), Vec2::new(-120.0, 45.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, 120.0, "Ball should bounce right off left paddle");
        assert_eq!(ball.vel.y, 45.0, "Vertical speed is unchanged");
        assert!(events.ball_hit_paddle, "Should trigger ball_hit_paddle event");
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::Two, 240.0);
        // Paddle spans x 570..590
        create_ball(
            &mut world,
            Ball::new(Vec2::new(568.0, 240.0), Vec2::new(120.0, -45.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, -120.0, "Ball should bounce left off right paddle");
        assert_eq!(ball.vel.y, -45.0);
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_paddle_edge_counts_as_hit() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::One, 240.0);
        // Ball's left edge sits exactly on the paddle's right edge (x = 30)
        create_ball(
            &mut world,
            Ball::new(Vec2::new(35.0, 240.0), Vec2::new(-120.0, 0.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, 120.0, "Edge contact deflects the ball");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_touching_right_paddle_edge_counts_as_hit() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::Two, 240.0);
        // Ball's right edge sits exactly on the paddle's left edge (x = 570)
        create_ball(
            &mut world,
            Ball::new(Vec2::new(565.0, 240.0), Vec2::new(120.0, 0.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, -120.0, "Edge contact deflects the ball");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_ball_moving_away_keeps_direction() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::One, 240.0);
        create_ball(
            &mut world,
            Ball::new(Vec2::new(30.0, 240.0), Vec2::new(120.0, 0.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, 120.0, "Already heading right");
    }

    #[test]
    fn test_ball_passes_beside_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::One, 100.0);
        // Paddle spans y 62.5..137.5; ball spans 295..305
        create_ball(
            &mut world,
            Ball::new(Vec2::new(20.0, 300.0), Vec2::new(-120.0, 0.0), 10.0),
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        assert_eq!(ball_of(&world).vel.x, -120.0, "Missed paddle, no deflection");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_player(&mut world, PlayerId::One, 240.0);

        // Should not panic or error
        check_paddle_collisions(&mut world, &config, &mut events);
        check_wall_bounce(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
