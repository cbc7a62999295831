pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;

use hecs::{Entity, World};
use systems::*;

/// Complete simulation state for one game of Pong
///
/// Built once at startup and advanced with [`GameState::step`] each frame.
pub struct GameState {
    pub world: World,
    pub time: Time,
    pub serve: Serve,
    pub events: Events,
    pub scoreboard: Scoreboard,
    ball: Entity,
}

impl GameState {
    /// Spawn the ball and both players. The ball waits at center for a serve.
    ///
    /// `rng` only picks the ball's heading; later serves reuse it.
    pub fn new(config: &Config, mut rng: GameRng) -> Self {
        let mut world = World::new();

        let ball = create_ball(&mut world, Ball::with_random_direction(config, &mut rng));
        let center_y = config.center().y;
        for id in PlayerId::ALL {
            create_player(&mut world, id, center_y);
        }

        Self {
            world,
            time: Time::default(),
            serve: Serve::new(),
            events: Events::new(),
            scoreboard: Scoreboard::new(),
            ball,
        }
    }

    /// Run one frame of the game with `dt` seconds elapsed
    pub fn step(&mut self, config: &Config, input: &InputState, dt: f32) {
        // Clear events at start of frame
        self.events.clear();
        self.time.advance(dt);

        // 1. Ball: move, score, bounce off walls
        self.update_ball(config);

        // 2. Players: serve, move, clamp, deflect ball
        self.update_players(config, input);
    }

    pub fn update_ball(&mut self, config: &Config) {
        let in_play = move_ball(&mut self.world, &self.time, config, &self.serve);
        if !in_play {
            return;
        }

        check_scoring(
            &mut self.world,
            config,
            &mut self.serve,
            &mut self.events,
            &mut self.scoreboard,
        );
        check_wall_bounce(&mut self.world, config, &mut self.events);
    }

    pub fn update_players(&mut self, config: &Config, input: &InputState) {
        apply_input(
            &mut self.world,
            input,
            &self.time,
            config,
            &mut self.serve,
            &mut self.events,
        );
        check_paddle_collisions(&mut self.world, config, &mut self.events);
    }

    /// Award points to player 1 or 2 (other numbers are ignored) and reset the serve
    pub fn update_score(&mut self, player_index: u8, points: u32) {
        update_score(
            &mut self.world,
            &mut self.serve,
            &mut self.events,
            &mut self.scoreboard,
            player_index,
            points,
        );
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world.get::<&Ball>(self.ball).ok().map(|ball| *ball)
    }

    pub fn ball_mut(&mut self) -> Option<hecs::RefMut<'_, Ball>> {
        self.world.get::<&mut Ball>(self.ball).ok()
    }

    pub fn player(&self, id: PlayerId) -> Option<Player> {
        let mut query = self.world.query::<&Player>();
        let player = query
            .iter()
            .find(|(_e, player)| player.id == id)
            .map(|(_e, player)| *player);
        player
    }

    pub fn set_player_y(&mut self, id: PlayerId, y: f32) {
        for (_entity, player) in self.world.query_mut::<&mut Player>() {
            if player.id == id {
                player.y = y;
            }
        }
    }

    pub fn title(&self) -> &str {
        &self.scoreboard.title
    }
}

/// Helper to create a player entity
pub fn create_player(world: &mut World, id: PlayerId, y: f32) -> Entity {
    world.spawn((Player::new(id, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> Entity {
    world.spawn((ball,))
}
