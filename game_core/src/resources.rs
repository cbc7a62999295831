use crate::PlayerId;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub dt: f32,  // Seconds since the previous frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    pub fn advance(&mut self, dt: f32) {
        self.dt = dt;
        self.now += dt;
    }
}

/// Whether the ball is in play or frozen at center
#[derive(Debug, Clone, Copy, Default)]
pub struct Serve {
    pub served: bool,
}

impl Serve {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put the ball in play. Returns true if it was waiting.
    pub fn serve(&mut self) -> bool {
        let was_waiting = !self.served;
        self.served = true;
        was_waiting
    }

    pub fn reset(&mut self) {
        self.served = false;
    }
}

/// Held state of one player's movement keys
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

impl PaddleInput {
    /// -1 = up, 0 = stop, 1 = down
    pub fn dir(&self) -> i8 {
        self.down as i8 - self.up as i8
    }
}

/// Keyboard state polled once per frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub player1: PaddleInput,
    pub player2: PaddleInput,
    pub serve: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paddle(&self, player: PlayerId) -> PaddleInput {
        match player {
            PlayerId::One => self.player1,
            PlayerId::Two => self.player2,
        }
    }
}

/// Score display text, refreshed whenever a point is awarded
#[derive(Debug, Clone)]
pub struct Scoreboard {
    pub title: String,
}

impl Scoreboard {
    pub const INITIAL_TITLE: &'static str = "Pong";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(player1: u32, player2: u32) -> String {
        format!("Player 1: {player1} | Player 2: {player2}")
    }

    pub fn update(&mut self, player1: u32, player2: u32) {
        self.title = Self::format(player1, player2);
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self {
            title: Self::INITIAL_TITLE.to_string(),
        }
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub served: bool,
    pub scored: Option<PlayerId>,
    pub score_changed: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.served = false;
        self.scored = None;
        self.score_changed = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_advance() {
        let mut time = Time::default();
        time.advance(0.5);
        time.advance(0.25);
        assert_eq!(time.dt, 0.25);
        assert_eq!(time.now, 0.75);
    }

    #[test]
    fn test_serve_is_idempotent() {
        let mut serve = Serve::new();
        assert!(!serve.served, "Ball starts unserved");
        assert!(serve.serve(), "First serve puts ball in play");
        assert!(!serve.serve(), "Serving again has no effect");
        assert!(serve.served);
        serve.reset();
        assert!(!serve.served);
    }

    #[test]
    fn test_paddle_input_dir() {
        let up = PaddleInput { up: true, down: false };
        let down = PaddleInput { up: false, down: true };
        let both = PaddleInput { up: true, down: true };
        assert_eq!(up.dir(), -1);
        assert_eq!(down.dir(), 1);
        assert_eq!(both.dir(), 0, "Opposite keys cancel out");
        assert_eq!(PaddleInput::default().dir(), 0);
    }

    #[test]
    fn test_input_state_paddle() {
        let input = InputState {
            player2: PaddleInput { up: true, down: false },
            ..InputState::new()
        };
        assert_eq!(input.paddle(PlayerId::One), PaddleInput::default());
        assert_eq!(input.paddle(PlayerId::Two).dir(), -1);
    }

    #[test]
    fn test_scoreboard_title() {
        let mut scoreboard = Scoreboard::new();
        assert_eq!(scoreboard.title, "Pong");
        scoreboard.update(100, 300);
        assert_eq!(scoreboard.title, "Player 1: 100 | Player 2: 300");
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.served = true;
        events.scored = Some(PlayerId::Two);
        events.score_changed = true;
        events.ball_hit_paddle = true;
        events.ball_hit_wall = true;

        events.clear();

        assert!(!events.served);
        assert_eq!(events.scored, None);
        assert!(!events.score_changed);
        assert!(!events.ball_hit_paddle);
        assert!(!events.ball_hit_wall);
    }
}
