use glam::Vec2;
use rand::Rng;

use crate::{Config, GameRng};

/// Which side a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One, // left, W/S
    Two, // right, arrow keys
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    /// Map a 1-based player number to an ID
    pub fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// Player component - a paddle and the points it has earned
#[derive(Debug, Clone, Copy)]
pub struct Player {
    pub id: PlayerId,
    pub score: u32,
    pub y: f32, // paddle center, clamped to screen
}

impl Player {
    pub fn new(id: PlayerId, y: f32) -> Self {
        Self { id, score: 0, y }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    /// Ball near the center heading along a random diagonal
    ///
    /// The direction is chosen once per game; serving again reuses it.
    pub fn with_random_direction(config: &Config, rng: &mut GameRng) -> Self {
        let size = config.ball_size;
        let pos = config.center() - Vec2::splat(size / 2.0);

        let x_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let y_sign = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
        let vel = Vec2::new(x_sign, y_sign) * config.ball_speed;

        Self { pos, vel, size }
    }

    pub fn half_size(&self) -> f32 {
        self.size / 2.0
    }
}
