use glam::Vec2;

use crate::geometry::Aabb;
use crate::params::Params;
use crate::PlayerId;

/// Game configuration
///
/// Built once at startup and passed by reference to every system.
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub points_per_goal: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed: Params::BALL_SPEED,
            points_per_goal: Params::POINTS_PER_GOAL,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen center, where an unserved ball waits
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }

    /// Get the X of the paddle's left edge based on player ID
    pub fn paddle_x(&self, player: PlayerId) -> f32 {
        match player {
            PlayerId::One => self.paddle_margin,
            PlayerId::Two => self.screen_width - self.paddle_width - self.paddle_margin,
        }
    }

    /// Clamp paddle Y to screen bounds
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.screen_height - half_height)
    }

    /// Collision box of a paddle centered vertically on `y`
    pub fn paddle_rect(&self, player: PlayerId, y: f32) -> Aabb {
        let x = self.paddle_x(player);
        let half_height = self.paddle_height / 2.0;
        Aabb::new(
            Vec2::new(x, y - half_height),
            Vec2::new(x + self.paddle_width, y + half_height),
        )
    }

    /// Collision box of a square ball centered on `pos`
    pub fn ball_rect(&self, pos: Vec2, size: f32) -> Aabb {
        Aabb::from_center_size(pos, Vec2::splat(size))
    }
}
