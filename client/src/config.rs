//! Window and colour settings for the desktop client

/// Presentation settings. Gameplay values live in [`game_core::Config`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub title: String,
    pub clear_color: wgpu::Color,
    pub ball_color: [f32; 4],
    pub player1_color: [f32; 4],
    pub player2_color: [f32; 4],
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            title: game_core::Scoreboard::INITIAL_TITLE.to_string(),
            clear_color: wgpu::Color::BLACK,
            ball_color: [1.0, 1.0, 1.0, 1.0],
            player1_color: [1.0, 0.0, 0.0, 1.0], // left, red
            player2_color: [0.0, 0.0, 1.0, 1.0], // right, blue
        }
    }
}
