/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen (pixels, y grows downward)
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 75.0;
    pub const PADDLE_MARGIN: f32 = 10.0; // gap between paddle and its screen edge
    pub const PADDLE_SPEED: f32 = 150.0; // pixels per second

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED: f32 = 120.0; // per axis, pixels per second

    // Score
    pub const POINTS_PER_GOAL: u32 = 100;
}
