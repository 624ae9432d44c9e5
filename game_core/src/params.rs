/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield
    pub const FIELD_WIDTH: i32 = 900;
    pub const FIELD_HEIGHT: i32 = 540;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 12;
    pub const PADDLE_HEIGHT: i32 = 90;
    pub const PADDLE_MARGIN: i32 = 24; // Gap between side wall and paddle
    pub const PLAYER_SPEED: i32 = 8; // units per tick
    pub const OPPONENT_SPEED: i32 = 7; // a little slower than the player

    // Ball
    pub const BALL_SIZE: i32 = 14;
    pub const BALL_SPEED_X: i32 = 7;
    pub const BALL_SPEED_Y: i32 = 5;

    // Deflection
    pub const DEFLECTION_GAIN: f64 = 1.2;
    pub const DEFLECTION_MAX_SPEED: i32 = 10;

    // Tracking policy
    pub const DEAD_ZONE: i32 = 8;

    // Pacing (shell only)
    pub const TICK_RATE: u32 = 60; // ~60 Hz
    pub const SCORE_PAUSE_MS: u64 = 500;
}
