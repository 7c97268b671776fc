/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const SCREEN_WIDTH: f32 = 1024.0;
    pub const SCREEN_HEIGHT: f32 = 768.0;
    pub const WALL_THICKNESS: f32 = 15.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 300.0; // units per second
    pub const PADDLE_MARGIN: f32 = 10.0; // inset of paddle x from the screen edge

    // Collision band: distance range from a vertical screen edge within which
    // a ball's x qualifies for the paddle test
    pub const BAND_NEAR: f32 = 20.0;
    pub const BAND_FAR: f32 = 25.0;

    // Ball
    pub const BALL_SIZE: f32 = 15.0; // drawn as a square, same thickness as the walls
    pub const BALL_SPEED_X: f32 = 160.0;
    pub const BALL_SPEED_Y: f32 = 200.0;

    // Physics
    pub const FIXED_DT: f32 = 0.016; // minimum frame interval, ~60 Hz
    pub const MAX_DT: f32 = 0.05; // clamp to prevent large jumps
}
