/// Game tuning parameters for Pong
///
/// All distances are in arena units (canvas pixels), all speeds in units per frame.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 90.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // gap between arena edge and paddle

    // Opponent
    pub const OPPONENT_SPEED: f32 = 4.0;
    pub const OPPONENT_DEADZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SERVE_SPEED_X: f32 = 6.0; // always served at exactly this |vx|
    pub const BALL_SERVE_SPEED_Y: f32 = 4.0; // vy drawn from [-this, this]
    pub const BALL_SPIN: f32 = 0.28; // vy per unit of contact offset

    // Frame pacing (nominal, the host drives the actual rate)
    pub const FPS: u32 = 60;
}
