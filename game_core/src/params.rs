/// Game tuning parameters for Flappy
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Bird
    pub const BIRD_X: f32 = 50.0;
    pub const BIRD_RADIUS: f32 = 15.0;

    // Obstacles
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const SPAWN_DISTANCE: f32 = 300.0; // measured from the right edge of the viewport
    pub const GAP_MIN_FRACTION: f32 = 0.1;
    pub const GAP_MAX_FRACTION: f32 = 0.6;

    // Desktop physics (per frame)
    pub const GRAVITY: f32 = 0.165;
    pub const JUMP_IMPULSE: f32 = -4.95;
    pub const SCROLL_SPEED: f32 = 2.2;
    pub const GAP_SIZE: f32 = 180.0;

    // Mobile physics
    pub const MOBILE_BREAKPOINT: f32 = 768.0;
    pub const MOBILE_SPEED_SCALE: f32 = 0.2;
    pub const MOBILE_JUMP_SCALE: f32 = 0.6; // tuned by hand, not derived from the speed scale
    pub const MOBILE_GAP_SIZE: f32 = 200.0;

    // Idle sway while waiting for the first input
    pub const IDLE_SWAY_AMPLITUDE: f32 = 10.0;
    pub const IDLE_SWAY_PERIOD_MS: f64 = 500.0;
}
