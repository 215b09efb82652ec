use crate::Params;

/// Per-frame physics constants for one class of device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsProfile {
    pub gravity: f32,
    pub jump_impulse: f32, // negative = upward
    pub scroll_speed: f32,
    pub gap_size: f32,
}

impl PhysicsProfile {
    pub const DESKTOP: Self = Self {
        gravity: Params::GRAVITY,
        jump_impulse: Params::JUMP_IMPULSE,
        scroll_speed: Params::SCROLL_SPEED,
        gap_size: Params::GAP_SIZE,
    };

    pub const MOBILE: Self = Self {
        gravity: Params::GRAVITY * Params::MOBILE_SPEED_SCALE,
        jump_impulse: Params::JUMP_IMPULSE * Params::MOBILE_JUMP_SCALE,
        scroll_speed: Params::SCROLL_SPEED * Params::MOBILE_SPEED_SCALE,
        gap_size: Params::MOBILE_GAP_SIZE,
    };

    /// Select the profile for a viewport of the given width
    pub fn for_width(width: f32, breakpoint: f32) -> Self {
        if width < breakpoint {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }

    pub fn is_mobile(&self) -> bool {
        *self == Self::MOBILE
    }
}

impl Default for PhysicsProfile {
    fn default() -> Self {
        Self::DESKTOP
    }
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bird_x: f32,
    pub bird_radius: f32,
    pub obstacle_width: f32,
    pub spawn_distance: f32,
    pub gap_min_fraction: f32,
    pub gap_max_fraction: f32,
    pub mobile_breakpoint: f32,
    pub idle_sway_amplitude: f32,
    pub idle_sway_period_ms: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bird_x: Params::BIRD_X,
            bird_radius: Params::BIRD_RADIUS,
            obstacle_width: Params::OBSTACLE_WIDTH,
            spawn_distance: Params::SPAWN_DISTANCE,
            gap_min_fraction: Params::GAP_MIN_FRACTION,
            gap_max_fraction: Params::GAP_MAX_FRACTION,
            mobile_breakpoint: Params::MOBILE_BREAKPOINT,
            idle_sway_amplitude: Params::IDLE_SWAY_AMPLITUDE,
            idle_sway_period_ms: Params::IDLE_SWAY_PERIOD_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Physics profile for the given viewport width
    pub fn profile_for(&self, width: f32) -> PhysicsProfile {
        PhysicsProfile::for_width(width, self.mobile_breakpoint)
    }

    /// Inclusive range for the top edge of a new gap
    pub fn gap_top_range(&self, viewport_height: f32) -> (f32, f32) {
        (
            viewport_height * self.gap_min_fraction,
            viewport_height * self.gap_max_fraction,
        )
    }

    /// Bird y while idling on the start screen
    pub fn idle_bird_y(&self, viewport_height: f32, now_ms: f64) -> f32 {
        let sway = (now_ms / self.idle_sway_period_ms).sin() as f32;
        viewport_height / 2.0 + sway * self.idle_sway_amplitude
    }
}
