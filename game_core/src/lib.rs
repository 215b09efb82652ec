pub mod components;
pub mod config;
pub mod field;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::*;
pub use config::*;
pub use field::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use systems::*;

/// Run one frame of the Flappy simulation.
///
/// Obstacles advance (and are checked against the bird) before the bird
/// itself is integrated. A crash from either is reported through `events`.
pub fn step(
    bird: &mut Bird,
    field: &mut ObstacleField,
    viewport: &Viewport,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) {
    // 1. Spawn, scroll, collide, score and prune obstacles
    field.advance(bird, viewport, config, score, events, rng);

    // 2. Gravity and floor/ceiling clamping
    integrate_bird(bird, viewport, events);
}

/// Helper to create a bird centered vertically in the viewport
pub fn create_bird(config: &Config, viewport: &Viewport, profile: &PhysicsProfile) -> Bird {
    Bird::new(config.bird_x, viewport.height / 2.0, config.bird_radius, profile)
}
