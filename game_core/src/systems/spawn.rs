use log::debug;
use rand::Rng;

use crate::{Config, Events, GameRng, Obstacle, ObstacleField, Viewport};

/// Append a new obstacle at the right edge once the newest one has moved far enough in.
///
/// Spacing is measured in distance, not frames, so density stays the same
/// whatever the scroll speed.
pub fn spawn_obstacles(
    field: &mut ObstacleField,
    viewport: &Viewport,
    config: &Config,
    rng: &mut GameRng,
    events: &mut Events,
) {
    let due = match field.newest() {
        None => true,
        Some(newest) => viewport.width - newest.x >= config.spawn_distance,
    };
    if !due {
        return;
    }

    let gap_top = random_gap_top(viewport, config, rng);
    field.obstacles.push_back(Obstacle::new(viewport.width, gap_top));
    events.spawned = true;
    debug!("spawned obstacle at x={} gap_top={}", viewport.width, gap_top);
}

/// Whole-number gap top drawn uniformly from the configured fraction band, inclusive
pub fn random_gap_top(viewport: &Viewport, config: &Config, rng: &mut GameRng) -> f32 {
    let (min, max) = config.gap_top_range(viewport.height);
    rng.0.gen_range(min..max + 1.0).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PhysicsProfile;

    fn setup() -> (ObstacleField, Viewport, Config, GameRng, Events) {
        let config = Config::new();
        let field = ObstacleField::new(config.obstacle_width, &PhysicsProfile::DESKTOP);
        (
            field,
            Viewport::new(800.0, 600.0),
            config,
            GameRng::new(12345),
            Events::new(),
        )
    }

    #[test]
    fn test_spawns_into_empty_field() {
        let (mut field, viewport, config, mut rng, mut events) = setup();

        spawn_obstacles(&mut field, &viewport, &config, &mut rng, &mut events);

        assert_eq!(field.len(), 1);
        assert_eq!(field.newest().unwrap().x, 800.0);
        assert!(events.spawned);
    }

    #[test]
    fn test_no_spawn_until_distance_reached() {
        let (mut field, viewport, config, mut rng, mut events) = setup();
        field.obstacles.push_back(Obstacle::new(500.1, 100.0));

        spawn_obstacles(&mut field, &viewport, &config, &mut rng, &mut events);
        assert_eq!(field.len(), 1, "299.9 units in is not far enough");
        assert!(!events.spawned);

        field.obstacles.back_mut().unwrap().x = 500.0;
        spawn_obstacles(&mut field, &viewport, &config, &mut rng, &mut events);
        assert_eq!(field.len(), 2, "Exactly 300 units triggers a spawn");
    }

    #[test]
    fn test_gap_top_within_band() {
        let (_field, viewport, config, mut rng, _events) = setup();
        let (min, max) = config.gap_top_range(viewport.height);
        for _ in 0..1_000 {
            let gap_top = random_gap_top(&viewport, &config, &mut rng);
            assert!(gap_top >= min.floor() && gap_top < max + 1.0, "gap_top {} out of band", gap_top);
            assert_eq!(gap_top, gap_top.floor());
        }
    }
}
