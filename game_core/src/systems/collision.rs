use crate::{Bird, Events, ObstacleField};

/// Check the bird against every obstacle's barriers
pub fn check_collisions(field: &ObstacleField, bird: &Bird, events: &mut Events) {
    let bird_bounds = bird.bounds();

    for obstacle in field.iter() {
        let hit = obstacle
            .barriers(field.width, field.gap_size)
            .iter()
            .any(|barrier| barrier.overlaps(&bird_bounds));

        if hit {
            events.crashed = true;
        }
    }
}
