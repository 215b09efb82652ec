use crate::{Bird, Events, ObstacleField, Score};

/// Award a point for each obstacle the bird has fully cleared, once
pub fn check_scoring(
    field: &mut ObstacleField,
    bird: &Bird,
    score: &mut Score,
    events: &mut Events,
) {
    let bird_left = bird.x - bird.radius;
    let width = field.width;

    for obstacle in field.obstacles.iter_mut() {
        if !obstacle.passed && obstacle.trailing_edge(width) < bird_left {
            obstacle.passed = true;
            score.increment();
            events.scored = true;
        }
    }
}
