use crate::{Bird, Contact, Events, ObstacleField, Viewport};

/// Apply gravity to the bird and record any floor/ceiling contact
pub fn integrate_bird(bird: &mut Bird, viewport: &Viewport, events: &mut Events) {
    match bird.integrate(viewport.floor()) {
        Contact::Floor => events.crashed = true,
        Contact::Ceiling => events.hit_ceiling = true,
        Contact::None => {}
    }
}

/// Move every obstacle left by the field's scroll speed
pub fn scroll_obstacles(field: &mut ObstacleField) {
    let speed = field.scroll_speed;
    for obstacle in field.obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}
