use log::debug;

use crate::ObstacleField;

/// Drop obstacles whose trailing edge has scrolled past the left edge.
///
/// Removal only ever happens at the front: obstacles all move at the same
/// speed, so spawn order is left-to-right order.
pub fn prune_obstacles(field: &mut ObstacleField) {
    let width = field.width;
    let mut removed = 0;

    while let Some(front) = field.obstacles.front() {
        if front.trailing_edge(width) >= 0.0 {
            break;
        }
        field.obstacles.pop_front();
        removed += 1;
    }

    if removed > 0 {
        debug!("pruned {} obstacle(s), {} remaining", removed, field.len());
    }
}
