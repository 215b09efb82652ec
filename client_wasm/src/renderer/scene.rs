//! Turns a simulation snapshot into per-instance draw data

use game_core::{Aabb, Snapshot};
use glam::Vec2;

/// Per-instance data (matches the shader's InstanceInput)
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub transform: [f32; 4], // x, y, scale_x, scale_y
    pub tint: [f32; 4],      // rgba
}

pub const SKY: [f32; 4] = [0.439, 0.773, 0.808, 1.0]; // #70c5ce
// 40% white over the sky, pre-blended so overlapping circles read as one cloud
pub const CLOUD: [f32; 4] = [0.663, 0.864, 0.885, 1.0];
pub const BARRIER: [f32; 4] = [0.0, 0.722, 0.580, 1.0]; // #00b894
pub const BARRIER_CAP: [f32; 4] = [0.333, 0.937, 0.769, 1.0]; // #55efc4
pub const BIRD: [f32; 4] = [1.0, 0.463, 0.459, 1.0]; // #ff7675
pub const BIRD_SHINE: [f32; 4] = [1.0, 1.0, 1.0, 0.6];

const CAP_HEIGHT: f32 = 20.0;
const CAP_OVERHANG: f32 = 2.0;
const SHINE_OFFSET: f32 = 5.0;
const SHINE_RADIUS: f32 = 4.0;

/// Instances grouped by draw layer, back to front
#[derive(Debug, Default)]
pub struct Scene {
    pub background: Vec<InstanceData>, // circles
    pub barriers: Vec<InstanceData>,   // rectangles
    pub foreground: Vec<InstanceData>, // circles
}

/// Build every instance for one frame
pub fn build_scene(snapshot: &Snapshot) -> Scene {
    let viewport = snapshot.viewport;
    let mut scene = Scene::default();

    // Two cloud clusters: one pinned top-left, one following the right edge
    for (x, y, r) in [(100.0, 100.0, 30.0), (140.0, 100.0, 40.0), (180.0, 100.0, 30.0)] {
        scene.background.push(circle(Vec2::new(x, y), r, CLOUD));
    }
    for (dx, y, r) in [(150.0, 200.0, 40.0), (100.0, 220.0, 50.0), (50.0, 200.0, 30.0)] {
        scene
            .background
            .push(circle(Vec2::new(viewport.width - dx, y), r, CLOUD));
    }

    let field = snapshot.field;
    for obstacle in field.iter() {
        let [top, bottom] = obstacle.barriers(field.width, field.gap_size);
        scene.barriers.push(rect(top.clip_y(0.0, viewport.height), BARRIER));
        scene
            .barriers
            .push(rect(bottom.clip_y(0.0, viewport.height), BARRIER));

        let cap_width = field.width + CAP_OVERHANG * 2.0;
        let cap_x = obstacle.x - CAP_OVERHANG;
        for cap_y in [obstacle.gap_top - CAP_HEIGHT, obstacle.gap_bottom(field.gap_size)] {
            scene.barriers.push(rect(
                Aabb::new(
                    Vec2::new(cap_x, cap_y),
                    Vec2::new(cap_x + cap_width, cap_y + CAP_HEIGHT),
                ),
                BARRIER_CAP,
            ));
        }
    }

    let bird = snapshot.bird;
    let center = Vec2::new(bird.x, bird.y);
    scene.foreground.push(circle(center, bird.radius, BIRD));
    scene.foreground.push(circle(
        center + Vec2::new(SHINE_OFFSET, -SHINE_OFFSET),
        SHINE_RADIUS,
        BIRD_SHINE,
    ));

    scene
}

fn rect(bounds: Aabb, tint: [f32; 4]) -> InstanceData {
    let size = bounds.size();
    InstanceData {
        transform: [bounds.min.x, bounds.min.y, size.x, size.y],
        tint,
    }
}

fn circle(center: Vec2, radius: f32, tint: [f32; 4]) -> InstanceData {
    InstanceData {
        transform: [center.x, center.y, radius * 2.0, radius * 2.0],
        tint,
    }
}
