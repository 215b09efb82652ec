use std::collections::VecDeque;

use crate::systems::*;
use crate::{Bird, Config, Events, GameRng, Obstacle, PhysicsProfile, Score, Viewport};

/// Scrolling obstacles, kept in spawn order (which is also left-to-right order)
#[derive(Debug, Clone)]
pub struct ObstacleField {
    pub obstacles: VecDeque<Obstacle>,
    pub width: f32,
    pub scroll_speed: f32,
    pub gap_size: f32,
}

impl ObstacleField {
    pub fn new(width: f32, profile: &PhysicsProfile) -> Self {
        Self {
            obstacles: VecDeque::new(),
            width,
            scroll_speed: profile.scroll_speed,
            gap_size: profile.gap_size,
        }
    }

    /// One frame of obstacle logic: spawn, scroll, collide, score, prune
    pub fn advance(
        &mut self,
        bird: &Bird,
        viewport: &Viewport,
        config: &Config,
        score: &mut Score,
        events: &mut Events,
        rng: &mut GameRng,
    ) {
        spawn_obstacles(self, viewport, config, rng, events);
        scroll_obstacles(self);
        check_collisions(self, bird, events);
        check_scoring(self, bird, score, events);
        prune_obstacles(self);
    }

    /// Drop every obstacle and pick up the active profile
    pub fn reset(&mut self, profile: &PhysicsProfile) {
        self.obstacles.clear();
        self.apply_profile(profile);
    }

    /// Retarget speed and gap without touching live obstacles
    pub fn apply_profile(&mut self, profile: &PhysicsProfile) {
        self.scroll_speed = profile.scroll_speed;
        self.gap_size = profile.gap_size;
    }

    /// Most recently spawned obstacle
    pub fn newest(&self) -> Option<&Obstacle> {
        self.obstacles.back()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }
}
