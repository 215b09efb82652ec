use glam::Vec2;

use crate::geometry::Aabb;
use crate::PhysicsProfile;

/// What the bird touched during an integration step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    None,
    Ceiling,
    Floor,
}

/// Bird component - the player's avatar
#[derive(Debug, Clone, Copy)]
pub struct Bird {
    pub x: f32, // fixed horizontal position
    pub y: f32,
    pub velocity: f32, // positive = down
    pub radius: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
}

impl Bird {
    pub fn new(x: f32, y: f32, radius: f32, profile: &PhysicsProfile) -> Self {
        Self {
            x,
            y,
            velocity: 0.0,
            radius,
            gravity: profile.gravity,
            jump_impulse: profile.jump_impulse,
        }
    }

    /// Advance one frame of gravity and clamp against the floor and ceiling.
    ///
    /// Hitting the floor is reported as [`Contact::Floor`]; the ceiling only
    /// stops the bird and zeroes its velocity.
    pub fn integrate(&mut self, floor: f32) -> Contact {
        self.velocity += self.gravity;
        self.y += self.velocity;

        let mut contact = Contact::None;

        if self.y + self.radius >= floor {
            self.y = floor - self.radius;
            contact = Contact::Floor;
        }

        if self.y - self.radius <= 0.0 {
            self.y = self.radius;
            self.velocity = 0.0;
            if contact == Contact::None {
                contact = Contact::Ceiling;
            }
        }

        contact
    }

    /// Replace (not add to) the current velocity with the jump impulse
    pub fn jump(&mut self) {
        self.velocity = self.jump_impulse;
    }

    /// Recenter vertically, stop, and pick up the active profile
    pub fn reset(&mut self, viewport_height: f32, profile: &PhysicsProfile) {
        self.y = viewport_height / 2.0;
        self.velocity = 0.0;
        self.apply_profile(profile);
    }

    /// Retarget physics constants without touching position or velocity
    pub fn apply_profile(&mut self, profile: &PhysicsProfile) {
        self.gravity = profile.gravity;
        self.jump_impulse = profile.jump_impulse;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center_size(Vec2::new(self.x, self.y), Vec2::splat(self.radius * 2.0))
    }
}

/// One pair of barriers with a gap between them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    pub x: f32,       // leading (left) edge
    pub gap_top: f32, // y of the top edge of the gap
    pub passed: bool, // set once the bird has cleared it
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self {
            x,
            gap_top,
            passed: false,
        }
    }

    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }

    pub fn gap_bottom(&self, gap_size: f32) -> f32 {
        self.gap_top + gap_size
    }

    /// Top and bottom barriers. Both extend without bound away from the gap.
    pub fn barriers(&self, width: f32, gap_size: f32) -> [Aabb; 2] {
        let right = self.trailing_edge(width);
        [
            Aabb::new(
                Vec2::new(self.x, f32::NEG_INFINITY),
                Vec2::new(right, self.gap_top),
            ),
            Aabb::new(
                Vec2::new(self.x, self.gap_bottom(gap_size)),
                Vec2::new(right, f32::INFINITY),
            ),
        ]
    }
}
