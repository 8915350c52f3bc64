//! Ranged weapons and the projectiles they fire.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::movement::Body;

/// Default projectile hitbox edge in pixels
pub const PROJECTILE_SIZE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub title: String,
    /// Projectile speed in pixels per frame
    pub speed: f32,
    pub damage: i32,
}

impl Weapon {
    pub fn new(title: impl Into<String>, speed: f32, damage: i32) -> Self {
        Self {
            title: title.into(),
            speed,
            damage,
        }
    }

    pub fn basic_bow() -> Self {
        Self::new("Basic Bow", 8.0, 20)
    }

    /// Projectile heading along `direction` (a unit vector). Damage is the
    /// weapon's damage plus the shooter's strength. The caller positions it.
    pub fn generate_projectile(&self, direction: Vec2, angle: f32, strength: i32, range: f32) -> Projectile {
        Projectile {
            body: Body::new(Vec2::ZERO, Vec2::splat(PROJECTILE_SIZE)),
            velocity: direction * self.speed,
            damage: self.damage + strength,
            angle,
            range,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub body: Body,
    velocity: Vec2,
    damage: i32,
    angle: f32,
    range: f32,
}

impl Projectile {
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn damage(&self) -> i32 {
        self.damage
    }

    /// Heading in degrees, counter-clockwise from +x with y pointing up
    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn range(&self) -> f32 {
        self.range
    }

    /// Spend range for one step of travel.
    pub fn consume_range(&mut self, step: Vec2) {
        self.range = (self.range - step.length()).max(0.0);
    }

    pub fn is_out_of_range(&self) -> bool {
        self.range <= 0.0
    }
}

/// Aim vector from `origin` toward `target`. A zero vector becomes (0, 1).
pub fn aim_delta(origin: Vec2, target: Vec2) -> Vec2 {
    let delta = target - origin;
    if delta == Vec2::ZERO {
        Vec2::new(0.0, 1.0)
    } else {
        delta
    }
}

/// Heading of `delta` in degrees within [0, 360). Screen y grows downward,
/// so the angle is negated.
pub fn aim_angle(delta: Vec2) -> f32 {
    let degrees = (-delta.y.atan2(delta.x)).to_degrees();
    (degrees + 360.0) % 360.0
}
