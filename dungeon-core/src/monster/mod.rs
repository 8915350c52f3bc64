//! Hostile actors: regular enemies and the end-room boss.
//!
//! Both share one struct; `EnemyKind` selects which profile they were built
//! from and how they are drawn.

pub mod ai;

use bevy::math::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::Actor;
use crate::constants::ENEMY_SPRITE_VARIANTS;
use crate::engine::config::EnemyProfile;
use ai::WANDER_VECTORS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Grunt,
    Boss,
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub actor: Actor,
    kind: EnemyKind,
    trigger_range: f32,
    charge_speed: f32,
    triggered: bool,
    direction: usize,
    distance: i32,
    sprite_variant: u8,
}

impl Enemy {
    /// Build an enemy at `position`. Regular enemies draw a sprite variant
    /// before the wander direction; bosses only draw the direction.
    pub fn spawn<R: Rng + ?Sized>(
        kind: EnemyKind,
        profile: &EnemyProfile,
        position: Vec2,
        initial_distance: i32,
        rng: &mut R,
    ) -> Self {
        let sprite_variant = match kind {
            EnemyKind::Grunt => rng.gen_range(0..ENEMY_SPRITE_VARIANTS),
            EnemyKind::Boss => 0,
        };
        let direction = rng.gen_range(0..WANDER_VECTORS.len());
        Self {
            actor: profile.stats.actor(position),
            kind,
            trigger_range: profile.trigger_range,
            charge_speed: profile.charge_speed,
            triggered: false,
            direction,
            distance: initial_distance,
            sprite_variant,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn is_boss(&self) -> bool {
        self.kind == EnemyKind::Boss
    }

    pub fn is_triggered(&self) -> bool {
        self.triggered
    }

    pub fn trigger_range(&self) -> f32 {
        self.trigger_range
    }

    pub fn charge_speed(&self) -> f32 {
        self.charge_speed
    }

    pub fn sprite_variant(&self) -> u8 {
        self.sprite_variant
    }

    /// Index into `WANDER_VECTORS`
    pub fn wander_direction(&self) -> usize {
        self.direction
    }

    pub fn wander_distance(&self) -> i32 {
        self.distance
    }

    pub fn position(&self) -> Vec2 {
        self.actor.body.position
    }
}
