//! The player character: an actor with an inventory and a shot cooldown.

pub mod inventory;

use bevy::math::Vec2;

use crate::combat::weapons::Projectile;
use crate::combat::Actor;
use crate::engine::config::ActorProfile;
use inventory::Inventory;

#[derive(Debug, Clone)]
pub struct Player {
    pub actor: Actor,
    pub inventory: Inventory,
    shot_timer: i32,
}

impl Player {
    pub fn new(profile: &ActorProfile, position: Vec2) -> Self {
        Self {
            actor: profile.actor(position),
            inventory: Inventory::default(),
            shot_timer: 0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.actor.body.position
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.actor.body.position = position;
    }

    pub fn shot_timer(&self) -> i32 {
        self.shot_timer
    }

    pub fn can_shoot(&self) -> bool {
        self.shot_timer <= 0
    }

    pub fn decrease_shot_timer(&mut self) {
        if self.shot_timer > 0 {
            self.shot_timer -= 1;
        }
    }

    /// Fire the equipped weapon along `direction` (unit vector) from the
    /// player's top-left corner. Starts the cooldown. `None` while cooling
    /// down or without a weapon.
    pub fn generate_attack(&mut self, direction: Vec2, angle: f32, cooldown: i32, range: f32) -> Option<Projectile> {
        if !self.can_shoot() {
            return None;
        }
        let weapon = self.inventory.weapon.as_ref()?;
        let mut projectile = weapon.generate_projectile(
            direction,
            angle,
            self.actor.attributes.current_strength,
            range,
        );
        projectile.body.position = self.actor.body.position;
        self.shot_timer = cooldown;
        Some(projectile)
    }

    /// Apply equipped boots if they have not been applied yet.
    pub fn update_player_attributes(&mut self) {
        if let Some(boots) = self.inventory.boots.as_mut() {
            boots.apply_to(&mut self.actor);
        }
    }

    /// Consume the top item of hotbar slot `col` if it has an effect.
    /// Items without an effect stay put. Returns whether an item was used.
    pub fn use_item(&mut self, col: usize) -> bool {
        let Some(item) = self.inventory.hotbar_item(col).cloned() else {
            return false;
        };
        let Some(effect) = item.effect().cloned() else {
            return false;
        };
        self.actor.add_status_effect(effect);
        self.inventory.remove(&item)
    }
}
