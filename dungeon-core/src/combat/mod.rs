//! Actor stats, damage, healing, and status effect processing.
//!
//! Every living thing in a room (player, enemies, bosses) wraps an `Actor`.
//! Damage is reduced by defense but always lands for at least one point,
//! and each hit opens an immunity window during which further damage is
//! ignored.

pub mod status;
pub mod weapons;

use serde::{Deserialize, Serialize};

use crate::constants::{ATTRIBUTE_CAP, MIN_DAMAGE};
use crate::movement::Body;
use status::{EffectAction, StatusEffect};

/// Base and current stats. Buffs and effects only touch the current values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorAttributes {
    pub base_strength: i32,
    pub base_hitpoints: i32,
    pub base_defense: i32,
    pub base_speed: i32,
    pub current_strength: i32,
    pub current_hitpoints: i32,
    pub current_defense: i32,
    pub current_speed: i32,
}

impl ActorAttributes {
    pub fn new(strength: i32, hitpoints: i32, defense: i32, speed: i32) -> Self {
        Self {
            base_strength: strength,
            base_hitpoints: hitpoints,
            base_defense: defense,
            base_speed: speed,
            current_strength: strength,
            current_hitpoints: hitpoints,
            current_defense: defense,
            current_speed: speed,
        }
    }
}

/// Something that happened to an actor and that a host may want to surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatEvent {
    Damaged(i32),
    Healed(i32),
}

#[derive(Debug, Clone)]
pub struct Actor {
    pub body: Body,
    pub attributes: ActorAttributes,
    effects: Vec<StatusEffect>,
    dead: bool,
    damage_timer: i32,
    damage_window: i32,
}

impl Actor {
    pub fn new(body: Body, attributes: ActorAttributes, damage_window: i32) -> Self {
        Self {
            body,
            attributes,
            effects: Vec::new(),
            dead: false,
            damage_timer: 0,
            damage_window,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn damage_timer(&self) -> i32 {
        self.damage_timer
    }

    pub fn can_be_damaged(&self) -> bool {
        self.damage_timer <= 0
    }

    /// Apply a hit. Returns the damage dealt, or `None` while immune.
    pub fn take_damage(&mut self, amount: i32) -> Option<i32> {
        if !self.can_be_damaged() {
            return None;
        }
        let dealt = (amount - self.attributes.current_defense).max(MIN_DAMAGE);
        self.attributes.current_hitpoints -= dealt;
        self.damage_timer = self.damage_window;
        if self.attributes.current_hitpoints <= 0 {
            self.dead = true;
        }
        Some(dealt)
    }

    /// Heal up to the cap. Returns the amount actually restored, or `None`
    /// when already at the cap or `amount` is not positive.
    pub fn take_healing(&mut self, amount: i32) -> Option<i32> {
        let room = ATTRIBUTE_CAP - self.attributes.current_hitpoints;
        if amount <= 0 || room <= 0 {
            return None;
        }
        let healed = amount.min(room);
        self.attributes.current_hitpoints += healed;
        Some(healed)
    }

    pub fn update_damage_timer(&mut self) {
        if self.damage_timer > 0 {
            self.damage_timer -= 1;
        }
    }

    pub fn effect_strength(&mut self, delta: i32) {
        let attrs = &mut self.attributes;
        attrs.current_strength = (attrs.current_strength + delta).min(ATTRIBUTE_CAP);
    }

    pub fn effect_defense(&mut self, delta: i32) {
        let attrs = &mut self.attributes;
        attrs.current_defense = (attrs.current_defense + delta).min(ATTRIBUTE_CAP);
    }

    pub fn inc_speed(&mut self, delta: i32) {
        self.attributes.current_speed += delta;
    }

    pub fn add_status_effect(&mut self, effect: StatusEffect) {
        self.effects.push(effect);
    }

    pub fn status_effects(&self) -> &[StatusEffect] {
        &self.effects
    }

    /// Advance every active effect by one frame.
    ///
    /// Expired effects are removed in the same pass without skipping the
    /// effect that follows them. Temporary attribute effects apply their
    /// negated potency once on removal.
    pub fn update_effects(&mut self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        let mut i = 0;
        while i < self.effects.len() {
            let (action, potency, fires) = {
                let effect = &self.effects[i];
                (effect.action, effect.potency(), effect.is_time())
            };
            if fires {
                events.extend(self.apply_action(action, potency));
            }
            self.effects[i].update_time();
            if self.effects[i].is_expired() {
                let effect = self.effects.remove(i);
                if effect.is_temporary() && effect.action.is_reversible() {
                    self.apply_action(effect.action, -effect.potency());
                }
            } else {
                i += 1;
            }
        }
        events
    }

    fn apply_action(&mut self, action: EffectAction, potency: i32) -> Option<CombatEvent> {
        match action {
            EffectAction::Heal => self.take_healing(potency).map(CombatEvent::Healed),
            EffectAction::Poison => self.take_damage(potency).map(CombatEvent::Damaged),
            EffectAction::Strength => {
                self.effect_strength(potency);
                None
            }
            EffectAction::Defense => {
                self.effect_defense(potency);
                None
            }
            EffectAction::Speed => {
                self.inc_speed(potency);
                None
            }
        }
    }
}
