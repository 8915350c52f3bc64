//! Wearable equipment. Boots apply their flat buffs exactly once.

use serde::{Deserialize, Serialize};

use crate::combat::Actor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boots {
    pub title: String,
    pub defense_buff: i32,
    pub strength_buff: i32,
    pub speed_buff: i32,
    applied: bool,
}

impl Boots {
    pub fn new(title: impl Into<String>, defense_buff: i32, strength_buff: i32, speed_buff: i32) -> Self {
        Self {
            title: title.into(),
            defense_buff,
            strength_buff,
            speed_buff,
            applied: false,
        }
    }

    pub fn cheap_boots() -> Self {
        Self::new("Cheap Boots", 0, 10, 2)
    }

    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Apply the buffs to `actor` if not yet applied. Returns whether
    /// anything changed.
    pub fn apply_to(&mut self, actor: &mut Actor) -> bool {
        if self.applied {
            return false;
        }
        actor.effect_defense(self.defense_buff);
        actor.effect_strength(self.strength_buff);
        actor.inc_speed(self.speed_buff);
        self.applied = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::ActorAttributes;
    use crate::movement::Body;
    use bevy::math::Vec2;

    #[test]
    fn test_boots_apply_once() {
        let mut actor = Actor::new(
            Body::new(Vec2::ZERO, Vec2::splat(32.0)),
            ActorAttributes::new(50, 100, 0, 4),
            30,
        );
        let mut boots = Boots::cheap_boots();
        assert!(boots.apply_to(&mut actor));
        assert!(!boots.apply_to(&mut actor));
        assert_eq!(actor.attributes.current_strength, 60);
        assert_eq!(actor.attributes.current_speed, 6);
        assert_eq!(actor.attributes.current_defense, 0);
        assert!(boots.is_applied());
    }
}
