//! Items: potions, keys, and items lying on the floor.
//!
//! Every item carries a unique id so two otherwise identical items are
//! still distinguishable when removed from an inventory.

use bevy::math::Vec2;
use serde::{Deserialize, Serialize};

use crate::combat::status::{EffectAction, StatusEffect};
use crate::constants::{POTION_DURATION, POTION_PULSE};
use crate::movement::Body;

/// Hitbox edge of an item lying on the floor
pub const DROPPED_ITEM_SIZE: f32 = 16.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PotionKind {
    Healing,
    Poison,
    Speed,
    Strength,
    Defense,
}

impl PotionKind {
    pub fn all() -> &'static [PotionKind] {
        &[
            PotionKind::Healing,
            PotionKind::Poison,
            PotionKind::Speed,
            PotionKind::Strength,
            PotionKind::Defense,
        ]
    }

    pub fn title(self) -> &'static str {
        match self {
            PotionKind::Healing => "healing",
            PotionKind::Poison => "poison",
            PotionKind::Speed => "speed",
            PotionKind::Strength => "strength",
            PotionKind::Defense => "defense",
        }
    }

    /// Catalogue effect for this potion. Hitpoint potions pulse every
    /// second and stay applied; attribute potions fire once and wear off.
    pub fn effect(self, potency: i32) -> StatusEffect {
        let (action, pulse, temporary) = match self {
            PotionKind::Healing => (EffectAction::Heal, POTION_PULSE, false),
            PotionKind::Poison => (EffectAction::Poison, POTION_PULSE, false),
            PotionKind::Speed => (EffectAction::Speed, POTION_DURATION, true),
            PotionKind::Strength => (EffectAction::Strength, POTION_DURATION, true),
            PotionKind::Defense => (EffectAction::Defense, POTION_DURATION, true),
        };
        StatusEffect::new(self.title(), action, POTION_DURATION, pulse, potency, temporary)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Potion { kind: PotionKind, effect: StatusEffect },
    Key,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub stackable: bool,
    pub kind: ItemKind,
}

impl Item {
    pub fn effect(&self) -> Option<&StatusEffect> {
        match &self.kind {
            ItemKind::Potion { effect, .. } => Some(effect),
            ItemKind::Key => None,
        }
    }

    pub fn has_effect(&self) -> bool {
        self.effect().is_some()
    }

    /// Stackable items of the same title and kind share an inventory slot.
    pub fn stacks_with(&self, other: &Item) -> bool {
        self.stackable && other.stackable && self.title == other.title && self.kind == other.kind
    }
}

/// Hands out items with fresh ids.
#[derive(Debug, Clone, Default)]
pub struct ItemFactory {
    next_id: u32,
}

impl ItemFactory {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn potion(&mut self, kind: PotionKind, potency: i32) -> Item {
        Item {
            id: self.next_id(),
            title: kind.title().to_string(),
            stackable: false,
            kind: ItemKind::Potion {
                kind,
                effect: kind.effect(potency),
            },
        }
    }

    pub fn key(&mut self, title: &str) -> Item {
        Item {
            id: self.next_id(),
            title: title.to_string(),
            stackable: false,
            kind: ItemKind::Key,
        }
    }
}

/// An item lying in the room. Empty drops still count for score on pickup.
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedItem {
    pub body: Body,
    pub item: Option<Item>,
}

impl DroppedItem {
    pub fn new(position: Vec2, item: Option<Item>) -> Self {
        Self {
            body: Body::new(position, Vec2::splat(DROPPED_ITEM_SIZE)),
            item,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_ids_unique() {
        let mut factory = ItemFactory::new();
        let a = factory.potion(PotionKind::Healing, 5);
        let b = factory.potion(PotionKind::Healing, 5);
        let key = factory.key("Dungeon Key");
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, key.id);
        assert_ne!(a, b);
    }

    #[test]
    fn test_catalogue_timings() {
        for kind in PotionKind::all() {
            let effect = kind.effect(3);
            assert_eq!(effect.remaining(), POTION_DURATION);
            match kind {
                PotionKind::Healing | PotionKind::Poison => {
                    assert_eq!(effect.pulse(), POTION_PULSE);
                    assert!(!effect.is_temporary());
                }
                _ => {
                    assert_eq!(effect.pulse(), POTION_DURATION);
                    assert!(effect.is_temporary());
                }
            }
            assert_eq!(effect.title, kind.title());
        }
    }

    #[test]
    fn test_key_has_no_effect() {
        let mut factory = ItemFactory::new();
        assert!(!factory.key("Dungeon Key").has_effect());
        assert!(factory.potion(PotionKind::Speed, 1).has_effect());
    }

    #[test]
    fn test_stacking_requires_flag() {
        let mut factory = ItemFactory::new();
        let a = factory.key("Dungeon Key");
        let mut b = factory.key("Dungeon Key");
        assert!(!a.stacks_with(&b));
        let mut a2 = a.clone();
        a2.stackable = true;
        b.stackable = true;
        assert!(a2.stacks_with(&b));
    }
}
