//! Player inventory: a 2x5 grid of item stacks plus equipped gear.
//!
//! Row 0 is the hotbar; item-use keys index into it.

use serde::{Deserialize, Serialize};

use crate::combat::weapons::Weapon;
use crate::equipment::Boots;
use crate::loot::Item;

pub const INVENTORY_ROWS: usize = 2;
pub const INVENTORY_COLUMNS: usize = 5;
pub const HOTBAR_ROW: usize = 0;

/// Grid position of a slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotIndex {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    slots: Vec<Vec<Vec<Item>>>,
    pub weapon: Option<Weapon>,
    pub boots: Option<Boots>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            slots: vec![vec![Vec::new(); INVENTORY_COLUMNS]; INVENTORY_ROWS],
            weapon: None,
            boots: None,
        }
    }
}

impl Inventory {
    fn indices() -> impl Iterator<Item = SlotIndex> {
        (0..INVENTORY_ROWS)
            .flat_map(|row| (0..INVENTORY_COLUMNS).map(move |col| SlotIndex { row, col }))
    }

    /// Place `item` on an existing stack it stacks with, otherwise in the
    /// first empty slot. Returns where it went, or `None` when full.
    pub fn add(&mut self, item: Item) -> Option<SlotIndex> {
        let target = Self::indices()
            .find(|idx| {
                self.slot(*idx)
                    .first()
                    .is_some_and(|top| top.stacks_with(&item))
            })
            .or_else(|| Self::indices().find(|idx| self.slot(*idx).is_empty()))?;
        self.slots[target.row][target.col].push(item);
        Some(target)
    }

    /// Whether `add` would find a place for `item`.
    pub fn can_accept(&self, item: &Item) -> bool {
        Self::indices().any(|idx| match self.slot(idx).first() {
            Some(top) => top.stacks_with(item),
            None => true,
        })
    }

    /// Remove this exact item. Returns false if it is not held.
    pub fn remove(&mut self, item: &Item) -> bool {
        for stack in self.slots.iter_mut().flatten() {
            if let Some(pos) = stack.iter().position(|held| held == item) {
                stack.remove(pos);
                return true;
            }
        }
        false
    }

    pub fn slot(&self, index: SlotIndex) -> &[Item] {
        self.slots
            .get(index.row)
            .and_then(|row| row.get(index.col))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Top item of hotbar slot `col`
    pub fn hotbar_item(&self, col: usize) -> Option<&Item> {
        self.slot(SlotIndex { row: HOTBAR_ROW, col }).first()
    }

    pub fn hotbar(&self) -> &[Vec<Item>] {
        &self.slots[HOTBAR_ROW]
    }

    pub fn occupied_slots(&self) -> Vec<SlotIndex> {
        Self::indices().filter(|idx| !self.slot(*idx).is_empty()).collect()
    }

    pub fn item_count(&self) -> usize {
        self.slots.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_full(&self) -> bool {
        Self::indices().all(|idx| !self.slot(idx).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loot::{ItemFactory, PotionKind};

    #[test]
    fn test_inventory_default() {
        let inv = Inventory::default();
        assert_eq!(inv.item_count(), 0);
        assert!(inv.occupied_slots().is_empty());
        assert!(inv.weapon.is_none());
    }

    #[test]
    fn test_add_fills_row_major() {
        let mut factory = ItemFactory::new();
        let mut inv = Inventory::default();
        let first = inv.add(factory.potion(PotionKind::Healing, 5));
        let second = inv.add(factory.potion(PotionKind::Healing, 5));
        assert_eq!(first, Some(SlotIndex { row: 0, col: 0 }));
        assert_eq!(second, Some(SlotIndex { row: 0, col: 1 }));
    }

    #[test]
    fn test_stackable_items_share_slot() {
        let mut factory = ItemFactory::new();
        let mut inv = Inventory::default();
        let mut a = factory.key("Gem");
        a.stackable = true;
        let mut b = factory.key("Gem");
        b.stackable = true;
        inv.add(a);
        let idx = inv.add(b.clone());
        assert_eq!(idx, Some(SlotIndex { row: 0, col: 0 }));
        assert_eq!(inv.slot(SlotIndex { row: 0, col: 0 }).len(), 2);
        assert!(inv.remove(&b));
        assert_eq!(inv.slot(SlotIndex { row: 0, col: 0 }).len(), 1);
    }

    #[test]
    fn test_inventory_full() {
        let mut factory = ItemFactory::new();
        let mut inv = Inventory::default();
        for _ in 0..INVENTORY_ROWS * INVENTORY_COLUMNS {
            assert!(inv.add(factory.key("Dungeon Key")).is_some());
        }
        assert!(inv.is_full());
        assert_eq!(inv.add(factory.key("Dungeon Key")), None);
        assert_eq!(inv.item_count(), 10);
    }

    #[test]
    fn test_remove_exact_item() {
        let mut factory = ItemFactory::new();
        let mut inv = Inventory::default();
        let a = factory.key("Dungeon Key");
        let b = factory.key("Dungeon Key");
        inv.add(a.clone());
        inv.add(b.clone());
        assert!(inv.remove(&b));
        assert_eq!(inv.occupied_slots(), vec![SlotIndex { row: 0, col: 0 }]);
        assert_eq!(inv.hotbar_item(0), Some(&a));
        assert!(!inv.remove(&b));
    }

    #[test]
    fn test_hotbar_out_of_range() {
        let inv = Inventory::default();
        assert!(inv.hotbar_item(7).is_none());
        assert_eq!(inv.slot(SlotIndex { row: 5, col: 0 }).len(), 0);
    }
}
