//! Inventory system
//!
//! Equipment a unit has picked up (already applied, kept as a record) and
//! the potions it still carries.

use super::item::Item;
use super::potion::Potion;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    equipment: Vec<Item>,
    potions: Vec<Potion>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an equipped item. Equipment is never removed.
    pub fn push_equipment(&mut self, item: Item) {
        self.equipment.push(item);
    }

    pub fn add_potion(&mut self, potion: Potion) {
        self.potions.push(potion);
    }

    pub fn equipment(&self) -> &[Item] {
        &self.equipment
    }

    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    /// Remove and return the potion at `index`, keeping the order of the rest
    pub fn take_potion(&mut self, index: usize) -> Option<Potion> {
        if index < self.potions.len() {
            Some(self.potions.remove(index))
        } else {
            None
        }
    }

    pub fn is_empty(&self) -> bool {
        self.equipment.is_empty() && self.potions.is_empty()
    }
}
