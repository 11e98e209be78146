//! Item definitions
//!
//! Equipment permanently raises the holder's stats the moment it is picked
//! up; potion items turn into consumable [`Potion`] entries instead.
//!
//! [`Potion`]: super::Potion

use std::fmt;

use crate::entities::Unit;

/// Which pool a potion refills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Health,
    Mana,
}

impl Resource {
    /// Short stat label used in menus and logs
    pub fn label(&self) -> &'static str {
        match self {
            Resource::Health => "HP",
            Resource::Mana => "MP",
        }
    }
}

/// Main item categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Weapon,
    Armor,
    Accessory,
    Potion(Resource),
}

impl ItemKind {
    /// Check if this is an equipment category
    pub fn is_equipment(&self) -> bool {
        matches!(self, ItemKind::Weapon | ItemKind::Armor | ItemKind::Accessory)
    }

    pub fn name(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
            ItemKind::Accessory => "Accessory",
            ItemKind::Potion(_) => "Potion",
        }
    }
}

/// Flat stat bonuses carried by an item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatBonuses {
    pub attack: i32,
    pub health: i32,
    pub defense: i32,
    pub mana: i32,
}

impl StatBonuses {
    pub const fn new(attack: i32, health: i32, defense: i32, mana: i32) -> Self {
        Self { attack, health, defense, mana }
    }
}

/// The main Item struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub name: String,
    /// Flavor text
    pub description: String,
    pub kind: ItemKind,
    pub bonuses: StatBonuses,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
        bonuses: StatBonuses,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            bonuses,
        }
    }

    pub fn is_equipment(&self) -> bool {
        self.kind.is_equipment()
    }

    /// The refilled resource, if this item is a potion
    pub fn potion_resource(&self) -> Option<Resource> {
        match self.kind {
            ItemKind::Potion(resource) => Some(resource),
            _ => None,
        }
    }

    /// Amount a potion item restores (0 for equipment)
    pub fn restore_amount(&self) -> i32 {
        match self.kind {
            ItemKind::Potion(Resource::Health) => self.bonuses.health,
            ItemKind::Potion(Resource::Mana) => self.bonuses.mana,
            _ => 0,
        }
    }

    /// Apply this item to a unit.
    ///
    /// Equipment raises attack, max health, defense and max mana by its
    /// bonuses. A potion applied directly restores its resource at once.
    pub fn apply_effect(&self, unit: &mut Unit) {
        match self.kind {
            ItemKind::Potion(Resource::Health) => {
                unit.heal(self.restore_amount());
            }
            ItemKind::Potion(Resource::Mana) => {
                unit.restore_mana(self.restore_amount());
            }
            _ => {
                let b = self.bonuses;
                if b.attack > 0 {
                    unit.increase_attack(b.attack);
                }
                if b.health > 0 {
                    unit.increase_max_health(b.health);
                }
                if b.defense > 0 {
                    unit.increase_defense(b.defense);
                }
                if b.mana > 0 {
                    unit.increase_max_mana(b.mana);
                }
            }
        }
    }

    /// One-line description with the non-zero bonuses appended
    pub fn display_info(&self) -> String {
        let mut info = format!("{} - {}", self.name, self.description);
        let b = self.bonuses;
        for (label, value) in [("ATK", b.attack), ("HP", b.health), ("DEF", b.defense), ("MP", b.mana)] {
            if value > 0 {
                info.push_str(&format!(" [{} +{}]", label, value));
            }
        }
        info
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Predefined item templates
pub mod templates {
    use super::*;

    pub fn fire_sword() -> Item {
        Item::new(
            "Fire Sword",
            "Burns enemies with fire damage",
            ItemKind::Weapon,
            StatBonuses::new(15, 0, 0, 0),
        )
    }

    pub fn ice_shield() -> Item {
        Item::new(
            "Ice Shield",
            "Freezes attackers occasionally",
            ItemKind::Armor,
            StatBonuses::new(0, 20, 10, 0),
        )
    }

    pub fn vampire_ring() -> Item {
        Item::new(
            "Vampire Ring",
            "Heals user when dealing damage",
            ItemKind::Accessory,
            StatBonuses::new(5, 0, 0, 0),
        )
    }

    pub fn poison_dagger() -> Item {
        Item::new(
            "Poison Dagger",
            "Poisons enemies on hit",
            ItemKind::Weapon,
            StatBonuses::new(8, 0, 0, 0),
        )
    }

    pub fn dragon_scale() -> Item {
        Item::new(
            "Dragon Scale",
            "Grants fire resistance and strength",
            ItemKind::Armor,
            StatBonuses::new(10, 30, 5, 0),
        )
    }

    pub fn lightning_orb() -> Item {
        Item::new(
            "Lightning Orb",
            "Chance to stun enemies",
            ItemKind::Accessory,
            StatBonuses::new(12, 0, 0, 0),
        )
    }

    pub fn health_potion() -> Item {
        Item::new(
            "Health Potion",
            "Restores HP",
            ItemKind::Potion(Resource::Health),
            StatBonuses::new(0, 30, 0, 0),
        )
    }

    pub fn mana_potion() -> Item {
        Item::new(
            "Mana Potion",
            "Restores MP",
            ItemKind::Potion(Resource::Mana),
            StatBonuses::new(0, 0, 0, 20),
        )
    }

    /// Every equipment piece that can be offered after a stage
    pub fn equipment_catalogue() -> Vec<Item> {
        vec![
            fire_sword(),
            ice_shield(),
            vampire_ring(),
            poison_dagger(),
            dragon_scale(),
            lightning_orb(),
        ]
    }
}
