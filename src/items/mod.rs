//! Item system

pub mod item;
pub mod potion;
pub mod inventory;
pub mod loot;

pub use item::{Item, ItemKind, Resource, StatBonuses, templates};
pub use potion::{Potion, PotionUse};
pub use inventory::Inventory;
pub use loot::{generate_potion, generate_potion_drop, generate_item_offer, ITEM_OFFER_SIZE, MAX_POTION_DROP};
