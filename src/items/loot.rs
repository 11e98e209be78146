//! Loot generation system
//!
//! Potion drops after every boss and the equipment offer between stages.

use rand::seq::SliceRandom;
use rand::Rng;

use super::item::{templates, Item};

/// Equipment pieces offered after a stage
pub const ITEM_OFFER_SIZE: usize = 3;
/// Most potions a single boss can drop
pub const MAX_POTION_DROP: usize = 3;

/// Generate a health or mana potion with equal odds
pub fn generate_potion(rng: &mut impl Rng) -> Item {
    if rng.gen_bool(0.5) {
        templates::health_potion()
    } else {
        templates::mana_potion()
    }
}

/// Generate boss potion drop: 1 to 3 potions
pub fn generate_potion_drop(rng: &mut impl Rng) -> Vec<Item> {
    let count = rng.gen_range(1..=MAX_POTION_DROP);
    (0..count).map(|_| generate_potion(rng)).collect()
}

/// Draw distinct equipment pieces for the post-stage offer
pub fn generate_item_offer(rng: &mut impl Rng) -> Vec<Item> {
    let catalogue = templates::equipment_catalogue();
    catalogue
        .choose_multiple(rng, ITEM_OFFER_SIZE)
        .cloned()
        .collect()
}
