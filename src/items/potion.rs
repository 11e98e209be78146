//! Consumable potions

use super::item::{Item, Resource};

/// A single consumable stack entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Potion {
    name: String,
    amount: i32,
    resource: Resource,
}

impl Potion {
    pub fn new(name: impl Into<String>, amount: i32, resource: Resource) -> Self {
        Self {
            name: name.into(),
            amount: amount.max(0),
            resource,
        }
    }

    /// Convert a potion item into its consumable form
    pub fn from_item(item: &Item) -> Option<Self> {
        item.potion_resource()
            .map(|resource| Self::new(item.name.clone(), item.restore_amount(), resource))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> i32 {
        self.amount
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn is_health(&self) -> bool {
        self.resource == Resource::Health
    }

    pub fn display_info(&self) -> String {
        format!("{} - Restores {} {}", self.name, self.amount, self.resource.label())
    }
}

/// What drinking a potion did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionUse {
    pub potion: Potion,
    /// Resource value before drinking
    pub before: i32,
    /// Resource value after drinking
    pub after: i32,
}

impl PotionUse {
    pub fn restored(&self) -> i32 {
        self.after - self.before
    }
}
