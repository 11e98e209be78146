//! Resource pools
//!
//! Bounded health and mana values carried by every combatant.

/// A bounded resource such as health or mana
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pool {
    pub current: i32,
    pub max: i32,
}

impl Pool {
    /// Create a full pool
    pub fn new(max: i32) -> Self {
        let max = max.max(0);
        Self { current: max, max }
    }

    /// Remove up to `amount`, returning what was actually removed
    pub fn drain(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current);
        self.current -= actual;
        actual
    }

    /// Add up to `amount` without passing the maximum.
    /// Returns the amount actually restored.
    pub fn restore(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.max - self.current);
        self.current += actual;
        actual
    }

    /// Spend `amount` if the pool holds enough of it
    pub fn spend(&mut self, amount: i32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    /// Raise both the maximum and the current value
    pub fn grow(&mut self, amount: i32) {
        let amount = amount.max(0);
        self.max += amount;
        self.current += amount;
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0
    }

    pub fn percentage(&self) -> f32 {
        if self.max == 0 {
            0.0
        } else {
            self.current as f32 / self.max as f32
        }
    }
}
