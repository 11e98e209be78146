//! Turn management for combat
//!
//! Handles the opening coin flip and alternating turns between the hero and
//! the boss.

use rand::Rng;

/// One side of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Hero,
    Boss,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Hero => Side::Boss,
            Side::Boss => Side::Hero,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    pub fn name(&self) -> &'static str {
        match self {
            CoinFace::Heads => "Heads",
            CoinFace::Tails => "Tails",
        }
    }
}

/// Outcome of the opening coin flip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinToss {
    /// What the hero called
    pub call: CoinFace,
    /// What the coin landed on
    pub result: CoinFace,
    /// Who acts first
    pub first: Side,
}

impl CoinToss {
    pub fn hero_won(&self) -> bool {
        self.call == self.result
    }
}

/// Flip a fair coin
pub fn flip_coin(rng: &mut impl Rng) -> CoinFace {
    if rng.gen_bool(0.5) {
        CoinFace::Heads
    } else {
        CoinFace::Tails
    }
}

/// Flip against the hero's call; a correct call means the hero goes first
pub fn coin_flip(call: CoinFace, rng: &mut impl Rng) -> CoinToss {
    let result = flip_coin(rng);
    let first = if call == result { Side::Hero } else { Side::Boss };
    CoinToss { call, result, first }
}

/// Tracks whose turn it is in a two-sided battle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnManager {
    first: Side,
    current: Side,
    /// Current round number
    round: u32,
}

impl TurnManager {
    pub fn new(first: Side) -> Self {
        Self {
            first,
            current: first,
            round: 1,
        }
    }

    /// The side whose turn it is
    pub fn current(&self) -> Side {
        self.current
    }

    /// Hand the turn to the other side. A new round starts whenever the
    /// opening side gets the turn back.
    pub fn next_turn(&mut self) {
        self.current = self.current.opponent();
        if self.current == self.first {
            self.round += 1;
        }
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn first(&self) -> Side {
        self.first
    }
}
