//! Deck module - paired deck generation
//!
//! A deal happens in two passes:
//!
//! 1. **Pick**: draw `pair_count` distinct values from a copy of the universe
//!    without replacement (a partial Fisher-Yates over the copy), pushing each
//!    value twice.
//! 2. **Shuffle**: run a full Fisher-Yates over the paired list.
//!
//! The universe slice is never mutated, so repeated deals from the same
//! constant are independent.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::DeckError;
use crate::rng::GameRng;
use crate::types::{Card, STANDARD_DECK};

/// Deal `pair_count` pairs drawn from `universe`, shuffled.
///
/// # Examples
///
/// ```
/// use flip_cards_core::{deal_pairs, GameRng};
/// use flip_cards_types::STANDARD_DECK;
///
/// let mut rng = GameRng::new(42);
/// let deck = deal_pairs(&STANDARD_DECK, 9, &mut rng).unwrap();
/// assert_eq!(deck.len(), 18);
/// ```
pub fn deal_pairs<T: Copy>(
    universe: &[T],
    pair_count: usize,
    rng: &mut GameRng,
) -> Result<Vec<T>, DeckError> {
    if pair_count == 0 {
        return Err(DeckError::EmptyDeck);
    }
    if pair_count > universe.len() {
        return Err(DeckError::PairCountTooLarge {
            requested: pair_count,
            available: universe.len(),
        });
    }

    let mut pool = universe.to_vec();
    let mut cards = Vec::with_capacity(pair_count * 2);
    for k in 0..pair_count {
        let pick = k + rng.next_range(pool.len() - k);
        pool.swap(k, pick);
        cards.push(pool[k]);
        cards.push(pool[k]);
    }

    rng.shuffle(&mut cards);
    Ok(cards)
}

/// Check the paired-value invariant: non-empty, and every value occurs exactly twice.
pub fn validate_pairs<T: Eq + Hash>(cards: &[T]) -> Result<(), DeckError> {
    if cards.is_empty() {
        return Err(DeckError::EmptyDeck);
    }
    let mut counts: HashMap<&T, u32> = HashMap::with_capacity(cards.len() / 2);
    for card in cards {
        *counts.entry(card).or_insert(0) += 1;
    }
    if cards.len() % 2 != 0 || counts.values().any(|&n| n != 2) {
        return Err(DeckError::Unpaired { len: cards.len() });
    }
    Ok(())
}

/// Where a session gets its cards from on every new game.
pub trait DeckSource {
    fn deal(&mut self, pair_count: usize) -> Result<Vec<Card>, DeckError>;
}

/// Seeded random deals from the standard 52-card universe.
#[derive(Debug, Clone)]
pub struct RandomDeck {
    rng: GameRng,
}

impl RandomDeck {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl DeckSource for RandomDeck {
    fn deal(&mut self, pair_count: usize) -> Result<Vec<Card>, DeckError> {
        deal_pairs(&STANDARD_DECK, pair_count, &mut self.rng)
    }
}

/// Replays one predetermined layout on every deal.
///
/// Useful for scripted play and tests that need a known board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDeck {
    cards: Vec<Card>,
}

impl FixedDeck {
    pub fn new(cards: Vec<Card>) -> Result<Self, DeckError> {
        validate_pairs(&cards)?;
        Ok(Self { cards })
    }

    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }
}

impl DeckSource for FixedDeck {
    fn deal(&mut self, pair_count: usize) -> Result<Vec<Card>, DeckError> {
        if pair_count != self.pair_count() {
            return Err(DeckError::LayoutMismatch {
                requested: pair_count,
                available: self.pair_count(),
            });
        }
        Ok(self.cards.clone())
    }
}
