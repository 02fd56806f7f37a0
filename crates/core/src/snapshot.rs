use serde::{Deserialize, Serialize};

use crate::types::{Card, VisualState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotSnapshot {
    pub card: Card,
    pub state: VisualState,
}

impl SlotSnapshot {
    /// The card value, or `None` while the slot is face-down.
    ///
    /// Display layers should render through this so hidden values never leak.
    pub fn visible_card(&self) -> Option<Card> {
        self.state.is_revealed().then_some(self.card)
    }
}

/// Read-only view of a session for display layers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub slots: Vec<SlotSnapshot>,
    pub pair_count: usize,
    pub trials: u32,
    pub matched_pairs: u32,
    pub best_score: Option<u32>,
    pub generation: u32,
    /// Two mismatched cards are face-up waiting to be hidden.
    pub reset_pending: bool,
    pub complete: bool,
}

impl SessionSnapshot {
    /// FNV-1a hash over everything a renderer shows.
    ///
    /// Cheap enough to compute every frame; equal fingerprints mean the frame
    /// would not change.
    pub fn fingerprint(&self) -> u64 {
        self.hasher().finish()
    }

    /// [`fingerprint`](Self::fingerprint) continued over caller state that
    /// also affects the frame (cursor, terminal size).
    pub fn fingerprint_with(&self, extra: &[u8]) -> u64 {
        let mut h = self.hasher();
        h.write(extra);
        h.finish()
    }

    fn hasher(&self) -> Fnv1a {
        let mut h = Fnv1a::new();
        for slot in &self.slots {
            h.write(&[slot.card.rank as u8, slot.card.suit as u8, slot.state as u8]);
        }
        h.write(&self.trials.to_le_bytes());
        h.write(&self.matched_pairs.to_le_bytes());
        h.write(&self.best_score.map_or(u32::MAX, |b| b).to_le_bytes());
        h.write(&self.generation.to_le_bytes());
        h.write(&[self.reset_pending as u8, self.complete as u8]);
        h
    }
}

struct Fnv1a(u64);

impl Fnv1a {
    fn new() -> Self {
        Self(0xcbf29ce484222325)
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(0x00000100000001B3);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}
