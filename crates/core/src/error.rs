use thiserror::Error;

/// Failures while producing a deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("pair count must be at least 1")]
    EmptyDeck,
    #[error("cannot deal {requested} pairs from a universe of {available} distinct cards")]
    PairCountTooLarge { requested: usize, available: usize },
    #[error("fixed layout holds {available} pairs but {requested} were requested")]
    LayoutMismatch { requested: usize, available: usize },
    #[error("deck has {len} cards; every value must appear exactly twice")]
    Unpaired { len: usize },
}

/// Failures reported by the game session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("slot {index} is out of range for a board of {len} slots")]
    SlotOutOfRange { index: usize, len: usize },
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Invalid session configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("pair count {0} is outside 1..={max}", max = flip_cards_types::UNIVERSE_SIZE)]
    PairCount(usize),
    #[error("mismatch delay must be greater than zero")]
    ZeroDelay,
}
