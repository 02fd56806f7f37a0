//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the deck generator and the card-selection state
//! machine. It has no dependencies on terminal I/O, which makes it:
//!
//! - **Deterministic**: the same seed deals the same boards
//! - **Testable**: every transition goes through one reducer
//! - **Portable**: drive it from the terminal UI, a script, or a test
//!
//! # Module Structure
//!
//! - [`deck`]: paired deck generation and the [`DeckSource`] seam
//! - [`session`]: reducer ([`SessionState`]) and timer-driven [`GameSession`]
//! - [`snapshot`]: read-only view for display layers
//! - [`rng`]: seeded ChaCha8 RNG with a Fisher-Yates shuffle
//! - [`config`]: session tunables and their validation
//! - [`error`]: typed errors for deals, selections and configuration
//!
//! # Game Rules
//!
//! - The board holds `2 × pair_count` face-down cards; every value appears twice
//! - Revealing a second card completes a trial
//! - Equal values stay face-up as matched; unequal values hide again after
//!   the mismatch delay (1000ms by default)
//! - Finishing all pairs with fewer trials than the best score records a new best
//! - A new game reshuffles the board and keeps the best score
//!
//! # Example
//!
//! ```
//! use flip_cards_core::{GameSession, Outcome, SessionConfig};
//!
//! let mut game = GameSession::new(SessionConfig::new(2, 42)).unwrap();
//! assert!(matches!(game.select(0).unwrap(), Outcome::Flipped { slot: 0 }));
//! game.select(1).unwrap();
//! assert_eq!(game.trials(), 1);
//!
//! // A mismatch hides itself once the delay has elapsed.
//! game.tick(1000);
//! assert!(game.pending_reset().is_none());
//! ```

pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use flip_cards_types as types;

pub use config::SessionConfig;
pub use deck::{deal_pairs, validate_pairs, DeckSource, FixedDeck, RandomDeck};
pub use error::{ConfigError, DeckError, SessionError};
pub use rng::GameRng;
pub use session::{
    reduce, CardSlot, Event, GameSession, IgnoreReason, Outcome, PendingReset, SessionState,
};
pub use snapshot::{SessionSnapshot, SlotSnapshot};
