//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core session logic, terminal rendering, scripted play).
//!
//! # Card Universe
//!
//! Cards are drawn from the standard 52-card deck:
//!
//! - **Ranks**: `2 3 4 5 6 7 8 9 10 J Q K A`
//! - **Suits**: `♢ ♣ ♤ ♥`
//! - **Order**: rank-major ([`STANDARD_DECK`] lists all suits of `2` first)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `MISMATCH_DELAY_MS` | 1000 | Time a mismatched pair stays face-up |
//!
//! # Examples
//!
//! ```
//! use flip_cards_types::{Card, Rank, Suit, VisualState, GameAction};
//!
//! let card = Card::new(Rank::Ten, Suit::Hearts);
//! assert_eq!(card.to_string(), "10♥");
//!
//! assert!(VisualState::NotFlipped.is_selectable());
//! assert!(!VisualState::Matched.is_selectable());
//!
//! assert_eq!(GameAction::from_str("select 3"), Some(GameAction::Select(3)));
//! assert_eq!(GameAction::from_str("new"), Some(GameAction::NewGame));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long a mismatched pair stays revealed before being hidden again.
pub const MISMATCH_DELAY_MS: u32 = 1000;

/// Default number of pairs on the board.
pub const DEFAULT_PAIR_COUNT: usize = 9;

/// Number of distinct card values available.
pub const UNIVERSE_SIZE: usize = 52;

/// Card rank, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Short label as printed on the card face.
    pub fn as_str(&self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }

    /// Parse a rank label (case-insensitive for face cards).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "2" => Some(Rank::Two),
            "3" => Some(Rank::Three),
            "4" => Some(Rank::Four),
            "5" => Some(Rank::Five),
            "6" => Some(Rank::Six),
            "7" => Some(Rank::Seven),
            "8" => Some(Rank::Eight),
            "9" => Some(Rank::Nine),
            "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            "A" => Some(Rank::Ace),
            _ => None,
        }
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Diamonds,
    Clubs,
    Spades,
    Hearts,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Clubs, Suit::Spades, Suit::Hearts];

    pub fn glyph(&self) -> char {
        match self {
            Suit::Diamonds => '♢',
            Suit::Clubs => '♣',
            Suit::Spades => '♤',
            Suit::Hearts => '♥',
        }
    }

    /// Parse from a glyph or an ASCII letter (`d`, `c`, `s`, `h`).
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '♢' | 'd' | 'D' => Some(Suit::Diamonds),
            '♣' | 'c' | 'C' => Some(Suit::Clubs),
            '♤' | 's' | 'S' => Some(Suit::Spades),
            '♥' | 'h' | 'H' => Some(Suit::Hearts),
            _ => None,
        }
    }

    /// Diamonds and hearts render red.
    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Diamonds | Suit::Hearts)
    }
}

/// A card value. Purely a label: two slots holding equal cards form a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parse notation such as `"10h"`, `"Q♣"` or `"a♤"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flip_cards_types::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::parse("10h"), Some(Card::new(Rank::Ten, Suit::Hearts)));
    /// assert_eq!(Card::parse("Q♣"), Some(Card::new(Rank::Queen, Suit::Clubs)));
    /// assert_eq!(Card::parse("1x"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let suit_char = s.chars().last()?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];
        Some(Self {
            rank: Rank::from_str(rank_part)?,
            suit: Suit::from_char(suit_char)?,
        })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.as_str(), self.suit.glyph())
    }
}

const fn build_standard_deck() -> [Card; UNIVERSE_SIZE] {
    let mut out = [Card::new(Rank::Two, Suit::Diamonds); UNIVERSE_SIZE];
    let mut r = 0;
    while r < Rank::ALL.len() {
        let mut s = 0;
        while s < Suit::ALL.len() {
            out[r * Suit::ALL.len() + s] = Card::new(Rank::ALL[r], Suit::ALL[s]);
            s += 1;
        }
        r += 1;
    }
    out
}

/// The full card universe, rank-major.
pub const STANDARD_DECK: [Card; UNIVERSE_SIZE] = build_standard_deck();

/// Per-slot visual state.
///
/// - **NotFlipped**: face-down, value hidden from the player
/// - **Flipped**: face-up, waiting for comparison with a second card
/// - **Matched**: face-up permanently for the rest of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisualState {
    #[default]
    NotFlipped,
    Flipped,
    Matched,
}

impl VisualState {
    /// Only face-down cards accept a selection.
    pub fn is_selectable(&self) -> bool {
        matches!(self, VisualState::NotFlipped)
    }

    /// Whether the card's value may be shown to the player.
    pub fn is_revealed(&self) -> bool {
        !matches!(self, VisualState::NotFlipped)
    }
}

/// Actions a display layer sends to the game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the card at the given slot index
    Select(usize),
    /// Deal a fresh board, keeping the best score
    NewGame,
}

impl GameAction {
    /// Parse an action from its text form (`"select <i>"`, `"new"`).
    pub fn from_str(s: &str) -> Option<Self> {
        let mut parts = s.split_whitespace();
        let head = parts.next()?.to_lowercase();
        let action = match head.as_str() {
            "select" | "flip" => GameAction::Select(parts.next()?.parse().ok()?),
            "new" | "newgame" | "restart" => GameAction::NewGame,
            _ => return None,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(action)
    }
}

/// Number of columns used to lay out `slot_count` cards in a grid.
///
/// Picks the smallest column count whose square covers every slot, so boards
/// stay roughly square (18 cards → 5 columns, 4 cards → 2 columns).
pub fn grid_columns(slot_count: usize) -> usize {
    let mut cols = 1;
    while cols * cols < slot_count {
        cols += 1;
    }
    cols
}

/// Number of rows for `slot_count` cards at the width given by [`grid_columns`].
pub fn grid_rows(slot_count: usize) -> usize {
    let cols = grid_columns(slot_count);
    slot_count.div_ceil(cols)
}
